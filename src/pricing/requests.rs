//! Request DTOs for pricing API endpoints.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::FormState;

/// Request to estimate a booking.
///
/// Mirrors the booking form: every field is optional and read as raw text, so
/// the API accepts the same half-filled states the page does. Numbers and
/// booleans become their text, `null` becomes empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EstimateRequest {
    #[serde(deserialize_with = "raw_text")]
    pub name: String,
    #[serde(deserialize_with = "raw_text")]
    pub email: String,
    #[serde(deserialize_with = "raw_text")]
    pub start_date: String,
    #[serde(deserialize_with = "raw_text")]
    pub end_date: String,
    #[serde(alias = "package", deserialize_with = "raw_text")]
    pub package_id: String,
    #[serde(deserialize_with = "raw_text")]
    pub guests: String,
    #[serde(alias = "promo", deserialize_with = "raw_text")]
    pub promo_code: String,
}

/// Read any JSON value as the text a form field would hold
fn raw_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    };
    Ok(text)
}

impl From<EstimateRequest> for FormState {
    fn from(req: EstimateRequest) -> Self {
        FormState {
            name: req.name,
            email: req.email,
            start_date: req.start_date,
            end_date: req.end_date,
            package_id: req.package_id,
            guests: req.guests,
            promo_code: req.promo_code,
        }
    }
}
