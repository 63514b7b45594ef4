//! Booking form state and estimate results

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Snapshot of the booking form, exactly as typed by the visitor.
///
/// Every field is kept as raw text; parsing happens in the estimator so that
/// half-filled forms can still be evaluated on each keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub start_date: String,
    pub end_date: String,
    pub package_id: String,
    pub guests: String,
    pub promo_code: String,
}

/// Result of a price estimate, recomputed on every form change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimateResult {
    /// Total at full precision; round only for display
    pub total: Decimal,
    /// Whether the booking may be submitted
    pub is_valid: bool,
}
