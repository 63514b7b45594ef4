//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{EstimateResult, Package};

use super::calculators::{format_money, seasonal_price, CURRENCY_CODE};

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            currency: CURRENCY_CODE.to_string(),
        }
    }
}

/// Response for a booking estimate
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub total: MoneyResponse,
    pub display: String,
    pub is_valid: bool,
}

impl From<EstimateResult> for EstimateResponse {
    fn from(result: EstimateResult) -> Self {
        Self {
            total: MoneyResponse::new(result.total),
            display: format_money(result.total),
            is_valid: result.is_valid,
        }
    }
}

/// One package in the public price list
#[derive(Debug, Serialize)]
pub struct PackageResponse {
    pub id: String,
    pub label: String,
    pub destination: String,
    pub duration_days: u32,
    pub season: &'static str,
    pub base_price: MoneyResponse,
    pub final_price: MoneyResponse,
}

impl From<&Package> for PackageResponse {
    fn from(package: &Package) -> Self {
        Self {
            id: package.id.clone(),
            label: package.label(),
            destination: package.destination.clone(),
            duration_days: package.duration_days,
            season: package.season.as_str(),
            base_price: MoneyResponse::new(package.base_price),
            final_price: MoneyResponse::new(seasonal_price(package)),
        }
    }
}

/// Generic error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
}
