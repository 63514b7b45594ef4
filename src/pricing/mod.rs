//! Pricing engine module.
//!
//! Booking estimates, seasonal package prices and the form validity gate.
//! The calculators are pure and shared by the browser adapter and the JSON API.

pub mod calculators;
pub mod requests;
pub mod responses;
#[cfg(not(target_arch = "wasm32"))]
pub mod routes;
pub mod validation;

// Re-export commonly used items
pub use calculators::{estimate, format_money, round_money, seasonal_price};
#[cfg(not(target_arch = "wasm32"))]
pub use routes::router;
pub use validation::validate_form;
