//! Booking page view: what the total display and submit button show

use crate::models::{Catalog, FormState};
use crate::pricing::{estimate, format_money};

/// Everything the booking page writes back after an input change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingView {
    pub total_text: String,
    pub submit_disabled: bool,
}

/// Recompute the booking view from the current form contents
pub fn booking_view(catalog: &Catalog, form: &FormState) -> BookingView {
    let result = estimate(catalog, form);
    BookingView {
        total_text: format!("Estimated Total: {}", format_money(result.total)),
        submit_disabled: !result.is_valid,
    }
}
