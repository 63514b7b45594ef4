//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no DOM or network access. The browser
//! adapter and the JSON API both call into these.

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

use crate::models::{Catalog, EstimateResult, FormState, Package};

use super::validation::validate_form;

/// Symbol prefixed to every displayed amount
pub const CURRENCY_SYMBOL: &str = "$";

/// ISO code reported by the JSON API
pub const CURRENCY_CODE: &str = "USD";

/// Promo code that unlocks the early booking discount
pub const EARLY_BIRD_CODE: &str = "EARLYBIRD";

/// Parties larger than this pay the group surcharge
pub const GROUP_THRESHOLD: i64 = 2;

/// Smallest party that can be booked
pub const MIN_GUESTS: i64 = 1;

const GROUP_SURCHARGE: Decimal = dec!(1.2);
const EARLY_BIRD_DISCOUNT: Decimal = dec!(0.9);

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use wanderlust_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Format an amount for display: currency symbol and exactly two decimals.
///
/// ```
/// use rust_decimal_macros::dec;
/// use wanderlust_web::pricing::format_money;
///
/// assert_eq!(format_money(dec!(2500)), "$2500.00");
/// assert_eq!(format_money(dec!(1530.456)), "$1530.46");
/// ```
pub fn format_money(amount: Decimal) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, round_money(amount, 2))
}

/// Multiply a price by a rate. An amount too large to represent prices at zero.
fn scale(price: Decimal, rate: Decimal) -> Decimal {
    price.checked_mul(rate).unwrap_or_else(|| {
        tracing::warn!("Price {} overflowed when scaled by {}", price, rate);
        Decimal::ZERO
    })
}

/// Package price after the seasonal adjustment
pub fn seasonal_price(package: &Package) -> Decimal {
    scale(package.base_price, package.season.multiplier())
}

/// Parse the raw guest count. Anything that is not a whole number yields `None`.
pub fn parse_guests(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Apply the party-size rule.
///
/// More than two guests pay a 20% surcharge; fewer than one guest cannot be
/// booked, so the price drops to zero.
pub fn apply_guest_rule(price: Decimal, guests: i64) -> Decimal {
    if guests < MIN_GUESTS {
        Decimal::ZERO
    } else if guests > GROUP_THRESHOLD {
        scale(price, GROUP_SURCHARGE)
    } else {
        price
    }
}

/// Whether a promo code matches the early bird offer (trimmed, case-insensitive)
pub fn is_early_bird(promo_code: &str) -> bool {
    promo_code.trim().eq_ignore_ascii_case(EARLY_BIRD_CODE)
}

/// Apply the promo discount. Unknown codes leave the price unchanged.
pub fn apply_promo(price: Decimal, promo_code: &str) -> Decimal {
    if is_early_bird(promo_code) {
        scale(price, EARLY_BIRD_DISCOUNT)
    } else {
        price
    }
}

/// Estimate the booking total and decide whether the form may be submitted.
///
/// Order matters: base price, then guest rule, then promo. An unparseable guest
/// count prices at zero and keeps the form invalid.
pub fn estimate(catalog: &Catalog, form: &FormState) -> EstimateResult {
    let base = catalog.base_price(form.package_id.trim());
    let guests = parse_guests(&form.guests);

    let total = match guests {
        Some(count) => apply_promo(apply_guest_rule(base, count), &form.promo_code),
        None => Decimal::ZERO,
    };

    let is_valid = validate_form(form) && guests.is_some_and(|count| count >= MIN_GUESTS);

    EstimateResult { total, is_valid }
}
