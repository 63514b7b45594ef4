//! Booking form validity gate

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::FormState;

/// Parse a date as produced by date/datetime inputs.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM[:SS]` and RFC 3339 timestamps.
/// Returns `None` for anything else.
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(datetime);
        }
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|datetime| datetime.naive_utc())
}

/// Whether the booking form may be submitted.
///
/// Every required field must be filled in and the trip must end strictly after
/// it starts. Malformed dates make the form invalid.
pub fn validate_form(form: &FormState) -> bool {
    let required = [
        &form.name,
        &form.email,
        &form.start_date,
        &form.end_date,
        &form.package_id,
        &form.guests,
    ];
    if required.iter().any(|value| value.trim().is_empty()) {
        return false;
    }

    match (parse_date(&form.start_date), parse_date(&form.end_date)) {
        (Some(start), Some(end)) => end > start,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> FormState {
        FormState {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            start_date: "2026-03-10".to_string(),
            end_date: "2026-03-17".to_string(),
            package_id: "city".to_string(),
            guests: "2".to_string(),
            promo_code: String::new(),
        }
    }

    #[test]
    fn test_parse_date_formats() {
        let day = parse_date("2026-03-10").unwrap();
        assert_eq!(day.to_string(), "2026-03-10 00:00:00");

        let minutes = parse_date("2026-03-10T14:30").unwrap();
        assert_eq!(minutes.to_string(), "2026-03-10 14:30:00");

        let seconds = parse_date("2026-03-10T14:30:15").unwrap();
        assert_eq!(seconds.to_string(), "2026-03-10 14:30:15");

        let rfc = parse_date("2026-03-10T14:30:00+02:00").unwrap();
        assert_eq!(rfc.to_string(), "2026-03-10 12:30:00");
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("next tuesday"), None);
        assert_eq!(parse_date("2026-13-01"), None);
        assert_eq!(parse_date("2026-02-30"), None);
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate_form(&valid_form()));
    }

    #[test]
    fn test_promo_code_is_optional() {
        let mut form = valid_form();
        form.promo_code = String::new();
        assert!(validate_form(&form));
    }

    #[test]
    fn test_each_required_field_empty_fails() {
        let clears: [fn(&mut FormState); 6] = [
            |f| f.name.clear(),
            |f| f.email.clear(),
            |f| f.start_date.clear(),
            |f| f.end_date.clear(),
            |f| f.package_id.clear(),
            |f| f.guests.clear(),
        ];

        for (i, clear) in clears.iter().enumerate() {
            let mut form = valid_form();
            clear(&mut form);
            assert!(!validate_form(&form), "field #{} left empty", i);
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut form = valid_form();
        form.name = "   ".to_string();
        assert!(!validate_form(&form));
    }

    #[test]
    fn test_end_date_must_follow_start_date() {
        let mut form = valid_form();
        form.end_date = form.start_date.clone();
        assert!(!validate_form(&form));

        form.end_date = "2026-03-01".to_string();
        assert!(!validate_form(&form));

        form.end_date = "2026-03-11".to_string();
        assert!(validate_form(&form));
    }

    #[test]
    fn test_malformed_dates_are_invalid() {
        let mut form = valid_form();
        form.start_date = "soon".to_string();
        assert!(!validate_form(&form));

        let mut form = valid_form();
        form.end_date = "2026/03/20".to_string();
        assert!(!validate_form(&form));
    }

    #[test]
    fn test_validation_reflects_latest_input() {
        let mut form = valid_form();
        assert!(validate_form(&form));
        form.email.clear();
        assert!(!validate_form(&form));
        form.email = "grace@example.com".to_string();
        assert!(validate_form(&form));
    }
}
