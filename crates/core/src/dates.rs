//! Contract date parsing.
//!
//! Contract dates arrive as date-only strings (`YYYY-MM-DD`). Parsing them
//! through a local-timezone path can shift the stored instant by a day, so
//! this module pins every contract date to midnight UTC. The pattern check
//! is strict and the year/month/day must form a real calendar date.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::error::CoreError;

/// Parse a `YYYY-MM-DD` string into midnight UTC of that calendar date.
///
/// `field` names the offending input field in the validation error, e.g.
/// `contract_start_date`.
///
/// Rejects anything that is not exactly ten characters of
/// `digits-digits-digits` shape, and any decomposition that does not map
/// back to a real calendar date (`2024-02-30` fails, `2024-02-29` is a
/// valid leap day).
pub fn parse_contract_date(field: &str, value: &str) -> Result<DateTime<Utc>, CoreError> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped {
        return Err(CoreError::Validation(format!(
            "{field} must be a YYYY-MM-DD date, got {value:?}"
        )));
    }

    // The shape check guarantees these slices are pure ASCII digits.
    let year: i32 = value[0..4].parse().map_err(|_| bad_date(field, value))?;
    let month: u32 = value[5..7].parse().map_err(|_| bad_date(field, value))?;
    let day: u32 = value[8..10].parse().map_err(|_| bad_date(field, value))?;

    // from_ymd_opt is the round-trip check: a month/day combination that
    // does not exist on the calendar comes back as None.
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| bad_date(field, value))?;

    Ok(DateTime::from_naive_utc_and_offset(
        date.and_time(NaiveTime::MIN),
        Utc,
    ))
}

fn bad_date(field: &str, value: &str) -> CoreError {
    CoreError::Validation(format!("{field} is not a valid calendar date: {value:?}"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{Datelike, Timelike};

    use super::*;
    use crate::error::CoreError;

    #[test]
    fn parses_plain_date_to_midnight_utc() {
        let dt = parse_contract_date("contract_start_date", "2024-01-01").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 1, 1));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (0, 0, 0));
    }

    #[test]
    fn accepts_leap_day() {
        assert!(parse_contract_date("contract_end_date", "2024-02-29").is_ok());
    }

    #[test]
    fn rejects_nonexistent_calendar_date() {
        let err = parse_contract_date("contract_end_date", "2024-02-30").unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) => {
            assert!(msg.contains("contract_end_date"));
        });
    }

    #[test]
    fn rejects_leap_day_outside_leap_year() {
        assert!(parse_contract_date("next_increase_date", "2023-02-29").is_err());
    }

    #[test]
    fn rejects_month_thirteen() {
        assert!(parse_contract_date("contract_start_date", "2024-13-01").is_err());
    }

    #[test]
    fn rejects_loose_formats() {
        for bad in [
            "2024-1-1",
            "01-01-2024",
            "2024/01/01",
            "2024-01-01T00:00:00Z",
            "2024-01-01 ",
            "",
            "not-a-date!",
        ] {
            assert!(
                parse_contract_date("contract_start_date", bad).is_err(),
                "expected rejection of {bad:?}"
            );
        }
    }

    #[test]
    fn error_names_the_field() {
        let err = parse_contract_date("next_increase_date", "garbage").unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) => {
            assert!(msg.contains("next_increase_date"));
        });
    }
}
