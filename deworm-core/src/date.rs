//! Date arithmetic for reminders.
//!
//! Month advancement follows the overflow rule of native date libraries:
//! when the target month is too short for the source day-of-month, the
//! excess days roll into the following month instead of clamping to the
//! month's last day (`2024-01-31` + 3 months is `2024-05-01`).

use chrono::{DateTime, Datelike, Days, LocalResult, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

use crate::constants::REMINDER_INTERVAL_MONTHS;
use crate::error::{DewormError, DewormResult};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// The next due date: `date` advanced by the reminder interval.
///
/// Total for every date `parse_last_date` accepts; an error can only come
/// from dates within three months of `NaiveDate::MAX`, which are never
/// "today or earlier".
pub fn advance(date: NaiveDate) -> DewormResult<NaiveDate> {
    advance_months(date, REMINDER_INTERVAL_MONTHS)
}

/// Add `months` calendar months to `date` without clamping the day-of-month.
///
/// Only fails when the result leaves chrono's representable range.
pub fn advance_months(date: NaiveDate, months: u32) -> DewormResult<NaiveDate> {
    let out_of_range = || DewormError::DateOutOfRange(format!("{date} + {months} months"));

    let total = i64::from(date.year()) * 12 + i64::from(date.month0()) + i64::from(months);
    let year = i32::try_from(total.div_euclid(12)).map_err(|_| out_of_range())?;
    let month = total.rem_euclid(12) as u32 + 1;

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_days(Days::new(u64::from(date.day0()))))
        .ok_or_else(out_of_range)
}

/// Parse the "last dewormed" date entered by the user.
///
/// Accepts `YYYY-MM-DD` and rejects dates after `today`.
pub fn parse_last_date(input: &str, today: NaiveDate) -> DewormResult<NaiveDate> {
    let input = input.trim();
    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| DewormError::InvalidDate(input.to_string()))?;
    ensure_not_future(date, today)
}

/// Reject dates later than `today`.
pub fn ensure_not_future(date: NaiveDate, today: NaiveDate) -> DewormResult<NaiveDate> {
    if date > today {
        return Err(DewormError::FutureDate(date));
    }
    Ok(date)
}

/// Long-form `en-US` rendering, e.g. "March 5, 2025".
pub fn format_long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Start of `date` in `tz`, as a UTC instant.
pub fn start_of_day(date: NaiveDate, tz: Tz) -> DewormResult<DateTime<Utc>> {
    let midnight = date.and_time(NaiveTime::MIN);

    let local = match tz.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        // Midnight skipped by a DST jump; the day starts an hour later.
        LocalResult::None => midnight
            .checked_add_signed(TimeDelta::hours(1))
            .and_then(|later| tz.from_local_datetime(&later).earliest()),
    };

    local
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| DewormError::DateOutOfRange(format!("start of {date} in {tz}")))
}

/// Whole days from `now` until `due_at`, rounded up. Negative once overdue.
pub fn days_until(due_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (due_at - now).num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_advance_keeps_day_of_month() {
        assert_eq!(advance(ymd(2024, 1, 15)).unwrap(), ymd(2024, 4, 15));
        assert_eq!(advance(ymd(2025, 1, 1)).unwrap(), ymd(2025, 4, 1));
    }

    #[test]
    fn test_advance_overflows_short_month() {
        // April has 30 days, so the 31st rolls into May
        assert_eq!(advance(ymd(2024, 1, 31)).unwrap(), ymd(2024, 5, 1));
        // Leap February: 30th is one past the 29th
        assert_eq!(advance(ymd(2023, 11, 30)).unwrap(), ymd(2024, 3, 1));
        // Common February: 30th is two past the 28th
        assert_eq!(advance(ymd(2024, 11, 30)).unwrap(), ymd(2025, 3, 2));
    }

    #[test]
    fn test_advance_rolls_over_year() {
        assert_eq!(advance(ymd(2024, 11, 15)).unwrap(), ymd(2025, 2, 15));
        assert_eq!(advance(ymd(2024, 12, 31)).unwrap(), ymd(2025, 3, 31));
    }

    #[test]
    fn test_advance_is_deterministic() {
        let date = ymd(2024, 8, 31);
        assert_eq!(advance(date).unwrap(), advance(date).unwrap());
        assert_eq!(advance(date).unwrap(), ymd(2024, 12, 1));
    }

    #[test]
    fn test_advance_total_for_accepted_dates() {
        // Every day of a leap year, and the last days a four-digit year allows
        let mut date = ymd(2024, 1, 1);
        while date <= ymd(2024, 12, 31) {
            assert!(advance(date).is_ok(), "advance failed for {}", date);
            date = date.succ_opt().unwrap();
        }
        let last = parse_last_date("9999-12-31", ymd(9999, 12, 31)).unwrap();
        assert_eq!(advance(last).unwrap(), ymd(10000, 3, 31));
    }

    #[test]
    fn test_advance_months_zero_is_identity() {
        assert_eq!(advance_months(ymd(2024, 2, 29), 0).unwrap(), ymd(2024, 2, 29));
    }

    #[test]
    fn test_advance_months_past_chrono_max_fails() {
        let result = advance_months(NaiveDate::MAX, 3);
        assert!(
            matches!(result, Err(DewormError::DateOutOfRange(_))),
            "Expected DateOutOfRange, got {:?}",
            result
        );
    }

    #[test]
    fn test_parse_last_date() {
        let today = ymd(2025, 6, 1);
        assert_eq!(parse_last_date("2025-01-01", today).unwrap(), ymd(2025, 1, 1));
        assert_eq!(parse_last_date(" 2025-06-01 ", today).unwrap(), today);
    }

    #[test]
    fn test_parse_last_date_rejects_future() {
        let today = ymd(2025, 6, 1);
        assert!(matches!(
            parse_last_date("2025-06-02", today),
            Err(DewormError::FutureDate(d)) if d == ymd(2025, 6, 2)
        ));
    }

    #[test]
    fn test_parse_last_date_rejects_garbage() {
        let today = ymd(2025, 6, 1);
        for input in ["", "yesterday", "2025-13-01", "2025-02-30", "01/02/2025"] {
            assert!(
                matches!(parse_last_date(input, today), Err(DewormError::InvalidDate(_))),
                "Should reject {:?}",
                input
            );
        }
    }

    #[test]
    fn test_format_long() {
        assert_eq!(format_long(ymd(2025, 3, 5)), "March 5, 2025");
        assert_eq!(format_long(ymd(2024, 12, 25)), "December 25, 2024");
    }

    #[test]
    fn test_start_of_day_utc() {
        let start = start_of_day(ymd(2025, 4, 1), Tz::UTC).unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_start_of_day_zoned() {
        // New York is UTC-4 in April
        let start = start_of_day(ymd(2025, 4, 1), chrono_tz::America::New_York).unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 4, 1, 4, 0, 0).unwrap());

        // Berlin is UTC+1 in January
        let start = start_of_day(ymd(2025, 1, 10), chrono_tz::Europe::Berlin).unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 1, 9, 23, 0, 0).unwrap());
    }

    #[test]
    fn test_start_of_day_skipped_midnight() {
        // Santiago springs forward at 00:00 on 2024-09-08
        let start = start_of_day(ymd(2024, 9, 8), chrono_tz::America::Santiago).unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 9, 8, 4, 0, 0).unwrap());
    }

    #[test]
    fn test_days_until_rounds_up() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let due = Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap();
        assert_eq!(days_until(due, now), 90);

        let exact = Utc.with_ymd_and_hms(2025, 1, 3, 12, 0, 0).unwrap();
        assert_eq!(days_until(exact, now), 2);
    }

    #[test]
    fn test_days_until_overdue() {
        let now = Utc.with_ymd_and_hms(2025, 4, 3, 12, 0, 0).unwrap();
        let due = Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap();
        assert_eq!(days_until(due, now), -2);
    }
}
