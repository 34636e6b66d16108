//! ICS file parsing using the icalendar crate's parser.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{read_calendar, unfold},
};

use crate::error::{DewormError, DewormResult};

/// The parts of an exported reminder that can be read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReminder {
    pub uid: String,
    pub summary: Option<String>,
    pub due_at: DateTime<Utc>,
}

impl ParsedReminder {
    /// Calendar date of the due instant as seen in `tz`.
    pub fn due_date(&self, tz: Tz) -> NaiveDate {
        self.due_at.with_timezone(&tz).date_naive()
    }
}

/// Parse the first VEVENT of an ICS document into a reminder.
pub fn parse_reminder(content: &str) -> DewormResult<ParsedReminder> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(|e| DewormError::IcsParse(e.to_string()))?;

    let vevent = calendar
        .components
        .iter()
        .find(|c| c.name == "VEVENT")
        .ok_or_else(|| DewormError::IcsParse("No VEVENT in calendar".into()))?;

    let uid = vevent
        .find_prop("UID")
        .map(|p| p.val.to_string())
        .ok_or_else(|| DewormError::IcsParse("VEVENT has no UID".into()))?;

    let summary = vevent.find_prop("SUMMARY").map(|p| p.val.to_string());

    let dtstart = vevent
        .find_prop("DTSTART")
        .ok_or_else(|| DewormError::IcsParse("VEVENT has no DTSTART".into()))?;
    let start = DatePerhapsTime::try_from(dtstart)
        .map_err(|_| DewormError::IcsParse(format!("Invalid DTSTART '{}'", dtstart.val)))?;

    Ok(ParsedReminder {
        uid,
        summary,
        due_at: to_utc(start)?,
    })
}

/// Resolve any DTSTART form to a UTC instant. Floating times and bare dates
/// are read as UTC.
fn to_utc(start: DatePerhapsTime) -> DewormResult<DateTime<Utc>> {
    match start {
        DatePerhapsTime::Date(d) => Ok(d.and_time(NaiveTime::MIN).and_utc()),
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            CalendarDateTime::Utc(dt) => Ok(dt),
            CalendarDateTime::Floating(naive) => Ok(naive.and_utc()),
            CalendarDateTime::WithTimezone { date_time, tzid } => {
                let tz: Tz = tzid
                    .parse()
                    .map_err(|_| DewormError::IcsParse(format!("Unknown TZID '{tzid}'")))?;
                tz.from_local_datetime(&date_time)
                    .earliest()
                    .map(|dt| dt.with_timezone(&Utc))
                    .ok_or_else(|| {
                        DewormError::IcsParse(format!("{date_time} does not exist in {tzid}"))
                    })
            }
        },
    }
}
