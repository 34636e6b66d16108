//! The reminder produced by a calculation.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::constants::UID_DOMAIN;
use crate::date::{self, format_long};
use crate::error::DewormResult;

/// A computed deworming reminder.
///
/// Created fresh on every calculation and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderEvent {
    /// Calendar date the next dose is due.
    pub due_date: NaiveDate,
    /// Start of `due_date` in the user's time zone.
    pub due_at: DateTime<Utc>,
    pub generated_at: DateTime<Utc>,
    pub uid: String,
}

impl ReminderEvent {
    /// Build a reminder for an explicit due instant.
    pub fn new(due_date: NaiveDate, due_at: DateTime<Utc>, generated_at: DateTime<Utc>) -> Self {
        ReminderEvent {
            due_date,
            due_at,
            generated_at,
            uid: uid_for(generated_at),
        }
    }

    /// Build the reminder that follows a dose taken on `last_dose`.
    ///
    /// `last_dose` comes through the input guard, so advancing it cannot
    /// fail; the only error left is a zone with no start of day.
    pub fn from_last_dose(
        last_dose: NaiveDate,
        generated_at: DateTime<Utc>,
        tz: Tz,
    ) -> DewormResult<Self> {
        let due_date = date::advance(last_dose)?;
        let due_at = date::start_of_day(due_date, tz)?;
        tracing::debug!(%last_dose, %due_date, %due_at, "computed next dose");
        Ok(ReminderEvent::new(due_date, due_at, generated_at))
    }

    /// Whole days left until the dose is due, rounded up.
    pub fn days_from(&self, now: DateTime<Utc>) -> i64 {
        date::days_until(self.due_at, now)
    }

    /// The short line offered for the clipboard.
    pub fn clipboard_text(&self) -> String {
        format!("Reminder: Deworm on {}", format_long(self.due_date))
    }
}

/// Event UID derived from the generation time at millisecond resolution.
pub fn uid_for(generated_at: DateTime<Utc>) -> String {
    format!("{}@{}", generated_at.timestamp_millis(), UID_DOMAIN)
}
