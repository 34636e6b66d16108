//! Reminder session state.
//!
//! `Empty` until a last-dose date is entered, `Pending` while a date is set
//! but no result is shown, `Resolved` once a reminder has been calculated.
//! Changing the date always hides the previous result.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::DewormResult;
use crate::reminder::ReminderEvent;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Empty,
    Pending {
        source: NaiveDate,
    },
    Resolved {
        source: NaiveDate,
        reminder: ReminderEvent,
    },
}

#[derive(Debug, Default)]
pub struct ReminderState {
    phase: Phase,
    // Generation time of the last reminder, so UIDs stay distinct even when
    // two calculations land in the same millisecond.
    last_generated: Option<DateTime<Utc>>,
}

impl ReminderState {
    pub fn new() -> Self {
        ReminderState::default()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Record a new last-dose date. `None` means the input was cleared.
    pub fn set_source_date(&mut self, source: Option<NaiveDate>) {
        self.phase = match source {
            Some(source) => Phase::Pending { source },
            None => Phase::Empty,
        };
    }

    /// Compute and reveal the reminder for the current source date.
    ///
    /// Does nothing while no date is set. Calculating again while resolved
    /// produces a fresh reminder with a new UID.
    pub fn calculate(
        &mut self,
        now: DateTime<Utc>,
        tz: Tz,
    ) -> DewormResult<Option<&ReminderEvent>> {
        let Some(source) = self.source_date() else {
            tracing::debug!("calculate ignored: no source date");
            return Ok(None);
        };

        let generated_at = match self.last_generated {
            Some(last) if now.timestamp_millis() <= last.timestamp_millis() => {
                last + Duration::milliseconds(1)
            }
            _ => now,
        };

        let reminder = ReminderEvent::from_last_dose(source, generated_at, tz)?;
        self.last_generated = Some(generated_at);
        self.phase = Phase::Resolved { source, reminder };

        Ok(self.reminder())
    }

    pub fn source_date(&self) -> Option<NaiveDate> {
        match self.phase {
            Phase::Empty => None,
            Phase::Pending { source } | Phase::Resolved { source, .. } => Some(source),
        }
    }

    /// The visible reminder, if one has been calculated for the current date.
    pub fn reminder(&self) -> Option<&ReminderEvent> {
        match &self.phase {
            Phase::Resolved { reminder, .. } => Some(reminder),
            _ => None,
        }
    }

    pub fn is_result_visible(&self) -> bool {
        matches!(self.phase, Phase::Resolved { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 2, 10, 0, 0).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_calculate_on_empty_is_noop() {
        let mut state = ReminderState::new();

        let result = state.calculate(now(), Tz::UTC).unwrap();

        assert!(result.is_none());
        assert_eq!(state.phase(), &Phase::Empty);
        assert!(!state.is_result_visible());
    }

    #[test]
    fn test_full_cycle() {
        let mut state = ReminderState::new();

        state.set_source_date(Some(ymd(2025, 1, 1)));
        assert_eq!(state.phase(), &Phase::Pending { source: ymd(2025, 1, 1) });
        assert!(state.reminder().is_none());

        let due = state.calculate(now(), Tz::UTC).unwrap().map(|r| r.due_date);
        assert_eq!(due, Some(ymd(2025, 4, 1)));
        assert!(state.is_result_visible());

        state.set_source_date(Some(ymd(2024, 12, 1)));
        assert_eq!(state.phase(), &Phase::Pending { source: ymd(2024, 12, 1) });
        assert!(!state.is_result_visible());
        assert!(state.reminder().is_none());
    }

    #[test]
    fn test_clearing_source_returns_to_empty() {
        let mut state = ReminderState::new();
        state.set_source_date(Some(ymd(2025, 1, 1)));
        state.calculate(now(), Tz::UTC).unwrap();

        state.set_source_date(None);

        assert_eq!(state.phase(), &Phase::Empty);
        assert_eq!(state.source_date(), None);
    }

    #[test]
    fn test_recalculate_gets_fresh_uid_in_same_millisecond() {
        let mut state = ReminderState::new();
        state.set_source_date(Some(ymd(2025, 1, 1)));

        let first = state.calculate(now(), Tz::UTC).unwrap().map(|r| r.uid.clone());
        let second = state.calculate(now(), Tz::UTC).unwrap().map(|r| r.uid.clone());

        assert!(first.is_some());
        assert_ne!(first, second, "Repeated calculations must not reuse a UID");
    }
}
