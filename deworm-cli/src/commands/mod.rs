pub mod config;
pub mod copy;
pub mod export;
pub mod interactive;
pub mod next;
pub mod show;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use deworm_core::date::{ensure_not_future, parse_last_date};
use deworm_core::export::{Artifact, ClipboardSink, ExportSink};
use deworm_core::{DewormError, ReminderEvent};
use owo_colors::OwoColorize;

use crate::settings::Settings;

/// Parse a last-dose date: `YYYY-MM-DD` first, then natural language.
///
/// Relative words ("yesterday", "3 months ago") resolve against `now`, the
/// wall-clock time in the reminder zone, and the result must not be after
/// `now`'s date.
pub fn parse_date_arg(input: &str, now: NaiveDateTime) -> Result<NaiveDate> {
    let today = now.date();
    match parse_last_date(input, today) {
        Ok(date) => Ok(date),
        Err(DewormError::InvalidDate(_)) => {
            let expanded = expand_abbreviations(input);
            let dt = fuzzydate::parse_relative_to(expanded, now)
                .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input.trim()))?;
            Ok(ensure_not_future(dt.date(), today)?)
        }
        Err(e) => Err(e.into()),
    }
}

/// Expand month and weekday abbreviations that fuzzydate doesn't handle.
fn expand_abbreviations(input: &str) -> String {
    let abbrevs = [
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thur", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    let lower = input.to_lowercase();
    lower
        .split_whitespace()
        .map(|word| {
            abbrevs
                .iter()
                .find(|(abbr, _)| *abbr == word)
                .map(|(_, full)| *full)
                .unwrap_or(word)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compute the reminder for a date argument.
pub fn reminder_for(settings: &Settings, input: &str) -> Result<ReminderEvent> {
    let last_dose = parse_date_arg(input, settings.now_local())?;
    Ok(ReminderEvent::from_last_dose(last_dose, Utc::now(), settings.tz)?)
}

/// Save the calendar file and print the confirmation notice.
pub fn export_reminder(reminder: &ReminderEvent, sink: &dyn ExportSink) -> Result<()> {
    let location = sink.save(&Artifact::calendar(reminder))?;
    eprintln!("{}", format!("  Saved {location}").dimmed());
    eprintln!(
        "{}",
        "  ✅ Calendar reminder added! Don't forget to deworm in 3 months 💊".green()
    );
    Ok(())
}

/// Copy the reminder line. Failures are reported once, never retried.
pub fn copy_reminder(reminder: &ReminderEvent, clipboard: &dyn ClipboardSink) {
    match clipboard.copy(&reminder.clipboard_text()) {
        Ok(()) => eprintln!("{}", "  Copied to clipboard!".green()),
        Err(e) => eprintln!("  {}", e.to_string().red()),
    }
}
