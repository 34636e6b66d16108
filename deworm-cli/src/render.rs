//! Terminal rendering for reminders.
//!
//! Extension traits that add colored output to deworm-core types using
//! owo_colors.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use deworm_core::ReminderEvent;
use deworm_core::date::format_long;
use deworm_core::ics::ParsedReminder;
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self, now: DateTime<Utc>) -> String;
}

impl Render for ReminderEvent {
    fn render(&self, now: DateTime<Utc>) -> String {
        let lines = [
            format!("  {}", "Your next deworming date".dimmed()),
            format!("  {}", format_long(self.due_date).bold().green()),
            format!("  {}", render_days(self.days_from(now)).dimmed()),
        ];
        lines.join("\n")
    }
}

/// A reminder read back from a file, shown in the reader's zone.
pub struct ParsedInZone<'a> {
    pub reminder: &'a ParsedReminder,
    pub tz: Tz,
}

impl Render for ParsedInZone<'_> {
    fn render(&self, now: DateTime<Utc>) -> String {
        let due_date = self.reminder.due_date(self.tz);
        let days = deworm_core::date::days_until(self.reminder.due_at, now);
        let summary = self.reminder.summary.as_deref().unwrap_or("(No title)");

        let lines = [
            format!("  {}", summary.bold()),
            format!("  {}", format_long(due_date).green()),
            format!("  {}", render_days(days).dimmed()),
            format!("  {}", self.reminder.uid.dimmed()),
        ];
        lines.join("\n")
    }
}

/// "N days from now", or how long ago the date passed.
pub fn render_days(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "1 day from now".to_string(),
        -1 => "1 day ago".to_string(),
        d if d < 0 => format!("{} days ago", -d),
        d => format!("{d} days from now"),
    }
}
