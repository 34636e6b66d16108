use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::reminder_for;
use crate::render::Render;
use crate::settings::Settings;

#[derive(Serialize)]
struct NextDose<'a> {
    due_date: NaiveDate,
    due_at: DateTime<Utc>,
    days_from_now: i64,
    clipboard_text: &'a str,
}

pub fn run(settings: &Settings, date: &str, json: bool) -> Result<()> {
    let reminder = reminder_for(settings, date)?;
    let now = Utc::now();

    if json {
        let text = reminder.clipboard_text();
        let next = NextDose {
            due_date: reminder.due_date,
            due_at: reminder.due_at,
            days_from_now: reminder.days_from(now),
            clipboard_text: &text,
        };
        let output = serde_json::to_string_pretty(&next).context("Failed to serialize result")?;
        println!("{output}");
    } else {
        println!("{}", reminder.render(now));
    }

    Ok(())
}
