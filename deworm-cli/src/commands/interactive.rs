use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use deworm_core::ReminderState;
use deworm_core::export::DirectorySink;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

use super::{copy_reminder, export_reminder, parse_date_arg};
use crate::clipboard::TerminalClipboard;
use crate::render::Render;
use crate::settings::Settings;

const ACTIONS: [&str; 4] = [
    "Download calendar reminder (.ics)",
    "Copy reminder",
    "Change date",
    "Quit",
];

pub fn run(settings: &Settings) -> Result<()> {
    let mut state = ReminderState::new();
    let sink = DirectorySink::new(settings.output_dir.clone());
    let clipboard = TerminalClipboard;

    println!("{}", "When did you last deworm?".bold());
    state.set_source_date(prompt_last_date(settings.now_local())?);

    loop {
        if !state.is_result_visible() {
            let now = Utc::now();
            match state.calculate(now, settings.tz)? {
                Some(reminder) => println!("\n{}\n", reminder.render(now)),
                // Input cleared
                None => return Ok(()),
            }
        }

        let Some(reminder) = state.reminder().cloned() else {
            return Ok(());
        };

        let action = Select::new()
            .with_prompt("  What next?")
            .items(&ACTIONS)
            .default(0)
            .interact()?;

        match action {
            0 => {
                if let Err(e) = export_reminder(&reminder, &sink) {
                    eprintln!("  {}", e.to_string().red());
                }
            }
            1 => copy_reminder(&reminder, &clipboard),
            2 => state.set_source_date(prompt_last_date(settings.now_local())?),
            _ => return Ok(()),
        }
    }
}

/// Ask for the last dose until the input parses. Blank input clears it.
fn prompt_last_date(now: NaiveDateTime) -> Result<Option<NaiveDate>> {
    loop {
        let input: String = Input::new()
            .with_prompt("  Last deworming date (blank to quit)")
            .allow_empty(true)
            .interact_text()?;

        if input.trim().is_empty() {
            return Ok(None);
        }

        match parse_date_arg(&input, now) {
            Ok(date) => return Ok(Some(date)),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}
