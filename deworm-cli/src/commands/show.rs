use anyhow::{Context, Result};
use chrono::Utc;
use deworm_core::ics::parse_reminder;

use crate::render::{ParsedInZone, Render};
use crate::settings::Settings;

pub fn run(settings: &Settings, file: &str) -> Result<()> {
    let content =
        std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))?;
    let reminder =
        parse_reminder(&content).with_context(|| format!("Failed to parse {}", file))?;

    let view = ParsedInZone {
        reminder: &reminder,
        tz: settings.tz,
    };
    println!("{}", view.render(Utc::now()));

    Ok(())
}
