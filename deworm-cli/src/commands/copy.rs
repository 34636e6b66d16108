use anyhow::Result;

use super::{copy_reminder, reminder_for};
use crate::clipboard::TerminalClipboard;
use crate::settings::Settings;

pub fn run(settings: &Settings, date: &str) -> Result<()> {
    let reminder = reminder_for(settings, date)?;
    copy_reminder(&reminder, &TerminalClipboard);
    Ok(())
}
