use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use deworm_core::export::{Artifact, DirectorySink, ExportSink};
use deworm_core::{DewormError, DewormResult};

use super::{export_reminder, reminder_for};
use crate::settings::Settings;

/// Writes the artifact to stdout for piping into other tools.
struct StdoutSink;

impl ExportSink for StdoutSink {
    fn save(&self, artifact: &Artifact) -> DewormResult<String> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(&artifact.bytes)
            .and_then(|_| stdout.flush())
            .map_err(|e| DewormError::Export(e.to_string()))?;
        Ok(format!("{} to stdout", artifact.filename))
    }
}

pub fn run(settings: &Settings, date: &str, output: Option<&str>, stdout: bool) -> Result<()> {
    let reminder = reminder_for(settings, date)?;

    if stdout {
        return StdoutSink
            .save(&Artifact::calendar(&reminder))
            .map(|_| ())
            .context("Failed to write calendar file");
    }

    let dir = match output {
        Some(dir) => PathBuf::from(dir),
        None => settings.output_dir.clone(),
    };
    export_reminder(&reminder, &DirectorySink::new(dir))
}
