//! Handing reminders to the host environment.
//!
//! Saving a file and writing to the clipboard are capabilities of whatever
//! runs the tool, so both sit behind a trait.

use std::path::PathBuf;

use crate::constants::{CALENDAR_MEDIA_TYPE, EXPORT_FILENAME};
use crate::error::{DewormError, DewormResult};
use crate::ics::generate_ics;
use crate::reminder::ReminderEvent;

/// Bytes plus the metadata a save dialog needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// The calendar file for a reminder.
    pub fn calendar(reminder: &ReminderEvent) -> Self {
        Artifact {
            filename: EXPORT_FILENAME.to_string(),
            media_type: CALENDAR_MEDIA_TYPE.to_string(),
            bytes: generate_ics(reminder).into_bytes(),
        }
    }
}

/// Somewhere an artifact can be saved.
pub trait ExportSink {
    /// Save the artifact, returning a description of where it went.
    fn save(&self, artifact: &Artifact) -> DewormResult<String>;
}

/// Writes artifacts into a directory under their suggested filename.
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectorySink { dir: dir.into() }
    }

    pub fn path_for(&self, artifact: &Artifact) -> PathBuf {
        self.dir.join(&artifact.filename)
    }
}

impl ExportSink for DirectorySink {
    fn save(&self, artifact: &Artifact) -> DewormResult<String> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            DewormError::Export(format!("Could not create {}: {e}", self.dir.display()))
        })?;

        let path = self.path_for(artifact);
        std::fs::write(&path, &artifact.bytes)
            .map_err(|e| DewormError::Export(format!("Could not write {}: {e}", path.display())))?;

        tracing::info!(path = %path.display(), media_type = %artifact.media_type, "saved artifact");
        Ok(path.display().to_string())
    }
}

/// Somewhere short text can be copied to.
pub trait ClipboardSink {
    fn copy(&self, text: &str) -> DewormResult<()>;
}
