//! Runtime settings resolved from the config file and the system.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;
use deworm_core::config::DewormConfig;

pub struct Settings {
    pub output_dir: PathBuf,
    pub tz: Tz,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let config = DewormConfig::load()?;
        let tz = match config.timezone()? {
            Some(tz) => tz,
            None => system_timezone(),
        };
        tracing::debug!(%tz, output_dir = %config.output_dir().display(), "settings loaded");

        Ok(Settings {
            output_dir: config.output_dir(),
            tz,
        })
    }

    /// Wall-clock time in the reminder time zone. Relative dates and the
    /// future-date guard both resolve against this.
    pub fn now_local(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.tz).naive_local()
    }
}

/// The system's IANA zone, or UTC when it cannot be determined.
fn system_timezone() -> Tz {
    let name = match iana_time_zone::get_timezone() {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!("Could not determine system timezone ({e}), using UTC");
            return Tz::UTC;
        }
    };

    name.parse().unwrap_or_else(|_| {
        tracing::warn!("Unknown system timezone '{name}', using UTC");
        Tz::UTC
    })
}
