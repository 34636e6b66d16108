//! User configuration at ~/.config/deworm/config.toml

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::{DewormError, DewormResult};

static DEFAULT_OUTPUT_DIR: &str = ".";

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DewormConfig {
    /// Where exported calendar files are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// IANA zone whose midnight starts the due day. Falls back to the
    /// system zone when unset.
    #[serde(default)]
    pub timezone: Option<String>,
}

impl Default for DewormConfig {
    fn default() -> Self {
        DewormConfig {
            output_dir: default_output_dir(),
            timezone: None,
        }
    }
}

impl DewormConfig {
    pub fn config_path() -> DewormResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DewormError::Config("Could not determine config directory".into()))?
            .join("deworm");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, or defaults when there is none.
    pub fn load() -> DewormResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> DewormResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(DewormConfig::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            DewormError::Config(format!("Could not read {}: {e}", path.display()))
        })?;

        Self::parse(&contents)
            .map_err(|e| DewormError::Config(format!("{} in {}", e, path.display())))
    }

    fn parse(contents: &str) -> Result<Self, String> {
        let config: DewormConfig = toml::from_str(contents).map_err(|e| e.to_string())?;
        config.timezone().map_err(|e| e.to_string())?;
        Ok(config)
    }

    /// Output directory with `~` expanded.
    pub fn output_dir(&self) -> PathBuf {
        let raw = self.output_dir.to_string_lossy();
        PathBuf::from(shellexpand::tilde(raw.as_ref()).into_owned())
    }

    /// The configured zone, if any.
    pub fn timezone(&self) -> DewormResult<Option<Tz>> {
        self.timezone
            .as_deref()
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|_| DewormError::Config(format!("Unknown timezone '{name}'")))
            })
            .transpose()
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DewormResult<()> {
        let contents = format!(
            "\
# deworm configuration

# Where exported reminders are saved:
# output_dir = \"{}\"

# Time zone of the reminder (defaults to the system zone):
# timezone = \"Africa/Nairobi\"
",
            DEFAULT_OUTPUT_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DewormError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DewormError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
