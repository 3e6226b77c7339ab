use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::{ClassbookError, Result};

/// File name looked up inside the configuration directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

const MIN_REFERENCE_YEAR: i32 = 1900;
const MAX_REFERENCE_YEAR: i32 = 2200;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub profile: ProfileSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSettings {
    /// Year used to turn a birth year into an age; current year when unset
    pub reference_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// One of trace, debug, info, warn, error
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Default configuration directory, `<config dir>/classbook`
    pub fn default_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("classbook"))
    }

    /// Load configuration, falling back to defaults when the file is missing
    pub async fn load(path: &Path) -> Result<Self> {
        if !fs::try_exists(path).await? {
            tracing::info!("No configuration at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).await?;
        let config: Self =
            toml::from_str(&content).map_err(|e| ClassbookError::config(e.to_string()))?;

        config.validate()?;
        tracing::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Validate and write the configuration as TOML, creating parent directories
    pub async fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| ClassbookError::config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, content).await?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.log_level()?;

        if let Some(year) = self.profile.reference_year {
            if !(MIN_REFERENCE_YEAR..=MAX_REFERENCE_YEAR).contains(&year) {
                return Err(ClassbookError::config(format!(
                    "reference_year {} must be between {} and {}",
                    year, MIN_REFERENCE_YEAR, MAX_REFERENCE_YEAR
                )));
            }
        }
        Ok(())
    }

    /// Configured log level
    pub fn log_level(&self) -> Result<tracing::Level> {
        self.logging
            .level
            .parse()
            .map_err(|_| {
                ClassbookError::config(format!("unknown log level '{}'", self.logging.level))
            })
    }

    /// Year profiles are computed against
    pub fn reference_year(&self) -> i32 {
        self.profile
            .reference_year
            .unwrap_or_else(crate::profile::current_year)
    }
}
