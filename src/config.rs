use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;

/// Where column choices come from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Both players pick their columns by hand.
    #[default]
    User,
    /// Columns are drawn at random for both players.
    Random,
}

impl GameMode {
    pub fn name(self) -> &'static str {
        match self {
            GameMode::User => "User input",
            GameMode::Random => "Random input",
        }
    }

    pub fn toggled(self) -> GameMode {
        match self {
            GameMode::User => GameMode::Random,
            GameMode::Random => GameMode::User,
        }
    }
}

/// Game settings.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    pub mode: GameMode,
    /// Seed for the random column picker; a fresh seed is drawn when unset.
    pub seed: Option<u64>,
}

/// Logging settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. `info` or `connect_four=debug`.
    pub filter: String,
    /// Log file used by the terminal UI, which cannot share the screen with
    /// log output. Headless play logs to stderr.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: "info".to_string(),
            file: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub play: PlayConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "log.filter must not be empty".into(),
            ));
        }
        if let Err(e) = EnvFilter::try_new(&self.log.filter) {
            return Err(ConfigError::Validation(format!(
                "log.filter '{}' is not a valid filter: {e}",
                self.log.filter
            )));
        }
        if let Some(file) = &self.log.file {
            if file.as_os_str().is_empty() {
                return Err(ConfigError::Validation(
                    "log.file must not be empty when set".into(),
                ));
            }
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
