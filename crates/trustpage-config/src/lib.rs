use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use trustpage_engine::{Formatter, FormatterSettings, SettingsError};

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "TRUSTPAGE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid formatter settings: {0}")]
    InvalidSettings(#[from] SettingsError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub formatter: FormatterSettings,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    /// Loads from `$TRUSTPAGE_CONFIG` when set, else the default location.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::resolved_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/trustpage");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// The config file in effect: `$TRUSTPAGE_CONFIG` (expanded) or
    /// [`Config::config_path`].
    pub fn resolved_path() -> PathBuf {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(value) if !value.is_empty() => {
                let path = PathBuf::from(value);
                Self::expand_path(&path).unwrap_or(path)
            }
            _ => Self::config_path(),
        }
    }

    /// Builds a formatter from the `[formatter]` table.
    pub fn formatter(&self) -> Result<Formatter, ConfigError> {
        Ok(Formatter::new(&self.formatter)?)
    }

    /// Expands shell variables and a leading tilde.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
