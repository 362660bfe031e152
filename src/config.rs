//! Application configuration
//!
//! Read from `<data_dir>/config.json`. Command-line flags override file
//! values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.json";
pub const STATE_FILE: &str = "state.json";
pub const LOG_DIR: &str = "logs";

/// Settings for the terminal front-ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where state, config and logs live
    pub data_dir: PathBuf,
    /// Directory of `<list>.txt` word files; built-in lists when unset
    pub words_dir: Option<PathBuf>,
    /// Mode to start in, overriding the last one played
    pub default_mode: Option<String>,
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            words_dir: None,
            default_mode: None,
            log_level: "info".to_string(),
        }
    }
}

/// Platform data directory for the app, or `.wordle_ranks` when unknown
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".wordle_ranks"), |dir| dir.join("wordle_ranks"))
}

impl AppConfig {
    /// Load `config.json` from `data_dir`
    ///
    /// A missing file gives defaults rooted at `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE);
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<Self>(&raw)
                .with_context(|| format!("parsing {}", path.display()))?
        } else {
            Self::default()
        };
        config.data_dir = data_dir.to_path_buf();
        Ok(config)
    }

    /// Write this config to `<data_dir>/config.json`
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)
            .with_context(|| format!("creating {}", self.data_dir.display()))?;
        let path = self.data_dir.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))
    }

    #[must_use]
    pub fn state_path(&self) -> PathBuf {
        self.data_dir.join(STATE_FILE)
    }

    #[must_use]
    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.data_dir, temp_dir.path());
        assert_eq!(config.log_level, "info");
        assert!(config.words_dir.is_none());
        assert_eq!(config.state_path(), temp_dir.path().join("state.json"));
    }

    #[test]
    fn save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig {
            data_dir: temp_dir.path().join("data"),
            words_dir: Some(PathBuf::from("/usr/share/words")),
            default_mode: Some("epic".into()),
            log_level: "debug".into(),
        };
        config.save().unwrap();

        let loaded = AppConfig::load(&config.data_dir).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), r#"{"default_mode":"junior"}"#).unwrap();

        let config = AppConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.default_mode.as_deref(), Some("junior"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "{").unwrap();
        assert!(AppConfig::load(temp_dir.path()).is_err());
    }
}
