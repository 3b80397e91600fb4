//! Configuration file support.
//!
//! Settings are read from a TOML file:
//!
//! ```toml
//! [playback]
//! speed = "2x"      # 0.5x | 1x | 2x | 4x
//! autoplay = false
//!
//! [logging]
//! level = "info"
//! directory = "logs"
//! ```
//!
//! Discovery: an explicit path wins, otherwise `algoviz.toml` in the current
//! directory is used if present, otherwise defaults apply. Command-line flags
//! override whatever the file says.

use crate::playback::Speed;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "algoviz.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub speed: Speed,
    /// Start playing as soon as the replay opens
    pub autoplay: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    pub level: String,
    /// Directory for log files in TUI mode
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl Config {
    /// Load from `path`, or from [`CONFIG_FILE`] in the current directory.
    ///
    /// A missing explicit path is an error; a missing default file is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::parse("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.playback.speed, Speed::Normal);
        assert!(!config.playback.autoplay);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file() {
        let config = Config::parse(
            r#"
            [playback]
            speed = "4x"
            "#,
        )
        .unwrap();

        assert_eq!(config.playback.speed, Speed::Quadruple);
        assert!(!config.playback.autoplay);
        assert!(config.logging.directory.is_none());
    }

    #[test]
    fn test_rejects_unknown_speed() {
        let result = Config::parse("[playback]\nspeed = \"3x\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"\ndirectory = \"logs\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.directory, Some(PathBuf::from("logs")));
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = Config::load(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
