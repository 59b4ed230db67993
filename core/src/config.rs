//! User settings loaded from `config.yaml` in the config directory.
//!
//! Every field has a default, so a missing file or a file that sets only a
//! few keys is fine. A file that is not valid YAML, or that sets a field to
//! an unusable value, is an error: the launcher reports it instead of
//! silently ignoring the user's configuration.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::store::kv::validate_key;
use crate::store::notes::DEFAULT_STORAGE_KEY;

/// File name of the settings file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";


#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid config value for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}


/// Runtime settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the note data and logs. Defaults to the config
    /// directory itself.
    pub data_dir: Option<PathBuf>,
    /// Store key the note list lives under.
    pub storage_key: String,
    /// Log level; `None` picks the build-mode default.
    pub log_level: Option<String>,
    /// Theme name: `dark`, `light` or `minimal`.
    pub theme: String,
    /// How long non-blocking status messages stay visible.
    pub status_ttl_ms: u64,
    /// Event loop poll interval.
    pub tick_rate_ms: u64,
}


impl Default for Settings {
    fn default() -> Self {
        default_settings()
    }
}


impl Settings {
    /// Data directory, falling back to `config_dir`.
    pub fn resolve_data_dir(&self, config_dir: &Path) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| config_dir.to_path_buf())
    }

    /// Check field values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_key(&self.storage_key).map_err(|e| ConfigError::Invalid {
            key: "storage_key",
            reason: e.to_string(),
        })?;
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid {
                key: "tick_rate_ms",
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}


/// Returns sensible defaults for all settings fields.
pub fn default_settings() -> Settings {
    Settings {
        data_dir: None,
        storage_key: DEFAULT_STORAGE_KEY.into(),
        log_level: None,
        theme: "dark".into(),
        status_ttl_ms: 4000,
        tick_rate_ms: 250,
    }
}


/// Load settings from `path`. A missing file yields the defaults.
pub fn load(path: &Path) -> Result<Settings, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(default_settings()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    parse(&content)
}


/// Parse settings from YAML text. Blank text yields the defaults.
pub fn parse(content: &str) -> Result<Settings, ConfigError> {
    if content.trim().is_empty() {
        return Ok(default_settings());
    }
    let settings: Settings = serde_yaml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = default_settings();
        assert_eq!(s.storage_key, "notes");
        assert_eq!(s.theme, "dark");
        assert!(s.data_dir.is_none());
        assert!(s.log_level.is_none());
        assert_eq!(Settings::default(), s);
    }

    #[test]
    fn parse_partial_file_keeps_other_defaults() {
        let s = parse("theme: light\nstatus_ttl_ms: 1000\n").unwrap();
        assert_eq!(s.theme, "light");
        assert_eq!(s.status_ttl_ms, 1000);
        assert_eq!(s.storage_key, "notes");
        assert_eq!(s.tick_rate_ms, 250);
    }

    #[test]
    fn parse_blank_is_default() {
        assert_eq!(parse("  \n").unwrap(), default_settings());
    }

    #[test]
    fn parse_data_dir_and_level() {
        let s = parse("data_dir: /var/lib/noteboard\nlog_level: warn\n").unwrap();
        assert_eq!(s.data_dir, Some(PathBuf::from("/var/lib/noteboard")));
        assert_eq!(s.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn parse_malformed_is_error() {
        assert!(matches!(parse("theme: [unclosed"), Err(ConfigError::Parse(_))));
        assert!(matches!(parse("tick_rate_ms: soon"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn parse_rejects_empty_storage_key() {
        let err = parse("storage_key: \"\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "storage_key", .. }));
    }

    #[test]
    fn parse_rejects_path_like_storage_key() {
        for raw in ["storage_key: \"my notes\"", "storage_key: ../notes", "storage_key: .hidden"] {
            let err = parse(raw).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { key: "storage_key", .. }), "{}", raw);
        }
        assert_eq!(parse("storage_key: board_v2").unwrap().storage_key, "board_v2");
    }

    #[test]
    fn load_rejects_unusable_storage_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "storage_key: \"my notes\"\n").unwrap();
        assert!(matches!(load(&path), Err(ConfigError::Invalid { key: "storage_key", .. })));
    }

    #[test]
    fn parse_rejects_zero_tick_rate() {
        let err = parse("tick_rate_ms: 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "tick_rate_ms", .. }));
    }

    #[test]
    fn resolve_data_dir_falls_back_to_config_dir() {
        let s = default_settings();
        assert_eq!(s.resolve_data_dir(Path::new("/cfg")), PathBuf::from("/cfg"));
        let s = Settings {
            data_dir: Some("/data".into()),
            ..default_settings()
        };
        assert_eq!(s.resolve_data_dir(Path::new("/cfg")), PathBuf::from("/data"));
    }

    #[test]
    fn load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let s = load(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(s, default_settings());
    }
}
