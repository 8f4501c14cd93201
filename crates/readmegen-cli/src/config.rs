//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.
//! The CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. File given via `--config` (an unreadable explicit file is an error)
//! 3. The default config file, if present
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fallback commands offered when an answer is left empty.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Overrides the built-in `npm install` fallback.
    pub installation_command: Option<String>,
    /// Overrides the built-in `npm test` fallback.
    pub test_command: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`. When
    /// given, the file must exist and parse; the default location is
    /// optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        if let Some(path) = config_file {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("cannot read config '{}': {e}", path.display()))?;
            return toml::from_str(&raw)
                .map_err(|e| anyhow::anyhow!("cannot parse config '{}': {e}", path.display()));
        }

        let default_path = Self::config_path();
        match std::fs::read_to_string(&default_path) {
            Ok(raw) => toml::from_str(&raw).map_err(|e| {
                anyhow::anyhow!("cannot parse config '{}': {e}", default_path.display())
            }),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.readmegen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "readmegen", "readmegen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".readmegen.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_have_no_overrides() {
        let cfg = AppConfig::default();
        assert!(cfg.defaults.installation_command.is_none());
        assert!(cfg.defaults.test_command.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = PathBuf::from("/definitely/not/here.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\ninstallation_command = \"cargo build\"").unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(
            cfg.defaults.installation_command.as_deref(),
            Some("cargo build")
        );
        assert!(cfg.defaults.test_command.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not toml at all [[[").unwrap();
        assert!(AppConfig::load(Some(&file.path().to_path_buf())).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
