use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::ConfigError;

/// Largest disk count whose `2^n - 1` minimum still fits a `u64` move count
/// with room to spare.
pub const MAX_SUPPORTED_DISKS: usize = 63;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub puzzle: PuzzleConfig,
    pub solver: SolverConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Disks on the board at startup.
    pub disk_count: usize,
    /// Upper bound for the in-game `+` key.
    pub max_disks: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        PuzzleConfig {
            disk_count: 3,
            max_disks: 10,
        }
    }
}

impl PuzzleConfig {
    /// Validated disk count as a non-zero value.
    pub fn disk_count(&self) -> Result<NonZeroUsize, ConfigError> {
        NonZeroUsize::new(self.disk_count)
            .ok_or_else(|| ConfigError::Validation("puzzle.disk_count must be >= 1".into()))
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Disk counts listed in the "by hand at one move per second" table.
    pub hypothetical_disks: Vec<usize>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            hypothetical_disks: vec![10, 5, 20, 50],
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: PathBuf,
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            file: PathBuf::from("hanoi.log"),
            level: "info".to_string(),
        }
    }
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
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.puzzle.disk_count()?;
        if self.puzzle.max_disks > MAX_SUPPORTED_DISKS {
            return Err(ConfigError::Validation(format!(
                "puzzle.max_disks must be <= {MAX_SUPPORTED_DISKS}"
            )));
        }
        if self.puzzle.disk_count > self.puzzle.max_disks {
            return Err(ConfigError::Validation(
                "puzzle.disk_count must be <= puzzle.max_disks".into(),
            ));
        }

        let url = self.solver.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::Validation(
                "solver.base_url must not be empty".into(),
            ));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Validation(
                "solver.base_url must start with http:// or https://".into(),
            ));
        }
        if self.solver.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "solver.timeout_secs must be > 0".into(),
            ));
        }

        if let Some(&bad) = self
            .display
            .hypothetical_disks
            .iter()
            .find(|&&n| n == 0 || n > MAX_SUPPORTED_DISKS)
        {
            return Err(ConfigError::Validation(format!(
                "display.hypothetical_disks entry {bad} must be in 1..={MAX_SUPPORTED_DISKS}"
            )));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.level must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.display.hypothetical_disks, vec![10, 5, 20, 50]);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[puzzle]
disk_count = 5
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.puzzle.disk_count, 5);
        assert_eq!(config.puzzle.max_disks, 10);
        assert_eq!(config.solver.base_url, "http://localhost:8080");
        assert_eq!(config.solver.timeout_secs, 10);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.puzzle.disk_count, default.puzzle.disk_count);
        assert_eq!(config.logging.file, default.logging.file);
    }

    #[test]
    fn test_validation_rejects_zero_disks() {
        let mut config = AppConfig::default();
        config.puzzle.disk_count = 0;
        assert!(config.validate().is_err());
        assert!(config.puzzle.disk_count().is_err());
    }

    #[test]
    fn test_validation_rejects_disks_above_max() {
        let mut config = AppConfig::default();
        config.puzzle.disk_count = 11;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_huge_max() {
        let mut config = AppConfig::default();
        config.puzzle.max_disks = 64;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_url() {
        let mut config = AppConfig::default();
        config.solver.base_url = "localhost:8080".into();
        assert!(config.validate().is_err());
        config.solver.base_url = "   ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let mut config = AppConfig::default();
        config.solver.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_hypothetical_disks() {
        let mut config = AppConfig::default();
        config.display.hypothetical_disks = vec![5, 0];
        assert!(config.validate().is_err());
        config.display.hypothetical_disks = vec![64];
        assert!(config.validate().is_err());
        config.display.hypothetical_disks = Vec::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_hanoi.toml")).unwrap();
        assert_eq!(config.puzzle.disk_count, 3);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hanoi.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[solver]
base_url = "https://hanoi.example.com/api"

[display]
hypothetical_disks = [3, 4]
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.solver.base_url, "https://hanoi.example.com/api");
        assert_eq!(config.display.hypothetical_disks, vec![3, 4]);
        assert_eq!(config.puzzle.disk_count, 3);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hanoi.toml");
        std::fs::write(&path, "[puzzle]\ndisk_count = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
