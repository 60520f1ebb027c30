use std::path::PathBuf;

/// Errors from the external solver. The session surfaces every variant as a
/// non-fatal "solver query failed" message and keeps its state.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        source: reqwest::Error,
    },

    #[error("solver returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("failed to decode solver response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    #[error("solver unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_error_display() {
        let err = SolverError::Status {
            url: "http://localhost:8080/calculate-moves?numDisks=3".to_string(),
            status: 503,
        };
        assert_eq!(
            err.to_string(),
            "solver returned HTTP 503 for http://localhost:8080/calculate-moves?numDisks=3"
        );
    }

    #[test]
    fn test_decode_error_display() {
        let source = serde_json::from_str::<u64>("\"seven\"").unwrap_err();
        let err = SolverError::Decode {
            url: "http://solver/solve-tower?numDisks=2".to_string(),
            source,
        };
        assert!(err
            .to_string()
            .starts_with("failed to decode solver response from http://solver/solve-tower?numDisks=2: "));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("puzzle.disk_count must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: puzzle.disk_count must be >= 1"
        );
    }
}
