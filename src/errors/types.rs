use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Malformed target for path '{path}': {reason}")]
    MalformedTarget { path: String, reason: String },

    #[error("Unknown detector kind: {0}")]
    UnknownDetectorKind(String),

    #[error("Detector construction failed for '{kind}': {reason}")]
    DetectorConstruction { kind: String, reason: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Probe timed out after {0}s")]
    Timeout(u64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dispatch error: {0}")]
    Dispatch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ProbeError {
    /// Whether the error is recoverable within a single mutation sweep
    /// (skip the offending path and keep probing).
    pub fn is_path_local(&self) -> bool {
        matches!(self, ProbeError::MalformedTarget { .. })
    }
}
