use thiserror::Error;

/// A page option that could not be read; the affected leaf keeps its default.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {source}")]
    Invalid {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{0} must be an object")]
    NotARecord(String),
    #[error("unknown easing function `{0}`")]
    UnknownEasing(String),
}

/// A rendering backend failed to create or attach a heart node.
#[derive(Debug, Error)]
#[error("layer operation failed: {0}")]
pub struct LayerError(pub String);
