use super::{CatalogError, PredictorError, ValidationError};

/// Top-level error type for the Aquarisk engine.
/// All subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum AquariskError {
    #[error("catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("predictor error: {0}")]
    PredictorError(#[from] PredictorError),

    #[error("config error: {0}")]
    ConfigError(String),
}

impl From<toml::de::Error> for AquariskError {
    fn from(e: toml::de::Error) -> Self {
        AquariskError::ConfigError(e.to_string())
    }
}

/// Convenience type alias.
pub type AquariskResult<T> = Result<T, AquariskError>;
