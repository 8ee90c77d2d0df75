/// External outbreak predictor errors. Any of these triggers the statistical fallback.
#[derive(Debug, thiserror::Error)]
pub enum PredictorError {
    #[error("predictor unavailable: {name}")]
    Unavailable { name: String },

    #[error("predictor {name} timed out after {timeout_ms}ms")]
    Timeout { name: String, timeout_ms: u64 },

    #[error("predictor {name} failed: {reason}")]
    PredictionFailed { name: String, reason: String },

    #[error("predictor {name} returned malformed output: {reason}")]
    InvalidOutput { name: String, reason: String },
}
