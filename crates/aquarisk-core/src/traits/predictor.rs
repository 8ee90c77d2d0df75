use crate::errors::AquariskResult;
use crate::models::{ForecastReport, ForecastRequest};

/// An external outbreak model consulted before the statistical fallback.
///
/// Implementations may block (network, subprocess); the caller bounds the
/// call with a timeout and falls back on any error.
pub trait IOutbreakPredictor: Send + Sync {
    /// Model name, recorded as the forecast source.
    fn name(&self) -> &str;

    fn predict(&self, request: &ForecastRequest) -> AquariskResult<ForecastReport>;
}

/// A forecaster that always produces a report. Implemented by the statistical estimator.
pub trait IOutbreakForecaster: Send + Sync {
    fn forecast(&self, request: &ForecastRequest) -> ForecastReport;
}
