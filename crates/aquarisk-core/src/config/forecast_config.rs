use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Forecast subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// How long the external predictor may run before the fallback is used (milliseconds).
    pub predictor_timeout_ms: u64,
    /// Consult the external predictor at all. When false the statistical estimator is used directly.
    pub use_external_predictor: bool,
}

impl ForecastConfig {
    pub fn predictor_timeout(&self) -> Duration {
        Duration::from_millis(self.predictor_timeout_ms)
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            predictor_timeout_ms: defaults::DEFAULT_PREDICTOR_TIMEOUT_MS,
            use_external_predictor: defaults::DEFAULT_USE_EXTERNAL_PREDICTOR,
        }
    }
}
