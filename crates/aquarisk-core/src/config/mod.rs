pub mod catalog_config;
pub mod defaults;
pub mod forecast_config;
pub mod observability_config;

use serde::{Deserialize, Serialize};

pub use catalog_config::CatalogConfig;
pub use forecast_config::ForecastConfig;
pub use observability_config::ObservabilityConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AquariskConfig {
    pub catalog: CatalogConfig,
    pub forecast: ForecastConfig,
    pub observability: ObservabilityConfig,
}

impl AquariskConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}
