use serde::{Deserialize, Serialize};

use super::defaults;

/// Disease catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Optional TOML file replacing the built-in catalog. `None` uses the built-in set.
    pub path: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: defaults::DEFAULT_CATALOG_PATH.map(str::to_string),
        }
    }
}
