// Single source of truth for all default values.

// --- Catalog ---
pub const DEFAULT_CATALOG_PATH: Option<&str> = None;

// --- Forecast ---
pub const DEFAULT_PREDICTOR_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_USE_EXTERNAL_PREDICTOR: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_OUTPUT: bool = true;
pub const DEFAULT_LOG_ENV_VAR: &str = "AQUARISK_LOG";

// --- Environmental inputs ---
pub const DEFAULT_TEMPERATURE_C: f64 = 25.0;
pub const DEFAULT_HUMIDITY_PCT: f64 = 80.0;
pub const DEFAULT_RAINFALL_MM: f64 = 150.0;
pub const DEFAULT_WATER_QUALITY_INDEX: f64 = 1.0;
pub const DEFAULT_SANITATION_INDEX: f64 = 1.0;
pub const DEFAULT_RECENT_REPORTS: u32 = 0;
