/// Aquarisk engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// --- Confidence scoring ---

/// Minimum confidence for a disease to appear in ranked matches.
pub const INCLUSION_THRESHOLD: u8 = 15;

/// Hard ceiling on a disease confidence. Never 100.
pub const CONFIDENCE_CEILING: u8 = 95;

/// Points the matched-symptom base score can contribute at most.
pub const BASE_SCORE_SCALE: f64 = 60.0;

// --- Risk aggregation ---

/// Risk score used when no disease reaches the inclusion threshold.
pub const NO_MATCH_RISK_FLOOR: u8 = 10;

/// Points added to the risk score per risk factor.
pub const RISK_FACTOR_WEIGHT: u8 = 5;

/// Risk score strictly above this is `high`.
pub const HIGH_RISK_THRESHOLD: u8 = 50;

/// Risk score strictly above this is `medium`.
pub const MEDIUM_RISK_THRESHOLD: u8 = 25;

/// Upper bound of the overall risk score.
pub const MAX_RISK_SCORE: u8 = 100;

// --- Confidence bands (display) ---

pub const HIGH_CONFIDENCE_BAND: u8 = 70;
pub const MEDIUM_CONFIDENCE_BAND: u8 = 50;

// --- Environmental forecast ---

/// Starting point of the environmental base risk.
pub const FORECAST_BASE_RISK: f64 = 30.0;

/// Ceiling of the environmental base risk.
pub const FORECAST_BASE_CEILING: f64 = 95.0;

/// Number of months in a forecast projection.
pub const FORECAST_HORIZON_MONTHS: usize = 6;

/// Bounds of every monthly projected risk.
pub const FORECAST_MONTH_MIN: i32 = 5;
pub const FORECAST_MONTH_MAX: i32 = 95;

/// Forecast overall level cut-offs (strictly above).
pub const FORECAST_HIGH_THRESHOLD: u8 = 60;
pub const FORECAST_MEDIUM_THRESHOLD: u8 = 35;

/// Per-disease trend cut-offs (strictly above).
pub const TREND_UP_THRESHOLD: u8 = 50;
pub const TREND_STABLE_THRESHOLD: u8 = 30;
