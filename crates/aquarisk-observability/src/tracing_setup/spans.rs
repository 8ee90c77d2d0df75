//! Span definitions per operation: analysis, forecast, fallback.

/// Create a symptom analysis span.
#[macro_export]
macro_rules! analysis_span {
    ($symptom_count:expr, $severity:expr) => {
        tracing::info_span!(
            "aquarisk.analysis",
            symptom_count = $symptom_count,
            severity = %$severity
        )
    };
}

/// Create a forecast span.
#[macro_export]
macro_rules! forecast_span {
    ($season:expr, $start:expr) => {
        tracing::info_span!("aquarisk.forecast", season = ?$season, start = %$start)
    };
}

/// Create a span around an external predictor call.
#[macro_export]
macro_rules! predictor_span {
    ($model:expr, $timeout_ms:expr) => {
        tracing::info_span!("aquarisk.predictor", model = %$model, timeout_ms = $timeout_ms)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ANALYSIS: &str = "aquarisk.analysis";
    pub const FORECAST: &str = "aquarisk.forecast";
    pub const PREDICTOR: &str = "aquarisk.predictor";
}
