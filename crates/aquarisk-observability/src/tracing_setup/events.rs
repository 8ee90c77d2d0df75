//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a per-disease scoring outcome.
pub fn disease_scored(disease_id: &str, matched: usize, confidence: u8, included: bool) {
    tracing::debug!(
        event = "disease_scored",
        disease_id = %disease_id,
        matched = matched,
        confidence = confidence,
        included = included,
        "disease scored"
    );
}

/// Log a completed symptom analysis.
pub fn analysis_completed(matches: usize, risk_score: u8, risk_level: &str) {
    tracing::info!(
        event = "analysis_completed",
        matches = matches,
        risk_score = risk_score,
        risk_level = %risk_level,
        "analysis completed"
    );
}

/// Log symptom ids the rule table does not know. They are skipped.
pub fn unknown_symptoms(symptom_ids: &[&str]) {
    tracing::debug!(
        event = "unknown_symptoms",
        symptom_ids = ?symptom_ids,
        "unknown symptom ids skipped"
    );
}

/// Log a catalog load.
pub fn catalog_loaded(source: &str, diseases: usize) {
    tracing::info!(
        event = "catalog_loaded",
        source = %source,
        diseases = diseases,
        "disease catalog loaded"
    );
}

/// Log a completed forecast.
pub fn forecast_completed(source: &str, risk_score: u8, overall_risk: &str) {
    tracing::info!(
        event = "forecast_completed",
        source = %source,
        risk_score = risk_score,
        overall_risk = %overall_risk,
        "forecast completed"
    );
}

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}
