//! Overall risk aggregation.
//!
//! Risk factors are derived from the report context alone and never gate
//! disease scoring. The score starts at the top disease confidence (or a
//! floor of 10 when nothing matched), gains 5 per risk factor, and is
//! clamped to `[0, 100]`.

use aquarisk_core::constants::{MAX_RISK_SCORE, NO_MATCH_RISK_FLOOR, RISK_FACTOR_WEIGHT};
use aquarisk_core::models::{AnalysisResult, DiseaseMatch, RiskFactor, RiskLevel};
use aquarisk_core::report::SymptomReport;

/// Standalone risk factors present in the report, in fixed order.
pub fn risk_factors(report: &SymptomReport) -> Vec<RiskFactor> {
    let mut factors = Vec::with_capacity(3);
    if report.water_source.is_high_risk() {
        factors.push(RiskFactor::HighRiskWaterSource);
    }
    if report.water_treatment.is_untreated() {
        factors.push(RiskFactor::UntreatedWater);
    }
    if report.severity.is_severe() {
        factors.push(RiskFactor::SevereSymptoms);
    }
    factors
}

/// Overall risk score from the top confidence and the number of risk factors.
pub fn risk_score(top_confidence: Option<u8>, factor_count: usize) -> u8 {
    let start = u32::from(top_confidence.unwrap_or(NO_MATCH_RISK_FLOOR));
    let bonus = u32::from(RISK_FACTOR_WEIGHT).saturating_mul(factor_count as u32);
    start
        .saturating_add(bonus)
        .min(u32::from(MAX_RISK_SCORE)) as u8
}

/// Combine ranked matches (already sorted) with the report's risk factors.
pub fn aggregate(ranked_matches: Vec<DiseaseMatch>, report: &SymptomReport) -> AnalysisResult {
    let risk_factors = risk_factors(report);
    let risk_score = risk_score(
        ranked_matches.first().map(|m| m.confidence),
        risk_factors.len(),
    );
    AnalysisResult {
        ranked_matches,
        risk_factors,
        risk_score,
        risk_level: RiskLevel::from_score(risk_score),
    }
}
