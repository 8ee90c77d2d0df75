use aquarisk_catalog::{DiseaseDefinition, SymptomMatcher};
use aquarisk_core::constants::{CONFIDENCE_CEILING, INCLUSION_THRESHOLD};
use aquarisk_core::models::DiseaseMatch;
use aquarisk_core::report::SymptomReport;
use serde::Serialize;

use crate::factors;
use crate::tables::BonusTables;

/// Every factor's contribution to one disease's confidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfidenceBreakdown {
    pub disease_id: String,
    pub disease_name: String,
    pub matched_symptoms: Vec<String>,
    pub critical_match_count: usize,
    pub base_score: f64,
    pub critical_bonus: f64,
    pub multiplicity_bonus: f64,
    pub severity_multiplier: f64,
    pub water_source: f64,
    pub water_treatment: f64,
    pub duration: f64,
    pub combination_bonus: f64,
    /// Score before clamping and rounding.
    pub raw_score: f64,
    pub confidence: u8,
}

impl ConfidenceBreakdown {
    pub fn is_included(&self) -> bool {
        self.confidence >= INCLUSION_THRESHOLD
    }

    pub fn to_match(&self) -> DiseaseMatch {
        DiseaseMatch {
            disease_id: self.disease_id.clone(),
            disease_name: self.disease_name.clone(),
            matched_symptoms: self.matched_symptoms.clone(),
            matched_symptom_count: self.matched_symptoms.len(),
            critical_match_count: self.critical_match_count,
            confidence: self.confidence,
        }
    }
}

/// Score one disease against a report.
///
/// ```text
/// raw = (base + critical + multiplicity) × severity
///     + water_source + water_treatment + duration + combination
/// confidence = round(clamp(raw, 0, 95))
/// ```
///
/// `None` when no reported symptom matches the disease.
pub fn compute(
    disease: &DiseaseDefinition,
    report: &SymptomReport,
    matcher: &SymptomMatcher,
    tables: &BonusTables,
) -> Option<ConfidenceBreakdown> {
    let matches = factors::symptom_match::evaluate(disease, report, matcher);
    if matches.is_empty() {
        return None;
    }

    let base_score = factors::symptom_match::calculate(disease, &matches);
    let (critical_match_count, critical_bonus) =
        factors::critical::calculate(&disease.id, &matches.symptom_ids, &tables.critical);
    let multiplicity_bonus = factors::multiplicity::calculate(matches.count());
    let severity_multiplier = factors::severity::calculate(report.severity);
    let water_source = factors::water_source::calculate(report.water_source);
    let water_treatment = factors::water_treatment::calculate(report.water_treatment);
    let duration = factors::duration::calculate(report.duration);
    let combination_bonus =
        factors::combination::calculate(&disease.id, report, &tables.combinations);

    let raw_score = (base_score + critical_bonus + multiplicity_bonus) * severity_multiplier
        + water_source
        + water_treatment
        + duration
        + combination_bonus;

    Some(ConfidenceBreakdown {
        disease_id: disease.id.clone(),
        disease_name: disease.name.clone(),
        matched_symptoms: matches.symptom_ids,
        critical_match_count,
        base_score,
        critical_bonus,
        multiplicity_bonus,
        severity_multiplier,
        water_source,
        water_treatment,
        duration,
        combination_bonus,
        raw_score,
        confidence: to_confidence(raw_score),
    })
}

/// Clamp to `[0, 95]` and round to an integer.
pub fn to_confidence(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, CONFIDENCE_CEILING as f64).round() as u8
}
