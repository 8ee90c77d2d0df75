use aquarisk_catalog::{DiseaseDefinition, SymptomMatcher};
use aquarisk_core::constants::BASE_SCORE_SCALE;
use aquarisk_core::report::SymptomReport;

/// Reported symptoms that matched one disease.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymptomMatches {
    /// Matched symptom ids, each at most once.
    pub symptom_ids: Vec<String>,
    /// Sum of the matched symptoms' weights.
    pub total_weight: f64,
}

impl SymptomMatches {
    pub fn count(&self) -> usize {
        self.symptom_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptom_ids.is_empty()
    }
}

/// Match every reported symptom against the disease. Unknown ids are skipped.
pub fn evaluate(
    disease: &DiseaseDefinition,
    report: &SymptomReport,
    matcher: &SymptomMatcher,
) -> SymptomMatches {
    let mut matches = SymptomMatches::default();
    for symptom_id in &report.reported_symptoms {
        if matcher.matches_disease(symptom_id, disease) {
            matches.total_weight += matcher.weight_of(symptom_id);
            matches.symptom_ids.push(symptom_id.clone());
        }
    }
    matches
}

/// Base score: `Σ weight / |canonical symptoms| × 60`.
pub fn calculate(disease: &DiseaseDefinition, matches: &SymptomMatches) -> f64 {
    let phrases = disease.symptom_count().max(1) as f64;
    matches.total_weight / phrases * BASE_SCORE_SCALE
}
