use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::ConfidenceBand;

/// A catalog disease that matched at least one reported symptom and
/// reached the inclusion threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiseaseMatch {
    pub disease_id: String,
    pub disease_name: String,
    /// Reported symptom ids that matched this disease, sorted.
    pub matched_symptoms: Vec<String>,
    pub matched_symptom_count: usize,
    pub critical_match_count: usize,
    /// Integer confidence in `[15, 95]`.
    pub confidence: u8,
}

impl DiseaseMatch {
    pub fn band(&self) -> ConfidenceBand {
        ConfidenceBand::from_confidence(self.confidence)
    }
}
