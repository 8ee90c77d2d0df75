use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{DiseaseMatch, RiskFactor, RiskLevel};

/// Ranked, explainable outcome of one symptom analysis.
///
/// Invariants: `ranked_matches` is sorted by confidence descending (ties in
/// catalog order), `risk_score` is within `[0, 100]`, and `risk_level` is
/// consistent with `risk_score`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisResult {
    pub ranked_matches: Vec<DiseaseMatch>,
    pub risk_factors: Vec<RiskFactor>,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
}

impl AnalysisResult {
    pub fn top_match(&self) -> Option<&DiseaseMatch> {
        self.ranked_matches.first()
    }

    /// No disease reached the inclusion threshold: a valid "insufficient
    /// signal" outcome, not a failure.
    pub fn is_inconclusive(&self) -> bool {
        self.ranked_matches.is_empty()
    }

    pub fn find(&self, disease_id: &str) -> Option<&DiseaseMatch> {
        self.ranked_matches.iter().find(|m| m.disease_id == disease_id)
    }
}
