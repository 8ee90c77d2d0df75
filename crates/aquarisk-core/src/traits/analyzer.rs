use crate::models::AnalysisResult;
use crate::report::SymptomReport;

/// Symptom analysis. Pure: identical reports yield identical results.
pub trait ISymptomAnalyzer: Send + Sync {
    /// Rank catalog diseases against a report and aggregate overall risk.
    /// Never fails; an empty symptom set yields the degenerate result.
    fn analyze(&self, report: &SymptomReport) -> AnalysisResult;
}
