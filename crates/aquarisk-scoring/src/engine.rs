//! ScoringEngine: ranks catalog diseases against a report and aggregates risk.
//!
//! Implements `ISymptomAnalyzer` from aquarisk-core.

use aquarisk_catalog::{DiseaseCatalog, SymptomMatcher};
use aquarisk_core::models::{AnalysisResult, DiseaseMatch};
use aquarisk_core::report::SymptomReport;
use aquarisk_core::traits::ISymptomAnalyzer;
use aquarisk_observability::events;
use tracing::debug;

use crate::aggregator;
use crate::formula::{self, ConfidenceBreakdown};
use crate::tables::BonusTables;

/// Stateless symptom analysis engine. Holds only immutable reference data,
/// so one instance can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    catalog: DiseaseCatalog,
    matcher: SymptomMatcher,
    tables: BonusTables,
}

impl ScoringEngine {
    pub fn new(catalog: DiseaseCatalog, matcher: SymptomMatcher, tables: BonusTables) -> Self {
        Self {
            catalog,
            matcher,
            tables,
        }
    }

    /// Built-in symptom rules and bonus tables over a custom catalog.
    pub fn with_catalog(catalog: DiseaseCatalog) -> Self {
        Self::new(catalog, SymptomMatcher::default(), BonusTables::builtin())
    }

    pub fn catalog(&self) -> &DiseaseCatalog {
        &self.catalog
    }

    pub fn matcher(&self) -> &SymptomMatcher {
        &self.matcher
    }

    pub fn tables(&self) -> &BonusTables {
        &self.tables
    }

    /// Factor breakdown for every disease with at least one matched symptom,
    /// in catalog order, including those below the inclusion threshold.
    pub fn explain(&self, report: &SymptomReport) -> Vec<ConfidenceBreakdown> {
        self.catalog
            .all()
            .iter()
            .filter_map(|disease| formula::compute(disease, report, &self.matcher, &self.tables))
            .collect()
    }

    /// Diseases at or above the inclusion threshold, confidence descending.
    /// Ties keep catalog order.
    pub fn rank(&self, report: &SymptomReport) -> Vec<DiseaseMatch> {
        let mut ranked: Vec<DiseaseMatch> = self
            .explain(report)
            .into_iter()
            .inspect(|b| {
                events::disease_scored(
                    &b.disease_id,
                    b.matched_symptoms.len(),
                    b.confidence,
                    b.is_included(),
                )
            })
            .filter(ConfidenceBreakdown::is_included)
            .map(|b| b.to_match())
            .collect();
        // Stable sort keeps declaration order among equal confidences.
        ranked.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        ranked
    }

    /// Full analysis: ranked matches plus aggregated risk.
    pub fn analyze(&self, report: &SymptomReport) -> AnalysisResult {
        let _span =
            aquarisk_observability::analysis_span!(report.reported_symptoms.len(), report.severity)
                .entered();

        let unknown: Vec<&str> = report
            .reported_symptoms
            .iter()
            .map(String::as_str)
            .filter(|s| !self.matcher.is_known(s))
            .collect();
        if !unknown.is_empty() {
            events::unknown_symptoms(&unknown);
        }

        let ranked = self.rank(report);
        debug!(ranked = ranked.len(), "ranking complete");

        let result = aggregator::aggregate(ranked, report);
        events::analysis_completed(
            result.ranked_matches.len(),
            result.risk_score,
            result.risk_level.as_str(),
        );
        result
    }
}

impl ISymptomAnalyzer for ScoringEngine {
    fn analyze(&self, report: &SymptomReport) -> AnalysisResult {
        ScoringEngine::analyze(self, report)
    }
}
