use aquarisk_core::constants::{CONFIDENCE_CEILING, INCLUSION_THRESHOLD, MAX_RISK_SCORE};
use aquarisk_core::models::RiskLevel;
use aquarisk_core::report::{DurationBucket, Severity, SymptomReport, WaterSource, WaterTreatment};
use aquarisk_scoring::ScoringEngine;
use proptest::prelude::*;

const SYMPTOMS: &[&str] = &[
    "fever",
    "diarrhea",
    "vomiting",
    "nausea",
    "abdominal_pain",
    "headache",
    "fatigue",
    "dehydration",
    "muscle_cramps",
    "jaundice",
    "cough",
    "rash",
];

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Mild),
        Just(Severity::Moderate),
        Just(Severity::Severe),
        Just(Severity::VerySevere),
        Just(Severity::Unknown),
    ]
}

fn arb_source() -> impl Strategy<Value = WaterSource> {
    prop_oneof![
        Just(WaterSource::RiverStream),
        Just(WaterSource::PondLake),
        Just(WaterSource::CommunityWell),
        Just(WaterSource::PrivateWell),
        Just(WaterSource::Rainwater),
        Just(WaterSource::WaterTanker),
        Just(WaterSource::PipedSupply),
        Just(WaterSource::Bottled),
        Just(WaterSource::Other),
    ]
}

fn arb_treatment() -> impl Strategy<Value = WaterTreatment> {
    prop_oneof![
        Just(WaterTreatment::None),
        Just(WaterTreatment::Boiling),
        Just(WaterTreatment::Chlorination),
        Just(WaterTreatment::Filtration),
        Just(WaterTreatment::Other),
    ]
}

fn arb_duration() -> impl Strategy<Value = DurationBucket> {
    (0..=DurationBucket::ALL.len()).prop_map(|i| {
        DurationBucket::ALL
            .get(i)
            .copied()
            .unwrap_or(DurationBucket::Unknown)
    })
}

fn arb_report() -> impl Strategy<Value = SymptomReport> {
    (
        proptest::sample::subsequence(SYMPTOMS, 0..=SYMPTOMS.len()),
        arb_duration(),
        arb_source(),
        arb_treatment(),
        arb_severity(),
    )
        .prop_map(|(symptoms, duration, source, treatment, severity)| {
            SymptomReport::new(symptoms)
                .with_duration(duration)
                .with_water_source(source)
                .with_water_treatment(treatment)
                .with_severity(severity)
        })
}

proptest! {
    #[test]
    fn risk_score_is_bounded(report in arb_report()) {
        let result = ScoringEngine::default().analyze(&report);
        prop_assert!(result.risk_score <= MAX_RISK_SCORE);
    }

    #[test]
    fn ranked_matches_are_sorted_and_within_band(report in arb_report()) {
        let result = ScoringEngine::default().analyze(&report);
        for m in &result.ranked_matches {
            prop_assert!(m.confidence >= INCLUSION_THRESHOLD);
            prop_assert!(m.confidence <= CONFIDENCE_CEILING);
            prop_assert!(m.matched_symptom_count >= 1);
            prop_assert_eq!(m.matched_symptom_count, m.matched_symptoms.len());
            prop_assert!(m.critical_match_count <= m.matched_symptom_count);
        }
        prop_assert!(result
            .ranked_matches
            .windows(2)
            .all(|w| w[0].confidence >= w[1].confidence));
    }

    #[test]
    fn analysis_is_idempotent(report in arb_report()) {
        let engine = ScoringEngine::default();
        prop_assert_eq!(engine.analyze(&report), engine.analyze(&report));
    }

    #[test]
    fn risk_level_agrees_with_score(report in arb_report()) {
        let result = ScoringEngine::default().analyze(&report);
        prop_assert_eq!(result.risk_level, RiskLevel::from_score(result.risk_score));
    }

    #[test]
    fn risk_score_never_below_top_confidence(report in arb_report()) {
        let result = ScoringEngine::default().analyze(&report);
        if let Some(top) = result.top_match() {
            prop_assert!(result.risk_score >= top.confidence);
        }
    }

    #[test]
    fn explain_agrees_with_ranking(report in arb_report()) {
        let engine = ScoringEngine::default();
        let included = engine
            .explain(&report)
            .into_iter()
            .filter(|b| b.is_included())
            .count();
        prop_assert_eq!(included, engine.analyze(&report).ranked_matches.len());
    }
}
