use aquarisk_core::constants::FORECAST_HORIZON_MONTHS;
use aquarisk_core::models::{
    EnvironmentalInputs, ForecastRequest, ForecastSource, RiskLevel, Season, SeasonalTrend, Trend,
};
use aquarisk_core::traits::IOutbreakForecaster;
use aquarisk_forecast::environment::{base_risk, raw_risk};
use aquarisk_forecast::profiles::{self, SeasonalOffsets};
use aquarisk_forecast::{recommendations, variation, EnvironmentalRiskEstimator};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn monsoon_inputs() -> EnvironmentalInputs {
    EnvironmentalInputs {
        temperature_c: 32.5,
        humidity_pct: 85.0,
        rainfall_mm: 75.0,
        water_quality_index: 0.75,
        sanitation_index: 0.65,
        recent_report_count: 10,
        season: Season::Monsoon,
    }
}

fn calm_inputs() -> EnvironmentalInputs {
    EnvironmentalInputs {
        temperature_c: 24.0,
        humidity_pct: 60.0,
        rainfall_mm: 20.0,
        water_quality_index: 0.95,
        sanitation_index: 0.9,
        recent_report_count: 2,
        season: Season::PreMonsoon,
    }
}

// ---------------------------------------------------------------------------
// Base risk
// ---------------------------------------------------------------------------

#[test]
fn every_adverse_condition_sums_then_caps() {
    let inputs = monsoon_inputs();
    assert_eq!(raw_risk(&inputs), 110.0);
    assert_eq!(base_risk(&inputs), 95.0);
}

#[test]
fn calm_conditions_stay_at_base() {
    assert_eq!(base_risk(&calm_inputs()), 30.0);
}

#[test]
fn thresholds_are_strict() {
    let inputs = EnvironmentalInputs {
        temperature_c: 32.0,
        humidity_pct: 80.0,
        rainfall_mm: 50.0,
        water_quality_index: 0.8,
        sanitation_index: 0.7,
        recent_report_count: 5,
        season: Season::PreMonsoon,
    };
    assert_eq!(base_risk(&inputs), 30.0);
}

#[test]
fn post_monsoon_adds_eight() {
    let inputs = EnvironmentalInputs {
        season: Season::PostMonsoon,
        ..calm_inputs()
    };
    assert_eq!(base_risk(&inputs), 38.0);
}

#[test]
fn defaults_only_trigger_rainfall() {
    // 150 mm default rainfall is above the 50 mm threshold.
    assert_eq!(base_risk(&EnvironmentalInputs::default()), 42.0);
}

#[test]
fn nan_inputs_trigger_nothing() {
    let inputs = EnvironmentalInputs {
        temperature_c: f64::NAN,
        humidity_pct: f64::NAN,
        rainfall_mm: f64::NAN,
        water_quality_index: f64::NAN,
        sanitation_index: f64::NAN,
        ..calm_inputs()
    };
    assert_eq!(base_risk(&inputs), 30.0);
}

// ---------------------------------------------------------------------------
// Profiles and variation
// ---------------------------------------------------------------------------

#[test]
fn disease_projection_is_linear_and_capped() {
    let profiles = profiles::builtin();
    let risks: Vec<(&str, u8)> = profiles
        .iter()
        .map(|p| (p.disease_id.as_str(), p.project(95.0)))
        .collect();
    assert_eq!(
        risks,
        vec![
            ("diarrheal_diseases", 90),
            ("cholera", 72),
            ("typhoid", 60),
            ("hepatitis_a", 40),
            ("dysentery", 77)
        ]
    );
}

#[test]
fn seasonal_offsets_follow_calendar() {
    let offsets = SeasonalOffsets {
        monsoon: 20,
        post_monsoon: 10,
        off_season: -5,
    };
    assert_eq!(offsets.for_month(1), -5);
    assert_eq!(offsets.for_month(5), -5);
    assert_eq!(offsets.for_month(6), 20);
    assert_eq!(offsets.for_month(9), 20);
    assert_eq!(offsets.for_month(10), 10);
    assert_eq!(offsets.for_month(12), 10);
}

#[test]
fn variation_is_bounded_and_stable() {
    for id in ["cholera", "typhoid", "hepatitis_a", "diarrheal_diseases", "dysentery"] {
        let seed = variation::seed(id);
        assert_eq!(seed, variation::seed(id));
        for offset in 0..24 {
            let v = variation::variation(seed, offset);
            assert!((-5..=4).contains(&v), "{id} offset {offset}: {v}");
        }
    }
}

#[test]
fn variation_steps_by_seven_mod_ten() {
    assert_eq!(variation::variation(0, 0), -5);
    assert_eq!(variation::variation(0, 1), 2);
    assert_eq!(variation::variation(0, 2), -1);
    assert_eq!(variation::variation(13, 0), -2);
    assert_eq!(variation::variation(13, 1), -5);
}

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

#[test]
fn high_risk_monsoon_gets_every_recommendation() {
    let items = recommendations::generate(95, &monsoon_inputs());
    assert_eq!(items.len(), 11);
    assert_eq!(items[0], "Immediate water quality testing in high-risk areas");
    assert_eq!(items[3], "Increase surveillance during monsoon season");
    assert_eq!(items[10], "Maintain emergency medical supplies");
}

#[test]
fn calm_forecast_gets_routine_only() {
    let items = recommendations::generate(30, &calm_inputs());
    assert_eq!(
        items,
        vec![
            "Continue routine health monitoring".to_string(),
            "Maintain emergency medical supplies".to_string()
        ]
    );
}

#[test]
fn score_of_sixty_is_not_an_outbreak() {
    let items = recommendations::generate(60, &calm_inputs());
    assert_eq!(items.len(), 2);
}

// ---------------------------------------------------------------------------
// Full forecast
// ---------------------------------------------------------------------------

#[test]
fn monsoon_forecast_report() {
    let estimator = EnvironmentalRiskEstimator::default();
    let report = estimator.forecast(&ForecastRequest::new(monsoon_inputs(), date(2024, 7, 1)));

    assert_eq!(report.risk_score, 95);
    assert_eq!(report.overall_risk, RiskLevel::High);
    assert_eq!(report.seasonal_trend, SeasonalTrend::Increasing);
    assert_eq!(report.source, ForecastSource::Statistical);
    assert_eq!(report.diseases.len(), 5);
    assert_eq!(report.diseases[0].disease_name, "Diarrheal Diseases");
    assert_eq!(report.diseases[3].trend, Trend::Stable);
    assert!(report.shape_violation().is_none());
}

#[test]
fn months_roll_over_year_end() {
    let estimator = EnvironmentalRiskEstimator::default();
    let report = estimator.forecast(&ForecastRequest::new(calm_inputs(), date(2024, 10, 31)));
    let labels: Vec<(i32, u32)> = report.projections[0]
        .months
        .iter()
        .map(|m| (m.year, m.month))
        .collect();
    assert_eq!(
        labels,
        vec![(2024, 10), (2024, 11), (2024, 12), (2025, 1), (2025, 2), (2025, 3)]
    );
}

#[test]
fn monthly_risk_applies_seasonal_offset_and_variation() {
    let estimator = EnvironmentalRiskEstimator::default();
    let start = date(2025, 1, 15);
    let report = estimator.forecast(&ForecastRequest::new(calm_inputs(), start));

    for (profile, outlook) in estimator.profiles().iter().zip(&report.diseases) {
        let projection = report.projection(&profile.disease_id).unwrap();
        assert_eq!(projection.months.len(), FORECAST_HORIZON_MONTHS);
        let seed = variation::seed(&profile.disease_id);
        for (offset, month) in projection.months.iter().enumerate() {
            let expected = (i32::from(outlook.risk)
                + profile.seasonal.for_month(month.month)
                + variation::variation(seed, offset as u32))
            .clamp(5, 95);
            assert_eq!(i32::from(month.risk), expected, "{} {:?}", profile.disease_id, month);
        }
    }
}

#[test]
fn monthly_risk_is_clamped() {
    let estimator = EnvironmentalRiskEstimator::default();
    let high = estimator.forecast(&ForecastRequest::new(monsoon_inputs(), date(2024, 6, 1)));
    let low = estimator.forecast(&ForecastRequest::new(calm_inputs(), date(2024, 1, 1)));
    for report in [high, low] {
        for projection in &report.projections {
            assert!(projection.months.iter().all(|m| (5..=95).contains(&m.risk)));
        }
    }
}

#[test]
fn forecast_is_deterministic() {
    let estimator = EnvironmentalRiskEstimator::default();
    let request = ForecastRequest::new(monsoon_inputs(), date(2024, 3, 10));
    assert_eq!(estimator.forecast(&request), estimator.forecast(&request));
}

#[test]
fn default_inputs_forecast_without_fault() {
    let estimator = EnvironmentalRiskEstimator::default();
    let report = estimator.forecast(&ForecastRequest::new(
        EnvironmentalInputs::default(),
        date(2024, 2, 1),
    ));
    assert_eq!(report.risk_score, 42);
    assert_eq!(report.overall_risk, RiskLevel::Medium);
    assert_eq!(report.seasonal_trend, SeasonalTrend::Stable);
}

#[test]
fn forecaster_trait_matches_inherent_method() {
    let estimator = EnvironmentalRiskEstimator::default();
    let forecaster: &dyn IOutbreakForecaster = &estimator;
    let request = ForecastRequest::new(calm_inputs(), date(2024, 8, 1));
    assert_eq!(forecaster.forecast(&request), estimator.forecast(&request));
}

#[test]
fn request_without_inputs_uses_defaults() {
    let request: ForecastRequest = serde_json::from_str(r#"{"start": "2024-09-01"}"#).unwrap();
    assert_eq!(request.inputs, EnvironmentalInputs::default());
    let partial: ForecastRequest =
        serde_json::from_str(r#"{"inputs": {"season": "monsoon"}, "start": "2024-09-01"}"#)
            .unwrap();
    assert_eq!(partial.inputs.season, Season::Monsoon);
    assert_eq!(partial.inputs.humidity_pct, 80.0);
}
