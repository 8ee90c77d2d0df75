use aquarisk_core::models::{EnvironmentalInputs, ForecastRequest, RiskLevel, Season};
use aquarisk_forecast::environment::base_risk;
use aquarisk_forecast::EnvironmentalRiskEstimator;
use chrono::NaiveDate;
use proptest::prelude::*;

fn arb_season() -> impl Strategy<Value = Season> {
    prop_oneof![
        Just(Season::Monsoon),
        Just(Season::PostMonsoon),
        Just(Season::PreMonsoon),
    ]
}

fn arb_inputs() -> impl Strategy<Value = EnvironmentalInputs> {
    (
        -10.0f64..50.0,
        0.0f64..100.0,
        0.0f64..400.0,
        0.0f64..=1.0,
        0.0f64..=1.0,
        0u32..50,
        arb_season(),
    )
        .prop_map(
            |(temperature_c, humidity_pct, rainfall_mm, wq, sanitation, reports, season)| {
                EnvironmentalInputs {
                    temperature_c,
                    humidity_pct,
                    rainfall_mm,
                    water_quality_index: wq,
                    sanitation_index: sanitation,
                    recent_report_count: reports,
                    season,
                }
            },
        )
}

fn arb_start() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    #[test]
    fn base_risk_is_within_bounds(inputs in arb_inputs()) {
        let risk = base_risk(&inputs);
        prop_assert!((30.0..=95.0).contains(&risk));
    }

    #[test]
    fn forecast_has_stable_shape(inputs in arb_inputs(), start in arb_start()) {
        let report = EnvironmentalRiskEstimator::default()
            .forecast(&ForecastRequest::new(inputs, start));
        prop_assert!(report.shape_violation().is_none());
        prop_assert_eq!(report.projections.len(), 5);
        prop_assert_eq!(report.overall_risk, RiskLevel::from_forecast_score(report.risk_score));
        for projection in &report.projections {
            prop_assert!(projection.months.iter().all(|m| (5..=95).contains(&m.risk)));
        }
        prop_assert!(report.recommendations.len() >= 2);
    }

    #[test]
    fn forecast_is_deterministic(inputs in arb_inputs(), start in arb_start()) {
        let estimator = EnvironmentalRiskEstimator::default();
        let request = ForecastRequest::new(inputs, start);
        prop_assert_eq!(estimator.forecast(&request), estimator.forecast(&request));
    }
}
