//! EnvironmentalRiskEstimator: the statistical forecast.
//!
//! Implements `IOutbreakForecaster` from aquarisk-core. Pure: the same request
//! always yields the same report, including every monthly value.

use aquarisk_core::constants::{FORECAST_HORIZON_MONTHS, FORECAST_MONTH_MAX, FORECAST_MONTH_MIN};
use aquarisk_core::models::{
    DiseaseOutlook, DiseaseProjection, ForecastReport, ForecastRequest, ForecastSource,
    MonthlyRisk, RiskLevel, Season, SeasonalTrend, Trend,
};
use aquarisk_core::traits::IOutbreakForecaster;
use aquarisk_observability::events;
use chrono::{Datelike, NaiveDate};

use crate::environment;
use crate::profiles::{self, DiseaseProfile};
use crate::recommendations;
use crate::variation;

#[derive(Debug, Clone)]
pub struct EnvironmentalRiskEstimator {
    profiles: Vec<DiseaseProfile>,
}

impl Default for EnvironmentalRiskEstimator {
    fn default() -> Self {
        Self::new(profiles::builtin())
    }
}

impl EnvironmentalRiskEstimator {
    pub fn new(profiles: Vec<DiseaseProfile>) -> Self {
        Self { profiles }
    }

    pub fn profiles(&self) -> &[DiseaseProfile] {
        &self.profiles
    }

    /// Six monthly risks for one disease, starting at the request's month.
    pub fn project_months(
        &self,
        profile: &DiseaseProfile,
        disease_risk: u8,
        start: NaiveDate,
    ) -> Vec<MonthlyRisk> {
        let seed = variation::seed(&profile.disease_id);
        (0..FORECAST_HORIZON_MONTHS as u32)
            .map(|offset| {
                let (year, month) = month_after(start, offset);
                let risk = i32::from(disease_risk)
                    + profile.seasonal.for_month(month)
                    + variation::variation(seed, offset);
                MonthlyRisk {
                    year,
                    month,
                    risk: risk.clamp(FORECAST_MONTH_MIN, FORECAST_MONTH_MAX) as u8,
                }
            })
            .collect()
    }

    pub fn forecast(&self, request: &ForecastRequest) -> ForecastReport {
        let inputs = &request.inputs;
        let _span = aquarisk_observability::forecast_span!(inputs.season, request.start).entered();

        let base = environment::base_risk(inputs);
        let risk_score = base.round() as u8;

        let mut diseases = Vec::with_capacity(self.profiles.len());
        let mut projections = Vec::with_capacity(self.profiles.len());
        for profile in &self.profiles {
            let risk = profile.project(base);
            diseases.push(DiseaseOutlook {
                disease_id: profile.disease_id.clone(),
                disease_name: profile.disease_name.clone(),
                risk,
                trend: Trend::from_risk(risk),
            });
            projections.push(DiseaseProjection {
                disease_id: profile.disease_id.clone(),
                months: self.project_months(profile, risk, request.start),
            });
        }

        let report = ForecastReport {
            start: request.start,
            risk_score,
            overall_risk: RiskLevel::from_forecast_score(risk_score),
            seasonal_trend: seasonal_trend(inputs.season),
            diseases,
            projections,
            recommendations: recommendations::generate(risk_score, inputs),
            source: ForecastSource::Statistical,
        };
        events::forecast_completed("statistical", report.risk_score, report.overall_risk.as_str());
        report
    }
}

impl IOutbreakForecaster for EnvironmentalRiskEstimator {
    fn forecast(&self, request: &ForecastRequest) -> ForecastReport {
        EnvironmentalRiskEstimator::forecast(self, request)
    }
}

/// Monsoon forecasts trend upward; every other season is stable.
pub fn seasonal_trend(season: Season) -> SeasonalTrend {
    match season {
        Season::Monsoon => SeasonalTrend::Increasing,
        Season::PostMonsoon | Season::PreMonsoon => SeasonalTrend::Stable,
    }
}

/// Calendar (year, month) `offset` months after `start`.
fn month_after(start: NaiveDate, offset: u32) -> (i32, u32) {
    let index = start.month0() + offset;
    (start.year() + (index / 12) as i32, index % 12 + 1)
}
