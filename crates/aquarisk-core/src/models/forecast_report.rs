use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{RiskLevel, SeasonalTrend, Trend};
use crate::constants::FORECAST_HORIZON_MONTHS;

/// Who produced a forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ForecastSource {
    External { model: String },
    Statistical,
}

/// Current outbreak risk for one disease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiseaseOutlook {
    pub disease_id: String,
    pub disease_name: String,
    pub risk: u8,
    pub trend: Trend,
}

/// Projected risk for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MonthlyRisk {
    pub year: i32,
    /// Calendar month, 1–12.
    pub month: u32,
    pub risk: u8,
}

/// Six-month projection for one disease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiseaseProjection {
    pub disease_id: String,
    pub months: Vec<MonthlyRisk>,
}

/// Per-disease six-month outbreak forecast.
///
/// The external model and the statistical estimator both produce this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ForecastReport {
    pub start: NaiveDate,
    pub risk_score: u8,
    pub overall_risk: RiskLevel,
    pub seasonal_trend: SeasonalTrend,
    pub diseases: Vec<DiseaseOutlook>,
    pub projections: Vec<DiseaseProjection>,
    pub recommendations: Vec<String>,
    pub source: ForecastSource,
}

impl ForecastReport {
    pub fn projection(&self, disease_id: &str) -> Option<&DiseaseProjection> {
        self.projections.iter().find(|p| p.disease_id == disease_id)
    }

    /// Check the shape every consumer relies on. Returns the first problem found.
    pub fn shape_violation(&self) -> Option<String> {
        if self.risk_score > 100 {
            return Some(format!("risk score {} above 100", self.risk_score));
        }
        if self.projections.is_empty() {
            return Some("no disease projections".to_string());
        }
        for projection in &self.projections {
            if projection.months.len() != FORECAST_HORIZON_MONTHS {
                return Some(format!(
                    "{} has {} months, expected {}",
                    projection.disease_id,
                    projection.months.len(),
                    FORECAST_HORIZON_MONTHS
                ));
            }
            if let Some(bad) = projection
                .months
                .iter()
                .find(|m| m.risk > 100 || !(1..=12).contains(&m.month))
            {
                return Some(format!(
                    "{} has invalid month entry {}-{} risk {}",
                    projection.disease_id, bad.year, bad.month, bad.risk
                ));
            }
        }
        if let Some(bad) = self.diseases.iter().find(|d| d.risk > 100) {
            return Some(format!("{} risk {} above 100", bad.disease_id, bad.risk));
        }
        None
    }
}
