use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::defaults;
use crate::errors::ValidationError;

/// Seasonal tag for the environmental forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Season {
    Monsoon,
    PostMonsoon,
    #[default]
    #[serde(other)]
    PreMonsoon,
}

impl Season {
    /// Season of a calendar month (1–12): Jun–Sep monsoon, Oct–Dec post-monsoon,
    /// otherwise pre-monsoon. Out-of-range months are pre-monsoon.
    pub fn for_month(month: u32) -> Self {
        match month {
            6..=9 => Self::Monsoon,
            10..=12 => Self::PostMonsoon,
            _ => Self::PreMonsoon,
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "monsoon" => Self::Monsoon,
            "post_monsoon" => Self::PostMonsoon,
            _ => Self::PreMonsoon,
        }
    }
}

/// Environmental and surveillance inputs for the outbreak forecast.
///
/// Every field has a documented default, so a partially filled request
/// still produces a forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct EnvironmentalInputs {
    /// Degrees Celsius.
    pub temperature_c: f64,
    /// Relative humidity, percent.
    pub humidity_pct: f64,
    /// Rainfall, millimetres.
    pub rainfall_mm: f64,
    /// 0.0 (unsafe) – 1.0 (safe).
    pub water_quality_index: f64,
    /// 0.0 (none) – 1.0 (full coverage).
    pub sanitation_index: f64,
    /// Symptom reports recently filed in the area. Supplied by the caller.
    pub recent_report_count: u32,
    pub season: Season,
}

impl Default for EnvironmentalInputs {
    fn default() -> Self {
        Self {
            temperature_c: defaults::DEFAULT_TEMPERATURE_C,
            humidity_pct: defaults::DEFAULT_HUMIDITY_PCT,
            rainfall_mm: defaults::DEFAULT_RAINFALL_MM,
            water_quality_index: defaults::DEFAULT_WATER_QUALITY_INDEX,
            sanitation_index: defaults::DEFAULT_SANITATION_INDEX,
            recent_report_count: defaults::DEFAULT_RECENT_REPORTS,
            season: Season::default(),
        }
    }
}

impl EnvironmentalInputs {
    /// Optional caller-side range check. The estimator itself never rejects inputs.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let indices = [
            ("water_quality_index", self.water_quality_index),
            ("sanitation_index", self.sanitation_index),
        ];
        for (field, value) in indices {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::OutOfRange {
                    field: field.to_string(),
                    value,
                });
            }
        }
        if !(0.0..=100.0).contains(&self.humidity_pct) {
            return Err(ValidationError::OutOfRange {
                field: "humidity_pct".to_string(),
                value: self.humidity_pct,
            });
        }
        if self.rainfall_mm < 0.0 || self.rainfall_mm.is_nan() {
            return Err(ValidationError::OutOfRange {
                field: "rainfall_mm".to_string(),
                value: self.rainfall_mm,
            });
        }
        Ok(())
    }
}

/// A forecast request: inputs plus the date the projection starts from.
///
/// The start date is explicit so identical requests always reproduce
/// identical monthly projections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ForecastRequest {
    #[serde(default)]
    pub inputs: EnvironmentalInputs,
    pub start: NaiveDate,
}

impl ForecastRequest {
    pub fn new(inputs: EnvironmentalInputs, start: NaiveDate) -> Self {
        Self { inputs, start }
    }
}
