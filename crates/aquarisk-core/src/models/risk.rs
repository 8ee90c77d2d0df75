use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{
    FORECAST_HIGH_THRESHOLD, FORECAST_MEDIUM_THRESHOLD, HIGH_CONFIDENCE_BAND,
    HIGH_RISK_THRESHOLD, MEDIUM_CONFIDENCE_BAND, MEDIUM_RISK_THRESHOLD, TREND_STABLE_THRESHOLD,
    TREND_UP_THRESHOLD,
};

/// Overall risk level derived from a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Symptom-analysis level: `>50` high, `>25` medium, else low.
    pub fn from_score(score: u8) -> Self {
        if score > HIGH_RISK_THRESHOLD {
            Self::High
        } else if score > MEDIUM_RISK_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Outbreak-forecast level: `>60` high, `>35` medium, else low.
    pub fn from_forecast_score(score: u8) -> Self {
        if score > FORECAST_HIGH_THRESHOLD {
            Self::High
        } else if score > FORECAST_MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A standalone risk factor found in the report context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiskFactor {
    #[serde(rename = "high-risk water source")]
    HighRiskWaterSource,
    #[serde(rename = "untreated water consumption")]
    UntreatedWater,
    #[serde(rename = "severe symptom presentation")]
    SevereSymptoms,
}

impl RiskFactor {
    pub fn label(self) -> &'static str {
        match self {
            Self::HighRiskWaterSource => "high-risk water source",
            Self::UntreatedWater => "untreated water consumption",
            Self::SevereSymptoms => "severe symptom presentation",
        }
    }
}

impl std::fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Display band of a disease confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ConfidenceBand {
    Low,
    Medium,
    High,
}

impl ConfidenceBand {
    pub fn from_confidence(confidence: u8) -> Self {
        if confidence >= HIGH_CONFIDENCE_BAND {
            Self::High
        } else if confidence >= MEDIUM_CONFIDENCE_BAND {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Direction of a disease's current outbreak risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Trend {
    Up,
    Stable,
    Down,
}

impl Trend {
    pub fn from_risk(risk: u8) -> Self {
        if risk > TREND_UP_THRESHOLD {
            Self::Up
        } else if risk > TREND_STABLE_THRESHOLD {
            Self::Stable
        } else {
            Self::Down
        }
    }
}

/// Season-driven direction of the overall forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SeasonalTrend {
    Increasing,
    Stable,
}
