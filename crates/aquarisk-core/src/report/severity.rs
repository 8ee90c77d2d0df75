use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// Self-reported severity of the symptoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
    VerySevere,
    /// Missing or unrecognised. Scored like `Moderate`.
    #[default]
    Unknown,
}

impl Severity {
    /// Multiplier applied to a disease score after the symptom bonuses.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Mild => 0.8,
            Self::Moderate | Self::Unknown => 1.0,
            Self::Severe => 1.3,
            Self::VerySevere => 1.5,
        }
    }

    /// Severe or very severe presentation counts as a risk factor.
    pub fn is_severe(self) -> bool {
        matches!(self, Self::Severe | Self::VerySevere)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
            Self::VerySevere => "very_severe",
            Self::Unknown => "unknown",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "mild" => Self::Mild,
            "moderate" => Self::Moderate,
            "severe" => Self::Severe,
            "very_severe" | "very severe" => Self::VerySevere,
            _ => Self::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        super::deserialize_lenient(deserializer, Self::parse)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
