use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// Contamination risk tier of a drinking-water source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum WaterRiskTier {
    High,
    Medium,
    Low,
}

/// Where the respondent's drinking water comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WaterSource {
    RiverStream,
    PondLake,
    CommunityWell,
    PrivateWell,
    Rainwater,
    WaterTanker,
    PipedSupply,
    Bottled,
    #[default]
    Other,
}

impl WaterSource {
    pub fn risk_tier(self) -> WaterRiskTier {
        match self {
            Self::RiverStream | Self::PondLake | Self::CommunityWell => WaterRiskTier::High,
            Self::PrivateWell | Self::Rainwater | Self::WaterTanker => WaterRiskTier::Medium,
            Self::PipedSupply | Self::Bottled | Self::Other => WaterRiskTier::Low,
        }
    }

    pub fn is_high_risk(self) -> bool {
        self.risk_tier() == WaterRiskTier::High
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::RiverStream => "river_stream",
            Self::PondLake => "pond_lake",
            Self::CommunityWell => "community_well",
            Self::PrivateWell => "private_well",
            Self::Rainwater => "rainwater",
            Self::WaterTanker => "water_tanker",
            Self::PipedSupply => "piped_supply",
            Self::Bottled => "bottled",
            Self::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "river_stream" => Self::RiverStream,
            "pond_lake" => Self::PondLake,
            "community_well" => Self::CommunityWell,
            "private_well" => Self::PrivateWell,
            "rainwater" => Self::Rainwater,
            "water_tanker" => Self::WaterTanker,
            "piped_supply" => Self::PipedSupply,
            "bottled" => Self::Bottled,
            _ => Self::Other,
        }
    }
}

impl<'de> Deserialize<'de> for WaterSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        super::deserialize_lenient(deserializer, Self::parse)
    }
}

impl std::fmt::Display for WaterSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the drinking water is treated before consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WaterTreatment {
    None,
    Boiling,
    Chlorination,
    Filtration,
    #[default]
    Other,
}

impl WaterTreatment {
    pub fn is_untreated(self) -> bool {
        self == Self::None
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Boiling => "boiling",
            Self::Chlorination => "chlorination",
            Self::Filtration => "filtration",
            Self::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" => Self::None,
            "boiling" => Self::Boiling,
            "chlorination" => Self::Chlorination,
            "filtration" => Self::Filtration,
            _ => Self::Other,
        }
    }
}

impl<'de> Deserialize<'de> for WaterTreatment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        super::deserialize_lenient(deserializer, Self::parse)
    }
}

impl std::fmt::Display for WaterTreatment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
