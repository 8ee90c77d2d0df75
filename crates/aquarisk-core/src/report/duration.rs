use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// How long the respondent has had symptoms, as offered by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, TS)]
#[ts(export)]
pub enum DurationBucket {
    #[serde(rename = "1_day")]
    OneDay,
    #[serde(rename = "2_days")]
    TwoDays,
    #[serde(rename = "3_days")]
    ThreeDays,
    #[serde(rename = "4_days")]
    FourDays,
    #[serde(rename = "5_days")]
    FiveDays,
    #[serde(rename = "6_days")]
    SixDays,
    #[serde(rename = "1_week")]
    OneWeek,
    #[serde(rename = "2_weeks")]
    TwoWeeks,
    #[serde(rename = "3_weeks")]
    ThreeWeeks,
    #[serde(rename = "1_month")]
    OneMonth,
    #[serde(rename = "more_than_month")]
    MoreThanMonth,
    /// Anything the form did not offer. Treated as one day.
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl DurationBucket {
    pub const ALL: [DurationBucket; 11] = [
        Self::OneDay,
        Self::TwoDays,
        Self::ThreeDays,
        Self::FourDays,
        Self::FiveDays,
        Self::SixDays,
        Self::OneWeek,
        Self::TwoWeeks,
        Self::ThreeWeeks,
        Self::OneMonth,
        Self::MoreThanMonth,
    ];

    /// Representative number of days for the bucket.
    pub fn days(self) -> u32 {
        match self {
            Self::OneDay | Self::Unknown => 1,
            Self::TwoDays => 2,
            Self::ThreeDays => 3,
            Self::FourDays => 4,
            Self::FiveDays => 5,
            Self::SixDays => 6,
            Self::OneWeek => 7,
            Self::TwoWeeks => 14,
            Self::ThreeWeeks => 21,
            Self::OneMonth => 30,
            Self::MoreThanMonth => 35,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1_day",
            Self::TwoDays => "2_days",
            Self::ThreeDays => "3_days",
            Self::FourDays => "4_days",
            Self::FiveDays => "5_days",
            Self::SixDays => "6_days",
            Self::OneWeek => "1_week",
            Self::TwoWeeks => "2_weeks",
            Self::ThreeWeeks => "3_weeks",
            Self::OneMonth => "1_month",
            Self::MoreThanMonth => "more_than_month",
            Self::Unknown => "unknown",
        }
    }

    /// Lenient parse of a form value. Unrecognised input yields `Unknown`.
    pub fn parse(value: &str) -> Self {
        let value = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.as_str() == value)
            .unwrap_or(Self::Unknown)
    }
}

impl<'de> Deserialize<'de> for DurationBucket {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        super::deserialize_lenient(deserializer, Self::parse)
    }
}

impl std::fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
