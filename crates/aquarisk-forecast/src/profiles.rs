//! Per-disease forecast profiles: linear projection of the base risk, a
//! ceiling, and seasonal offsets for the monthly projection.

use aquarisk_core::models::Season;

/// Monthly risk offsets by calendar season.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonalOffsets {
    pub monsoon: i32,
    pub post_monsoon: i32,
    /// January to May.
    pub off_season: i32,
}

impl SeasonalOffsets {
    pub fn for_season(&self, season: Season) -> i32 {
        match season {
            Season::Monsoon => self.monsoon,
            Season::PostMonsoon => self.post_monsoon,
            Season::PreMonsoon => self.off_season,
        }
    }

    /// Offset for a calendar month (1–12).
    pub fn for_month(&self, month: u32) -> i32 {
        self.for_season(Season::for_month(month))
    }
}

/// How one disease's risk follows the environmental base risk.
#[derive(Debug, Clone, PartialEq)]
pub struct DiseaseProfile {
    pub disease_id: String,
    pub disease_name: String,
    pub slope: f64,
    pub intercept: f64,
    pub ceiling: f64,
    pub seasonal: SeasonalOffsets,
}

impl DiseaseProfile {
    /// `min(slope × base + intercept, ceiling)`, rounded.
    pub fn project(&self, base_risk: f64) -> u8 {
        let risk = (self.slope * base_risk + self.intercept).min(self.ceiling);
        if risk.is_nan() {
            return 0;
        }
        risk.clamp(0.0, 100.0).round() as u8
    }
}

struct ProfileSeed {
    id: &'static str,
    name: &'static str,
    slope: f64,
    intercept: f64,
    ceiling: f64,
    seasonal: (i32, i32, i32),
}

const PROFILES: &[ProfileSeed] = &[
    ProfileSeed {
        id: "diarrheal_diseases",
        name: "Diarrheal Diseases",
        slope: 1.0,
        intercept: 2.0,
        ceiling: 90.0,
        seasonal: (25, 15, -8),
    },
    ProfileSeed {
        id: "cholera",
        name: "Cholera",
        slope: 0.7,
        intercept: 5.0,
        ceiling: 85.0,
        seasonal: (20, 10, -5),
    },
    ProfileSeed {
        id: "typhoid",
        name: "Typhoid",
        slope: 0.6,
        intercept: 3.0,
        ceiling: 80.0,
        seasonal: (15, 8, -3),
    },
    ProfileSeed {
        id: "hepatitis_a",
        name: "Hepatitis A",
        slope: 0.4,
        intercept: 2.0,
        ceiling: 70.0,
        seasonal: (12, 5, -2),
    },
    ProfileSeed {
        id: "dysentery",
        name: "Dysentery",
        slope: 0.8,
        intercept: 1.0,
        ceiling: 85.0,
        seasonal: (18, 9, -4),
    },
];

/// Built-in profiles in report order.
pub fn builtin() -> Vec<DiseaseProfile> {
    PROFILES
        .iter()
        .map(|seed| DiseaseProfile {
            disease_id: seed.id.to_string(),
            disease_name: seed.name.to_string(),
            slope: seed.slope,
            intercept: seed.intercept,
            ceiling: seed.ceiling,
            seasonal: SeasonalOffsets {
                monsoon: seed.seasonal.0,
                post_monsoon: seed.seasonal.1,
                off_season: seed.seasonal.2,
            },
        })
        .collect()
}
