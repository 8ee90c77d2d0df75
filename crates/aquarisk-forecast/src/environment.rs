//! Environmental base risk.
//!
//! Starts at 30 and adds a fixed amount per adverse condition:
//!
//! | Condition | Addend |
//! |-----------|--------|
//! | temperature > 32 °C | +10 |
//! | humidity > 80 % | +8 |
//! | rainfall > 50 mm | +12 |
//! | water-quality index < 0.8 | +15 |
//! | sanitation index < 0.7 | +10 |
//! | monsoon / post-monsoon | +15 / +8 |
//! | recent reports > 5 | +10 |
//!
//! The sum is capped at 95. NaN inputs never satisfy a condition.

use aquarisk_core::constants::{FORECAST_BASE_CEILING, FORECAST_BASE_RISK};
use aquarisk_core::models::{EnvironmentalInputs, Season};

/// Uncapped sum of the base and every triggered addend.
pub fn raw_risk(inputs: &EnvironmentalInputs) -> f64 {
    let mut risk = FORECAST_BASE_RISK;
    if inputs.temperature_c > 32.0 {
        risk += 10.0;
    }
    if inputs.humidity_pct > 80.0 {
        risk += 8.0;
    }
    if inputs.rainfall_mm > 50.0 {
        risk += 12.0;
    }
    if inputs.water_quality_index < 0.8 {
        risk += 15.0;
    }
    if inputs.sanitation_index < 0.7 {
        risk += 10.0;
    }
    risk += season_addend(inputs.season);
    if inputs.recent_report_count > 5 {
        risk += 10.0;
    }
    risk
}

/// Base risk capped at 95.
pub fn base_risk(inputs: &EnvironmentalInputs) -> f64 {
    raw_risk(inputs).min(FORECAST_BASE_CEILING)
}

pub fn season_addend(season: Season) -> f64 {
    match season {
        Season::Monsoon => 15.0,
        Season::PostMonsoon => 8.0,
        Season::PreMonsoon => 0.0,
    }
}
