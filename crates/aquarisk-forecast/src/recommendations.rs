//! Public-health recommendations attached to every forecast.

use aquarisk_core::constants::FORECAST_HIGH_THRESHOLD;
use aquarisk_core::models::{EnvironmentalInputs, Season};

const OUTBREAK_RESPONSE: [&str; 3] = [
    "Immediate water quality testing in high-risk areas",
    "Deploy mobile health units to affected regions",
    "Issue public health advisory for water treatment",
];

const MONSOON_SURVEILLANCE: [&str; 2] = [
    "Increase surveillance during monsoon season",
    "Ensure proper drainage and sanitation systems",
];

const CLUSTER_INVESTIGATION: [&str; 2] = [
    "Investigate potential outbreak clusters",
    "Enhance community health worker training",
];

const WATER_TREATMENT: [&str; 2] = [
    "Improve water treatment infrastructure",
    "Distribute water purification tablets",
];

const ROUTINE: [&str; 2] = [
    "Continue routine health monitoring",
    "Maintain emergency medical supplies",
];

/// Recommendations for a base risk score and its inputs, in a stable order.
/// The two routine items always close the list.
pub fn generate(risk_score: u8, inputs: &EnvironmentalInputs) -> Vec<String> {
    let mut items: Vec<&str> = Vec::new();
    if risk_score > FORECAST_HIGH_THRESHOLD {
        items.extend(OUTBREAK_RESPONSE);
    }
    if inputs.season == Season::Monsoon {
        items.extend(MONSOON_SURVEILLANCE);
    }
    if inputs.recent_report_count > 5 {
        items.extend(CLUSTER_INVESTIGATION);
    }
    if inputs.water_quality_index < 0.8 {
        items.extend(WATER_TREATMENT);
    }
    items.extend(ROUTINE);
    items.into_iter().map(str::to_string).collect()
}
