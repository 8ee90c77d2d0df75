use aquarisk_core::report::{WaterRiskTier, WaterSource};

/// Water-source addend: +12 high-risk tier, +8 medium-risk tier, else 0.
pub fn calculate(source: WaterSource) -> f64 {
    match source.risk_tier() {
        WaterRiskTier::High => 12.0,
        WaterRiskTier::Medium => 8.0,
        WaterRiskTier::Low => 0.0,
    }
}
