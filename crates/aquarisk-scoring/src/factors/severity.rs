use aquarisk_core::report::Severity;

/// Severity multiplier, applied after the symptom bonuses and before the context addends.
///
/// mild 0.8, moderate 1.0, severe 1.3, very severe 1.5; unknown 1.0.
pub fn calculate(severity: Severity) -> f64 {
    severity.multiplier()
}
