/// Multiple-symptom bonus: +10 for three or more distinct matches, +5 for two.
pub fn calculate(matched_count: usize) -> f64 {
    match matched_count {
        0 | 1 => 0.0,
        2 => 5.0,
        _ => 10.0,
    }
}
