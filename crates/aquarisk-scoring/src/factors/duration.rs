use aquarisk_core::report::DurationBucket;

/// Duration addend: +5 from seven days, another +5 from fourteen.
pub fn calculate(duration: DurationBucket) -> f64 {
    let days = duration.days();
    let mut addend = 0.0;
    if days >= 7 {
        addend += 5.0;
    }
    if days >= 14 {
        addend += 5.0;
    }
    addend
}
