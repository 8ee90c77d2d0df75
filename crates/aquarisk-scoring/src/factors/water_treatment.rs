use aquarisk_core::report::WaterTreatment;

/// Water-treatment addend: +8 untreated, +3 boiled or chlorinated, else 0.
pub fn calculate(treatment: WaterTreatment) -> f64 {
    match treatment {
        WaterTreatment::None => 8.0,
        WaterTreatment::Boiling | WaterTreatment::Chlorination => 3.0,
        WaterTreatment::Filtration | WaterTreatment::Other => 0.0,
    }
}
