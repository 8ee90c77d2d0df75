use crate::tables::CriticalSymptomTable;

/// Number of matched symptoms that are decisive for the disease, and their summed bonus.
pub fn calculate(disease_id: &str, matched: &[String], table: &CriticalSymptomTable) -> (usize, f64) {
    matched
        .iter()
        .filter_map(|symptom| table.bonus(disease_id, symptom))
        .fold((0, 0.0), |(count, bonus), b| (count + 1, bonus + b))
}
