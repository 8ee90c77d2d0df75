use aquarisk_core::report::SymptomReport;

use crate::tables::CombinationTable;

/// Sum of the disease's combination bonuses whose required symptoms were all reported.
///
/// Checks the raw report, not only the symptoms that matched the disease.
pub fn calculate(disease_id: &str, report: &SymptomReport, table: &CombinationTable) -> f64 {
    table
        .rules_for(disease_id)
        .iter()
        .filter(|rule| rule.required_symptoms.iter().all(|s| report.has_symptom(s)))
        .map(|rule| rule.bonus)
        .sum()
}
