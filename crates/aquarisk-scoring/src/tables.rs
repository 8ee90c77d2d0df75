//! Clinical bonus lookup tables.
//!
//! Both tables are plain data keyed by disease id and symptom id so the
//! scoring contract can be audited and tested on its own.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Bonus per clinically decisive symptom.
pub const CRITICAL_SYMPTOM_BONUS: f64 = 15.0;

/// (disease id, symptom id) pairs whose match is clinically decisive.
#[derive(Debug, Clone, Default)]
pub struct CriticalSymptomTable {
    bonuses: HashMap<(String, String), f64>,
}

impl CriticalSymptomTable {
    pub fn builtin() -> Self {
        let mut table = Self::default();
        for (disease, symptom) in [
            ("cholera", "diarrhea"),
            ("hepatitis_a", "jaundice"),
            ("dysentery", "diarrhea"),
            ("typhoid", "fever"),
        ] {
            table.insert(disease, symptom, CRITICAL_SYMPTOM_BONUS);
        }
        table
    }

    pub fn insert(&mut self, disease_id: &str, symptom_id: &str, bonus: f64) {
        self.bonuses
            .insert((disease_id.to_string(), symptom_id.to_string()), bonus);
    }

    /// Bonus for a matched symptom, if it is decisive for the disease.
    pub fn bonus(&self, disease_id: &str, symptom_id: &str) -> Option<f64> {
        self.bonuses
            .get(&(disease_id.to_string(), symptom_id.to_string()))
            .copied()
    }

    pub fn is_critical(&self, disease_id: &str, symptom_id: &str) -> bool {
        self.bonus(disease_id, symptom_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.bonuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bonuses.is_empty()
    }
}

/// Additive bonus when every required symptom is present in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinationRule {
    pub disease_id: String,
    pub required_symptoms: Vec<String>,
    pub bonus: f64,
}

impl CombinationRule {
    pub fn new(disease_id: &str, required: &[&str], bonus: f64) -> Self {
        Self {
            disease_id: disease_id.to_string(),
            required_symptoms: required.iter().map(|s| s.to_string()).collect(),
            bonus,
        }
    }
}

/// Disease-specific symptom co-occurrence bonuses.
#[derive(Debug, Clone, Default)]
pub struct CombinationTable {
    rules: HashMap<String, Vec<CombinationRule>>,
}

impl CombinationTable {
    pub fn builtin() -> Self {
        let mut table = Self::default();
        table.insert(CombinationRule::new("cholera", &["diarrhea", "vomiting"], 10.0));
        table.insert(CombinationRule::new("typhoid", &["fever", "headache"], 8.0));
        table.insert(CombinationRule::new("hepatitis_a", &["jaundice"], 15.0));
        table.insert(CombinationRule::new("dysentery", &["diarrhea", "abdominal_pain"], 8.0));
        table
    }

    pub fn insert(&mut self, rule: CombinationRule) {
        self.rules.entry(rule.disease_id.clone()).or_default().push(rule);
    }

    pub fn rules_for(&self, disease_id: &str) -> &[CombinationRule] {
        self.rules.get(disease_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Both bonus tables used by the scorer.
#[derive(Debug, Clone)]
pub struct BonusTables {
    pub critical: CriticalSymptomTable,
    pub combinations: CombinationTable,
}

impl BonusTables {
    pub fn builtin() -> Self {
        Self {
            critical: CriticalSymptomTable::builtin(),
            combinations: CombinationTable::builtin(),
        }
    }
}

impl Default for BonusTables {
    fn default() -> Self {
        Self::builtin()
    }
}
