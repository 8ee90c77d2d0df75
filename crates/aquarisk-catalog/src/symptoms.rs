use std::collections::HashMap;

use aquarisk_core::errors::CatalogError;
use serde::{Deserialize, Serialize};

use crate::builtin;

/// Keyword group and clinical weight for one intake-form symptom id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomRule {
    pub symptom_id: String,
    /// Lowercase keywords related to the symptom.
    pub keywords: Vec<String>,
    /// Contribution to a disease's base score when matched. Positive.
    pub weight: f64,
}

impl SymptomRule {
    /// Build a rule, lowercasing the id and keywords and dropping empty keywords.
    pub fn new<I, S>(symptom_id: &str, keywords: I, weight: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            symptom_id: symptom_id.trim().to_lowercase(),
            keywords: normalize_keywords(keywords),
            weight,
        }
    }
}

fn normalize_keywords<I, S>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keywords
        .into_iter()
        .map(|k| k.as_ref().trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

#[derive(Deserialize)]
struct RuleFile {
    #[serde(default, rename = "symptom")]
    symptoms: Vec<SymptomRule>,
}

/// Immutable lookup of symptom rules keyed by symptom id.
#[derive(Debug, Clone)]
pub struct SymptomRuleTable {
    rules: Vec<SymptomRule>,
    index: HashMap<String, usize>,
}

impl SymptomRuleTable {
    /// The ten intake-form symptoms.
    pub fn builtin() -> Self {
        Self::indexed(builtin::symptom_rules())
    }

    /// Build from rules, rejecting duplicate ids and non-positive weights.
    pub fn from_rules(rules: Vec<SymptomRule>) -> Result<Self, CatalogError> {
        let mut normalized = Vec::with_capacity(rules.len());
        for rule in rules {
            if !(rule.weight.is_finite() && rule.weight > 0.0) {
                return Err(CatalogError::InvalidWeight {
                    symptom_id: rule.symptom_id,
                    weight: rule.weight,
                });
            }
            normalized.push(SymptomRule::new(&rule.symptom_id, &rule.keywords, rule.weight));
        }

        let table = Self::indexed(normalized);
        if table.index.len() != table.rules.len() {
            let mut seen = std::collections::HashSet::new();
            let duplicate = table
                .rules
                .iter()
                .find(|r| !seen.insert(r.symptom_id.as_str()))
                .map(|r| r.symptom_id.clone())
                .unwrap_or_default();
            return Err(CatalogError::DuplicateSymptomRule {
                symptom_id: duplicate,
            });
        }
        Ok(table)
    }

    /// Parse `[[symptom]]` tables from TOML.
    pub fn from_toml(toml_str: &str) -> Result<Self, CatalogError> {
        let file: RuleFile = toml::from_str(toml_str).map_err(|e| CatalogError::ParseFailed {
            reason: e.to_string(),
        })?;
        Self::from_rules(file.symptoms)
    }

    fn indexed(rules: Vec<SymptomRule>) -> Self {
        let index = rules
            .iter()
            .enumerate()
            .map(|(i, r)| (r.symptom_id.clone(), i))
            .collect();
        Self { rules, index }
    }

    pub fn get(&self, symptom_id: &str) -> Option<&SymptomRule> {
        self.index.get(symptom_id).map(|&i| &self.rules[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymptomRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for SymptomRuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}
