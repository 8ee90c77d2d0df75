use serde::{Deserialize, Serialize};

/// Clinical severity tier of a disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Low,
    #[default]
    Medium,
    High,
}

/// One water-borne disease in the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseDefinition {
    /// Unique key, e.g. `hepatitis_a`.
    pub id: String,
    /// Display name. Derived from the id when left empty.
    #[serde(default)]
    pub name: String,
    /// Clinical symptom phrases, in order. Matching short-circuits on the first hit.
    pub canonical_symptoms: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub treatment: String,
    #[serde(default)]
    pub prevention: String,
    #[serde(default)]
    pub severity_tier: SeverityTier,
}

impl DiseaseDefinition {
    pub fn symptom_count(&self) -> usize {
        self.canonical_symptoms.len()
    }
}

/// `hepatitis_a` → `Hepatitis a`.
pub(crate) fn display_name_from_id(id: &str) -> String {
    let spaced = id.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
