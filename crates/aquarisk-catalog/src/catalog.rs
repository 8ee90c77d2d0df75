use std::collections::HashMap;

use aquarisk_core::config::CatalogConfig;
use aquarisk_core::errors::{AquariskResult, CatalogError};
use aquarisk_observability::events;
use serde::Deserialize;
use tracing::warn;

use crate::builtin;
use crate::disease::{display_name_from_id, DiseaseDefinition};

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "disease")]
    diseases: Vec<DiseaseDefinition>,
}

/// Read-only disease lookup keyed by id. Iteration follows declaration order,
/// which is also the tie-break order for ranking.
#[derive(Debug, Clone)]
pub struct DiseaseCatalog {
    diseases: Vec<DiseaseDefinition>,
    index: HashMap<String, usize>,
}

impl DiseaseCatalog {
    /// The five built-in water-borne diseases.
    pub fn builtin() -> Self {
        Self::indexed(builtin::diseases())
    }

    /// Build from definitions.
    ///
    /// Rejects an empty set, duplicate ids, and diseases without any
    /// non-empty symptom phrase. Empty phrases are dropped and missing
    /// display names are derived from the id.
    pub fn from_definitions(definitions: Vec<DiseaseDefinition>) -> Result<Self, CatalogError> {
        if definitions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut cleaned = Vec::with_capacity(definitions.len());
        let mut seen = std::collections::HashSet::new();
        for mut def in definitions {
            def.id = def.id.trim().to_string();
            if !seen.insert(def.id.clone()) {
                return Err(CatalogError::DuplicateDisease { id: def.id });
            }
            let before = def.canonical_symptoms.len();
            def.canonical_symptoms.retain(|s| !s.trim().is_empty());
            if def.canonical_symptoms.len() < before {
                warn!(
                    disease_id = %def.id,
                    dropped = before - def.canonical_symptoms.len(),
                    "blank symptom phrases dropped"
                );
            }
            if def.canonical_symptoms.is_empty() {
                return Err(CatalogError::EmptySymptomList { id: def.id });
            }
            if def.name.trim().is_empty() {
                def.name = display_name_from_id(&def.id);
            }
            cleaned.push(def);
        }
        Ok(Self::indexed(cleaned))
    }

    /// Parse `[[disease]]` tables from TOML.
    pub fn from_toml(toml_str: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(toml_str).map_err(|e| CatalogError::ParseFailed {
            reason: e.to_string(),
        })?;
        Self::from_definitions(file.diseases)
    }

    /// Load the catalog named by config, or the built-in set when no path is configured.
    /// Called once at startup; the engine performs no I/O afterwards.
    pub fn load(config: &CatalogConfig) -> AquariskResult<Self> {
        let catalog = match &config.path {
            None => {
                let catalog = Self::builtin();
                events::catalog_loaded("builtin", catalog.len());
                catalog
            }
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|e| CatalogError::ReadFailed {
                        path: path.clone(),
                        reason: e.to_string(),
                    })?;
                let catalog = Self::from_toml(&content)?;
                events::catalog_loaded(path, catalog.len());
                catalog
            }
        };
        Ok(catalog)
    }

    fn indexed(diseases: Vec<DiseaseDefinition>) -> Self {
        let index = diseases
            .iter()
            .enumerate()
            .map(|(i, d)| (d.id.clone(), i))
            .collect();
        Self { diseases, index }
    }

    pub fn get(&self, id: &str) -> Option<&DiseaseDefinition> {
        self.index.get(id).map(|&i| &self.diseases[i])
    }

    /// All definitions in declaration order.
    pub fn all(&self) -> &[DiseaseDefinition] {
        &self.diseases
    }

    /// Declaration position of a disease.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.diseases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
    }
}

impl Default for DiseaseCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
