/// Disease catalog and symptom rule table errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate disease id: {id}")]
    DuplicateDisease { id: String },

    #[error("disease {id} has no canonical symptoms")]
    EmptySymptomList { id: String },

    #[error("duplicate symptom rule: {symptom_id}")]
    DuplicateSymptomRule { symptom_id: String },

    #[error("symptom rule {symptom_id} has invalid weight {weight}")]
    InvalidWeight { symptom_id: String, weight: f64 },

    #[error("catalog is empty")]
    Empty,

    #[error("failed to read catalog {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("failed to parse catalog: {reason}")]
    ParseFailed { reason: String },
}
