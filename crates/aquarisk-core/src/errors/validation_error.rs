/// Caller-level report validation errors.
///
/// The engine itself never raises these; collaborators validate a
/// report before calling `analyze`.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("no symptoms reported")]
    EmptySymptoms,

    #[error("environmental input {field} out of range: {value}")]
    OutOfRange { field: String, value: f64 },
}
