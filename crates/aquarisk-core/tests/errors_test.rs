use aquarisk_core::errors::*;

#[test]
fn catalog_error_duplicate_disease_carries_id() {
    let err = CatalogError::DuplicateDisease {
        id: "cholera".into(),
    };
    assert!(err.to_string().contains("cholera"));
}

#[test]
fn catalog_error_converts_into_top_level() {
    let err: AquariskError = CatalogError::Empty.into();
    assert!(matches!(err, AquariskError::CatalogError(CatalogError::Empty)));
    assert!(err.to_string().contains("catalog"));
}

#[test]
fn validation_error_empty_symptoms_converts() {
    let err: AquariskError = ValidationError::EmptySymptoms.into();
    assert!(matches!(
        err,
        AquariskError::ValidationError(ValidationError::EmptySymptoms)
    ));
}

#[test]
fn predictor_timeout_carries_name_and_duration() {
    let err = PredictorError::Timeout {
        name: "keras".into(),
        timeout_ms: 10_000,
    };
    let msg = err.to_string();
    assert!(msg.contains("keras"));
    assert!(msg.contains("10000"));
}

#[test]
fn toml_error_becomes_config_error() {
    let toml_err = toml::from_str::<toml::Value>("= nope").unwrap_err();
    let err: AquariskError = toml_err.into();
    assert!(matches!(err, AquariskError::ConfigError(_)));
}
