use aquarisk_catalog::{DiseaseCatalog, DiseaseDefinition, SeverityTier};
use aquarisk_core::config::CatalogConfig;
use aquarisk_core::errors::{AquariskError, CatalogError};

fn definition(id: &str, symptoms: &[&str]) -> DiseaseDefinition {
    DiseaseDefinition {
        id: id.to_string(),
        name: String::new(),
        canonical_symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        description: String::new(),
        treatment: String::new(),
        prevention: String::new(),
        severity_tier: SeverityTier::Medium,
    }
}

#[test]
fn builtin_has_five_diseases_in_declaration_order() {
    let catalog = DiseaseCatalog::builtin();
    let ids: Vec<&str> = catalog.all().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(
        ids,
        ["cholera", "typhoid", "hepatitis_a", "diarrheal_diseases", "dysentery"]
    );
    assert_eq!(catalog.position("hepatitis_a"), Some(2));
}

#[test]
fn get_returns_definition_or_none() {
    let catalog = DiseaseCatalog::builtin();
    let cholera = catalog.get("cholera").unwrap();
    assert_eq!(cholera.symptom_count(), 4);
    assert_eq!(cholera.severity_tier, SeverityTier::High);
    assert_eq!(catalog.get("hepatitis_a").unwrap().name, "Hepatitis A");
    assert!(catalog.get("malaria").is_none());
}

#[test]
fn duplicate_ids_rejected() {
    let err = DiseaseCatalog::from_definitions(vec![
        definition("cholera", &["vomiting"]),
        definition("cholera", &["fever"]),
    ])
    .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateDisease { id } if id == "cholera"));
}

#[test]
fn empty_catalog_rejected() {
    assert!(matches!(
        DiseaseCatalog::from_definitions(vec![]),
        Err(CatalogError::Empty)
    ));
}

#[test]
fn blank_phrases_dropped_and_all_blank_rejected() {
    let catalog =
        DiseaseCatalog::from_definitions(vec![definition("giardiasis", &["", "bloating", "  "])])
            .unwrap();
    assert_eq!(catalog.get("giardiasis").unwrap().canonical_symptoms, ["bloating"]);

    let err = DiseaseCatalog::from_definitions(vec![definition("ghost", &["", " "])]).unwrap_err();
    assert!(matches!(err, CatalogError::EmptySymptomList { .. }));
}

#[test]
fn missing_name_derived_from_id() {
    let catalog =
        DiseaseCatalog::from_definitions(vec![definition("hepatitis_e", &["jaundice"])]).unwrap();
    assert_eq!(catalog.get("hepatitis_e").unwrap().name, "Hepatitis e");
}

#[test]
fn loads_from_toml() {
    let toml = r#"
[[disease]]
id = "giardiasis"
name = "Giardiasis"
canonical_symptoms = ["diarrhea", "bloating", "abdominal cramps"]
severity_tier = "low"

[[disease]]
id = "leptospirosis"
canonical_symptoms = ["fever", "muscle pain", "jaundice"]
severity_tier = "high"
"#;
    let catalog = DiseaseCatalog::from_toml(toml).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("giardiasis").unwrap().severity_tier, SeverityTier::Low);
    assert_eq!(catalog.get("leptospirosis").unwrap().name, "Leptospirosis");
}

#[test]
fn malformed_toml_is_parse_error() {
    let err = DiseaseCatalog::from_toml("[[disease]]\nid = 4").unwrap_err();
    assert!(matches!(err, CatalogError::ParseFailed { .. }));
}

#[test]
fn load_without_path_uses_builtin() {
    let catalog = DiseaseCatalog::load(&CatalogConfig::default()).unwrap();
    assert_eq!(catalog.len(), 5);
}

#[test]
fn load_missing_file_is_read_error() {
    let config = CatalogConfig {
        path: Some("/nonexistent/aquarisk/catalog.toml".to_string()),
    };
    let err = DiseaseCatalog::load(&config).unwrap_err();
    assert!(matches!(
        err,
        AquariskError::CatalogError(CatalogError::ReadFailed { .. })
    ));
}

#[test]
fn load_from_file_on_disk() {
    let path = std::env::temp_dir().join(format!("aquarisk-catalog-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        "[[disease]]\nid = \"cholera\"\ncanonical_symptoms = [\"vomiting\"]\n",
    )
    .unwrap();
    let config = CatalogConfig {
        path: Some(path.to_string_lossy().into_owned()),
    };
    let catalog = DiseaseCatalog::load(&config).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get("cholera").unwrap().name, "Cholera");
}
