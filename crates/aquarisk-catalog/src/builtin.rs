//! Built-in reference data: five water-borne diseases and ten intake-form symptoms.

use crate::disease::{DiseaseDefinition, SeverityTier};
use crate::symptoms::SymptomRule;

struct DiseaseSeed {
    id: &'static str,
    name: &'static str,
    symptoms: &'static [&'static str],
    description: &'static str,
    treatment: &'static str,
    prevention: &'static str,
    tier: SeverityTier,
}

const DISEASES: &[DiseaseSeed] = &[
    DiseaseSeed {
        id: "cholera",
        name: "Cholera",
        symptoms: &["severe diarrhea", "vomiting", "dehydration", "muscle cramps"],
        description: "Acute diarrheal infection caused by ingesting food or water contaminated with Vibrio cholerae.",
        treatment: "Oral rehydration therapy, IV fluids in severe cases, antibiotics if necessary.",
        prevention: "Safe water, proper sanitation, good hygiene practices.",
        tier: SeverityTier::High,
    },
    DiseaseSeed {
        id: "typhoid",
        name: "Typhoid",
        symptoms: &["fever", "headache", "abdominal pain", "diarrhea", "fatigue"],
        description: "Bacterial infection caused by Salmonella typhi, spread through contaminated food and water.",
        treatment: "Antibiotics (fluoroquinolones, azithromycin), supportive care, hospitalization in severe cases.",
        prevention: "Vaccination, safe water and food practices, proper sanitation.",
        tier: SeverityTier::High,
    },
    DiseaseSeed {
        id: "hepatitis_a",
        name: "Hepatitis A",
        symptoms: &["jaundice", "fatigue", "abdominal pain", "nausea", "fever"],
        description: "Viral liver infection caused by the hepatitis A virus, transmitted through contaminated water and food.",
        treatment: "Supportive care, rest, adequate nutrition, avoid alcohol.",
        prevention: "Vaccination, safe water, proper food handling, good hygiene.",
        tier: SeverityTier::Medium,
    },
    DiseaseSeed {
        id: "diarrheal_diseases",
        name: "Diarrheal Diseases",
        symptoms: &["diarrhea", "abdominal cramps", "nausea", "dehydration"],
        description: "Bacterial, viral, and parasitic infections causing diarrhea, commonly from contaminated water sources.",
        treatment: "Oral rehydration therapy, probiotics, antibiotics if bacterial.",
        prevention: "Safe drinking water, proper sanitation, hand hygiene.",
        tier: SeverityTier::Medium,
    },
    DiseaseSeed {
        id: "dysentery",
        name: "Dysentery",
        symptoms: &["bloody diarrhea", "severe abdominal pain", "fever", "dehydration"],
        description: "Inflammatory disorder of the intestine, especially the colon, causing severe diarrhea with blood.",
        treatment: "Antibiotics, fluid replacement, hospitalization in severe cases.",
        prevention: "Safe water, proper sanitation, food safety measures.",
        tier: SeverityTier::High,
    },
];

const SYMPTOMS: &[(&str, &[&str], f64)] = &[
    ("fever", &["fever", "high temperature", "pyrexia"], 1.0),
    ("diarrhea", &["diarrhea", "loose stools", "watery stools", "frequent bowel"], 1.2),
    ("vomiting", &["vomiting", "nausea", "throwing up"], 1.1),
    ("nausea", &["nausea", "sick feeling", "queasy"], 0.8),
    ("abdominal_pain", &["abdominal", "stomach pain", "belly pain", "cramps"], 1.0),
    ("headache", &["headache", "head pain", "migraine"], 0.9),
    ("fatigue", &["fatigue", "tiredness", "weakness", "exhaustion"], 0.8),
    ("dehydration", &["dehydration", "thirst", "dry mouth", "weakness"], 1.1),
    ("muscle_cramps", &["muscle cramps", "cramps", "muscle pain"], 1.0),
    ("jaundice", &["jaundice", "yellow skin", "yellow eyes"], 1.3),
];

/// Built-in disease definitions in declaration order.
pub fn diseases() -> Vec<DiseaseDefinition> {
    DISEASES
        .iter()
        .map(|seed| DiseaseDefinition {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            canonical_symptoms: seed.symptoms.iter().map(|s| s.to_string()).collect(),
            description: seed.description.to_string(),
            treatment: seed.treatment.to_string(),
            prevention: seed.prevention.to_string(),
            severity_tier: seed.tier,
        })
        .collect()
}

/// Built-in symptom rules.
pub fn symptom_rules() -> Vec<SymptomRule> {
    SYMPTOMS
        .iter()
        .map(|(id, keywords, weight)| SymptomRule::new(*id, keywords.iter().copied(), *weight))
        .collect()
}
