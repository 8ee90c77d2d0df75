use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use super::{DurationBucket, Severity, WaterSource, WaterTreatment};
use crate::errors::ValidationError;

/// One respondent's self-reported symptoms and risk context.
///
/// Created by the caller and consumed once by `analyze`; the engine keeps no copy.
/// Symptom ids are the short form tokens (`diarrhea`, `abdominal_pain`, …).
/// Deserialized reports are normalised exactly like `new`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, TS)]
#[ts(export)]
pub struct SymptomReport {
    pub reported_symptoms: BTreeSet<String>,
    pub duration: DurationBucket,
    pub water_source: WaterSource,
    pub water_treatment: WaterTreatment,
    pub severity: Severity,
}

impl SymptomReport {
    /// Create a report from symptom ids, normalised to trimmed lowercase.
    /// Context fields start at their neutral defaults.
    pub fn new<I, S>(symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            reported_symptoms: normalise_symptoms(symptoms),
            ..Default::default()
        }
    }

    pub fn with_duration(mut self, duration: DurationBucket) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_water_source(mut self, source: WaterSource) -> Self {
        self.water_source = source;
        self
    }

    pub fn with_water_treatment(mut self, treatment: WaterTreatment) -> Self {
        self.water_treatment = treatment;
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn has_symptom(&self, symptom_id: &str) -> bool {
        self.reported_symptoms.contains(symptom_id)
    }

    /// Caller-side validation before `analyze`. An empty symptom set is rejected.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.reported_symptoms.is_empty() {
            return Err(ValidationError::EmptySymptoms);
        }
        Ok(())
    }
}

fn normalise_symptoms<I, S>(symptoms: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    symptoms
        .into_iter()
        .map(|s| s.as_ref().trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct WireReport {
    reported_symptoms: Vec<String>,
    duration: DurationBucket,
    water_source: WaterSource,
    water_treatment: WaterTreatment,
    severity: Severity,
}

impl<'de> Deserialize<'de> for SymptomReport {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireReport::deserialize(deserializer)?;
        Ok(Self {
            reported_symptoms: normalise_symptoms(wire.reported_symptoms),
            duration: wire.duration,
            water_source: wire.water_source,
            water_treatment: wire.water_treatment,
            severity: wire.severity,
        })
    }
}
