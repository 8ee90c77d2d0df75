//! Symptom report inputs supplied by the caller, one per analysis call.
//!
//! Every enum here is fail-soft: unknown wire values deserialize to a
//! neutral variant, and `parse` never errors. Deserialization goes through
//! the same `parse` the builders use, so JSON and programmatic reports agree.

pub mod duration;
pub mod severity;
pub mod symptom_report;
pub mod water;

pub use duration::DurationBucket;
pub use severity::Severity;
pub use symptom_report::SymptomReport;
pub use water::{WaterRiskTier, WaterSource, WaterTreatment};

use serde::{Deserialize, Deserializer};

/// Decode an optional string and map it through a lenient `parse`.
/// `null` and missing values take the type's default.
pub(crate) fn deserialize_lenient<'de, D, T>(
    deserializer: D,
    parse: fn(&str) -> T,
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(|raw| parse(&raw))
        .unwrap_or_default())
}
