//! # aquarisk-catalog
//!
//! Static reference data for the scoring engine.
//!
//! - [`DiseaseCatalog`]: read-only disease definitions keyed by id, in declaration order.
//! - [`SymptomRuleTable`]: keyword groups and clinical weight per symptom id.
//! - [`SymptomMatcher`]: relates a reported symptom id to a disease's canonical
//!   symptom phrases by case-insensitive substring containment in either direction.

pub mod builtin;
pub mod catalog;
pub mod disease;
pub mod matcher;
pub mod symptoms;

pub use catalog::DiseaseCatalog;
pub use disease::{DiseaseDefinition, SeverityTier};
pub use matcher::SymptomMatcher;
pub use symptoms::{SymptomRule, SymptomRuleTable};
