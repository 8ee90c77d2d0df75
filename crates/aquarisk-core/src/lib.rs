//! # aquarisk-core
//!
//! Foundation crate for the Aquarisk engine.
//! Defines the report inputs, derived results, forecast models, errors,
//! config, constants, and the traits the engines implement.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod report;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AquariskConfig;
pub use errors::{AquariskError, AquariskResult};
pub use models::{AnalysisResult, DiseaseMatch, RiskFactor, RiskLevel};
pub use report::{DurationBucket, Severity, SymptomReport, WaterSource, WaterTreatment};
