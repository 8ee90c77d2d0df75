//! # aquarisk-scoring
//!
//! Per-disease confidence scoring and overall risk aggregation.
//!
//! ```text
//! score = (base + critical + multiplicity) × severity
//!       + water_source + water_treatment + duration + combination
//! confidence = round(clamp(score, 0, 95))
//! ```
//!
//! Diseases below confidence 15 are dropped. The aggregator turns the top
//! confidence plus standalone risk factors into a `[0, 100]` risk score.

pub mod aggregator;
pub mod engine;
pub mod factors;
pub mod formula;
pub mod tables;

pub use engine::ScoringEngine;
pub use formula::ConfidenceBreakdown;
pub use tables::{BonusTables, CombinationRule, CombinationTable, CriticalSymptomTable};
