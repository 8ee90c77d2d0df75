//! One module per scoring factor. Each exposes a `calculate` function.

pub mod combination;
pub mod critical;
pub mod duration;
pub mod multiplicity;
pub mod severity;
pub mod symptom_match;
pub mod water_source;
pub mod water_treatment;
