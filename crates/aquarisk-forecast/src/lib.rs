//! # aquarisk-forecast
//!
//! Six-month water-borne outbreak forecast.
//!
//! - [`EnvironmentalRiskEstimator`]: statistical estimator driven by weather,
//!   water quality, sanitation, season and recent report volume. Never fails.
//! - [`ForecastService`]: consults an optional external predictor under a
//!   timeout and degrades to the estimator on error, timeout or malformed output.

pub mod environment;
pub mod estimator;
pub mod profiles;
pub mod recommendations;
pub mod service;
pub mod variation;

pub use estimator::EnvironmentalRiskEstimator;
pub use profiles::{DiseaseProfile, SeasonalOffsets};
pub use service::{ForecastOutcome, ForecastService};
