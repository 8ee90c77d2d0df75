mod analyzer;
mod predictor;

pub use analyzer::ISymptomAnalyzer;
pub use predictor::{IOutbreakForecaster, IOutbreakPredictor};
