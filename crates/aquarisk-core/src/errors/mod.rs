mod aquarisk_error;
mod catalog_error;
mod predictor_error;
mod validation_error;

pub use aquarisk_error::{AquariskError, AquariskResult};
pub use catalog_error::CatalogError;
pub use predictor_error::PredictorError;
pub use validation_error::ValidationError;
