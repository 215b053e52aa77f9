pub mod model_registry;
pub mod predictor;
pub mod smartcore_regressor;

pub use model_registry::ModelRegistry;
pub use predictor::FareRegressor;
pub use smartcore_regressor::{Estimator, SmartCoreRegressor};
