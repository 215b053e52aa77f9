use crate::domain::errors::PredictionError;

/// Interface for fare regression models
pub trait FareRegressor: Send + Sync {
    /// Predict a fare from one feature row laid out in the model's training order
    fn predict(&self, row: &[f64]) -> Result<f64, PredictionError>;

    /// Number of input columns the model was fitted on, when known
    fn n_features(&self) -> Option<usize> {
        None
    }

    /// Algorithm name, derived from the concrete model type
    fn name(&self) -> &str;
}
