use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_passenger_count() -> u8 {
    1
}

/// A single fare estimation request.
///
/// Range checks are enforced by [`Validate`] at the HTTP boundary; the
/// prediction service assumes it only ever sees validated requests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct PredictRequest {
    /// Trip length in kilometres (>= 0)
    #[validate(range(min = 0.0))]
    pub distance_km: f64,
    /// Trip duration in minutes (>= 0)
    #[validate(range(min = 0.0))]
    pub duration_min: f64,
    /// Number of passengers (1-8)
    #[serde(default = "default_passenger_count")]
    #[validate(range(min = 1, max = 8))]
    pub passenger_count: u8,
}

impl PredictRequest {
    pub fn new(distance_km: f64, duration_min: f64, passenger_count: u8) -> Self {
        Self {
            distance_km,
            duration_min,
            passenger_count,
        }
    }
}

/// Outcome of a fare estimation.
///
/// `used_model` is only ever true when the value came from the loaded model;
/// in that case `model_name` is always set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predicted_fare: f64,
    pub used_model: bool,
    pub model_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl PredictResponse {
    pub fn from_model(predicted_fare: f64, model_name: impl Into<String>) -> Self {
        Self {
            predicted_fare,
            used_model: true,
            model_name: Some(model_name.into()),
            note: None,
        }
    }

    pub fn from_baseline(predicted_fare: f64) -> Self {
        Self {
            predicted_fare,
            used_model: false,
            model_name: None,
            note: None,
        }
    }

    /// Baseline answer substituted after the model was consulted and failed.
    pub fn fallback(predicted_fare: f64, model_name: Option<String>, note: String) -> Self {
        Self {
            predicted_fare,
            used_model: false,
            model_name,
            note: Some(note),
        }
    }
}
