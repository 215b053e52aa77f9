//! Fare estimation domain: request/response types and the baseline tariff.

pub mod baseline;
pub mod types;

pub use baseline::BaselineEstimator;
pub use types::{PredictRequest, PredictResponse};

/// Rounds a monetary amount to two decimal places. Magnitudes too large to
/// scale by 100 carry no cents and are returned unchanged.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}
