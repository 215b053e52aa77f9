use super::round2;

/// Deterministic tariff used whenever no model is usable.
///
/// Passenger count is deliberately not an input: the model may use it as a
/// feature, the baseline never does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineEstimator {
    pub base_fare: f64,
    pub per_km: f64,
    pub per_min: f64,
}

impl Default for BaselineEstimator {
    fn default() -> Self {
        Self {
            base_fare: 3.5,
            per_km: 1.8,
            per_min: 0.5,
        }
    }
}

impl BaselineEstimator {
    /// Saturates at `f64::MAX` so the fare always serializes as a number.
    pub fn estimate(&self, distance_km: f64, duration_min: f64) -> f64 {
        let fare = self.base_fare + self.per_km * distance_km + self.per_min * duration_min;
        round2(fare.min(f64::MAX))
    }
}
