use crate::domain::errors::PredictionError;

/// Canonical feature order, used when the model metadata does not record one.
/// This order MUST match the column order the training pipeline fits on.
pub const FEATURE_NAMES: &[&str] = &["distance_km", "duration_min", "passenger_count"];

/// A single model input column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    DistanceKm,
    DurationMin,
    PassengerCount,
}

impl Feature {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "distance_km" => Some(Feature::DistanceKm),
            "duration_min" => Some(Feature::DurationMin),
            "passenger_count" => Some(Feature::PassengerCount),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Feature::DistanceKm => "distance_km",
            Feature::DurationMin => "duration_min",
            Feature::PassengerCount => "passenger_count",
        }
    }
}

/// Raw trip inputs handed to the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripFeatures {
    pub distance_km: f64,
    pub duration_min: f64,
    pub passenger_count: u8,
}

impl TripFeatures {
    pub fn value(&self, feature: Feature) -> f64 {
        match feature {
            Feature::DistanceKm => self.distance_km,
            Feature::DurationMin => self.duration_min,
            Feature::PassengerCount => f64::from(self.passenger_count),
        }
    }

    /// Lays the trip out as one model row, in exactly the order of `names`.
    /// Any name the registry does not know is a prediction failure.
    pub fn to_row<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<f64>, PredictionError> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                Feature::from_name(name)
                    .map(|feature| self.value(feature))
                    .ok_or_else(|| PredictionError::UnknownFeature {
                        name: name.to_string(),
                    })
            })
            .collect()
    }
}
