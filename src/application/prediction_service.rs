use crate::application::ml::ModelRegistry;
use crate::domain::fare::{BaselineEstimator, PredictRequest, PredictResponse, round2};
use std::sync::Arc;
use tracing::{debug, warn};

/// Turns a validated request into a fare, preferring the trained model and
/// falling back to the baseline tariff when the model is absent or fails.
///
/// `handle` never fails: every path ends in a well-formed response.
pub struct PredictionService {
    registry: Arc<ModelRegistry>,
    baseline: BaselineEstimator,
}

impl PredictionService {
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self::with_baseline(registry, BaselineEstimator::default())
    }

    pub fn with_baseline(registry: Arc<ModelRegistry>, baseline: BaselineEstimator) -> Self {
        Self { registry, baseline }
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn handle(&self, request: &PredictRequest) -> PredictResponse {
        let baseline_fare = self
            .baseline
            .estimate(request.distance_km, request.duration_min);

        if !self.registry.is_loaded() {
            return PredictResponse::from_baseline(baseline_fare);
        }

        // A loaded registry always resolves a name (metadata or model type).
        let model_name = self.registry.model_name().unwrap_or("unknown").to_string();

        match self.registry.predict(
            request.distance_km,
            request.duration_min,
            request.passenger_count,
        ) {
            Ok(raw) => {
                let fare = round2(raw.max(0.0));
                debug!("{} predicted {:.4} -> {:.2}", model_name, raw, fare);
                PredictResponse::from_model(fare, model_name)
            }
            Err(e) => {
                warn!("{} prediction failed, using baseline: {}", model_name, e);
                PredictResponse::fallback(baseline_fare, Some(model_name), format!("fallback: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ml::FareRegressor;
    use crate::domain::errors::PredictionError;
    use crate::domain::ml::ModelMetadata;

    struct Constant(f64);

    impl FareRegressor for Constant {
        fn predict(&self, _row: &[f64]) -> Result<f64, PredictionError> {
            Ok(self.0)
        }

        fn name(&self) -> &str {
            "Constant"
        }
    }

    struct Broken;

    impl FareRegressor for Broken {
        fn predict(&self, _row: &[f64]) -> Result<f64, PredictionError> {
            Err(PredictionError::Inference {
                reason: "tree 17 is missing".to_string(),
            })
        }

        fn name(&self) -> &str {
            "Broken"
        }
    }

    fn service(model: Option<Box<dyn FareRegressor>>, meta: Option<ModelMetadata>) -> PredictionService {
        PredictionService::new(Arc::new(ModelRegistry::from_parts(model, meta)))
    }

    #[test]
    fn test_no_model_uses_baseline() {
        let svc = service(None, None);
        let resp = svc.handle(&PredictRequest::new(10.0, 20.0, 2));
        assert_eq!(resp.predicted_fare, 31.5);
        assert!(!resp.used_model);
        assert!(resp.model_name.is_none());
        assert!(resp.note.is_none());
    }

    #[test]
    fn test_metadata_alone_does_not_enable_model() {
        let svc = service(None, Some(ModelMetadata::new("RandomForest")));
        let resp = svc.handle(&PredictRequest::new(1.0, 1.0, 1));
        assert!(!resp.used_model);
        assert!(resp.model_name.is_none());
        assert_eq!(resp.predicted_fare, 5.8);
    }

    #[test]
    fn test_model_success() {
        let svc = service(
            Some(Box::new(Constant(18.456))),
            Some(ModelMetadata::new("RandomForest")),
        );
        let resp = svc.handle(&PredictRequest::new(5.0, 12.0, 1));
        assert!(resp.used_model);
        assert_eq!(resp.predicted_fare, 18.46);
        assert_eq!(resp.model_name.as_deref(), Some("RandomForest"));
        assert!(resp.note.is_none());
    }

    #[test]
    fn test_negative_model_output_is_floored() {
        let svc = service(Some(Box::new(Constant(-4.2))), None);
        let resp = svc.handle(&PredictRequest::new(0.0, 0.0, 1));
        assert!(resp.used_model);
        assert_eq!(resp.predicted_fare, 0.0);
        assert_eq!(resp.model_name.as_deref(), Some("Constant"));
    }

    #[test]
    fn test_model_failure_falls_back_with_note() {
        let svc = service(Some(Box::new(Broken)), None);
        let resp = svc.handle(&PredictRequest::new(10.0, 20.0, 2));
        assert!(!resp.used_model);
        assert_eq!(resp.predicted_fare, 31.5);
        assert_eq!(resp.model_name.as_deref(), Some("Broken"));
        let note = resp.note.unwrap();
        assert!(note.starts_with("fallback:"));
        assert!(note.contains("tree 17"));
    }

    #[test]
    fn test_layout_failure_falls_back() {
        let meta = ModelMetadata::new("LinearRegression").with_features(["distance_km", "tolls"]);
        let svc = service(Some(Box::new(Constant(12.0))), Some(meta));
        let resp = svc.handle(&PredictRequest::new(2.0, 4.0, 1));
        assert!(!resp.used_model);
        assert_eq!(resp.predicted_fare, 9.1);
        assert!(resp.note.unwrap().contains("tolls"));
    }

    #[test]
    fn test_fare_is_never_negative() {
        let services = [
            service(None, None),
            service(Some(Box::new(Constant(-100.0))), None),
            service(Some(Box::new(Broken)), None),
        ];
        for svc in &services {
            for distance in [0.0, 0.4, 3.0, 25.0, 180.0] {
                for duration in [0.0, 1.5, 30.0, 240.0] {
                    for passengers in 1..=8 {
                        let req = PredictRequest::new(distance, duration, passengers);
                        assert!(svc.handle(&req).predicted_fare >= 0.0);
                    }
                }
            }
        }
    }
}
