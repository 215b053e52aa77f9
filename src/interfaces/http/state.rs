use crate::application::dataset_insight::DatasetInsightService;
use crate::application::ml::ModelRegistry;
use crate::application::prediction_service::PredictionService;
use crate::config::Config;
use crate::infrastructure::observability::Metrics;
use std::sync::Arc;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub prediction: Arc<PredictionService>,
    pub insight: Arc<DatasetInsightService>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(
        registry: Arc<ModelRegistry>,
        insight: DatasetInsightService,
        metrics: Metrics,
    ) -> Self {
        metrics.set_model_loaded(registry.is_loaded());
        Self {
            prediction: Arc::new(PredictionService::new(registry)),
            insight: Arc::new(insight),
            metrics,
        }
    }

    /// Loads the model registry and wires the services from configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let registry = Arc::new(ModelRegistry::load(&config.model));
        let insight = DatasetInsightService::new(&config.dataset.data_path);
        Ok(Self::new(registry, insight, Metrics::new()?))
    }
}
