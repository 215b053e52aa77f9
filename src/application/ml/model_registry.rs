use super::predictor::FareRegressor;
use super::smartcore_regressor::SmartCoreRegressor;
use crate::config::ModelEnvConfig;
use crate::domain::errors::PredictionError;
use crate::domain::ml::{FEATURE_NAMES, ModelMetadata, TripFeatures};
use crate::infrastructure::persistence::MetadataStore;
use std::fmt;
use std::path::Path;
use tracing::{error, info, warn};

/// The trained model, if any, and its metadata.
///
/// Built once at startup and never mutated afterwards, so it can be shared
/// across requests behind an `Arc` without locking. A failed or skipped load
/// is permanent for the lifetime of the process.
pub struct ModelRegistry {
    model: Option<Box<dyn FareRegressor>>,
    metadata: Option<ModelMetadata>,
}

impl ModelRegistry {
    /// Attempts to load the artifact and its metadata from the configured paths.
    /// Neither a missing nor a corrupt file is an error here; both leave the
    /// registry unloaded.
    pub fn load(config: &ModelEnvConfig) -> Self {
        let model = load_artifact(&config.model_path);

        let store = MetadataStore::new(&config.metadata_path);
        let metadata = match store.load() {
            Ok(Some(metadata)) => Some(metadata),
            Ok(None) => {
                warn!("No model metadata at {:?}", store.path());
                None
            }
            Err(e) => {
                error!("Ignoring unreadable model metadata: {:#}", e);
                None
            }
        };

        let registry = Self::from_parts(model, metadata);
        match registry.model_name() {
            Some(name) if registry.is_loaded() => {
                let trained_at = registry
                    .metadata()
                    .and_then(ModelMetadata::trained_at_utc)
                    .map(|dt| dt.to_rfc3339())
                    .unwrap_or_else(|| "unknown".to_string());
                info!(
                    "Model registry ready: {} (trained at {}), features {:?}",
                    name,
                    trained_at,
                    registry.feature_names()
                );
            }
            _ => warn!("Model registry has no model. All fares will use the baseline tariff."),
        }
        registry
    }

    pub fn from_parts(
        model: Option<Box<dyn FareRegressor>>,
        metadata: Option<ModelMetadata>,
    ) -> Self {
        Self { model, metadata }
    }

    pub fn unloaded() -> Self {
        Self::from_parts(None, None)
    }

    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    pub fn metadata(&self) -> Option<&ModelMetadata> {
        self.metadata.as_ref()
    }

    /// Algorithm name from metadata, else derived from the loaded model's type.
    /// Always `Some` when a model is loaded.
    pub fn model_name(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .map(|m| m.model_name.as_str())
            .or_else(|| self.model.as_ref().map(|m| m.name()))
    }

    /// Feature order presented to the model: as recorded in metadata, or the
    /// canonical order when metadata has none.
    pub fn feature_names(&self) -> Vec<&str> {
        match self.metadata.as_ref().and_then(|m| m.features.as_ref()) {
            Some(features) => features.iter().map(String::as_str).collect(),
            None => FEATURE_NAMES.to_vec(),
        }
    }

    pub fn predict(
        &self,
        distance_km: f64,
        duration_min: f64,
        passenger_count: u8,
    ) -> Result<f64, PredictionError> {
        let model = self
            .model
            .as_ref()
            .ok_or(PredictionError::ModelUnavailable)?;

        let trip = TripFeatures {
            distance_km,
            duration_min,
            passenger_count,
        };
        let row = trip.to_row(&self.feature_names())?;

        if let Some(expected) = model.n_features() {
            if expected != row.len() {
                return Err(PredictionError::ShapeMismatch {
                    expected,
                    actual: row.len(),
                });
            }
        }

        let value = model.predict(&row)?;
        if !value.is_finite() {
            return Err(PredictionError::NonFinite { value });
        }
        Ok(value)
    }
}

impl fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("loaded", &self.is_loaded())
            .field("model_name", &self.model_name())
            .field("metadata", &self.metadata)
            .finish()
    }
}

fn load_artifact(path: &Path) -> Option<Box<dyn FareRegressor>> {
    if !path.exists() {
        warn!(
            "Model artifact not found at {:?}. Serving baseline fares only.",
            path
        );
        return None;
    }

    match SmartCoreRegressor::from_file(path) {
        Ok(model) => {
            info!("Successfully loaded {} model from {:?}", model.name(), path);
            Some(Box::new(model))
        }
        Err(e) => {
            error!("Failed to load model artifact {:?}: {}", path, e);
            None
        }
    }
}
