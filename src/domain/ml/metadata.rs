use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Descriptive record written by the training pipeline next to the model
/// artifact. Only `model_name` is mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_name: String,
    /// Mean absolute error on the held-out split
    #[serde(default)]
    pub mae: Option<f64>,
    /// Ordered feature names the model was fitted on
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub trained_at: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub n_rows: Option<u64>,
    #[serde(default)]
    pub data_source: Option<String>,
    /// Version of the library that produced the artifact
    #[serde(default, alias = "smartcore", alias = "sklearn")]
    pub library_version: Option<String>,
}

impl ModelMetadata {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            mae: None,
            features: None,
            trained_at: None,
            target: None,
            n_rows: None,
            data_source: None,
            library_version: None,
        }
    }

    pub fn with_features<S: Into<String>>(mut self, features: impl IntoIterator<Item = S>) -> Self {
        self.features = Some(features.into_iter().map(Into::into).collect());
        self
    }

    /// Training timestamp, when it is a valid RFC 3339 string.
    pub fn trained_at_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.trained_at.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
