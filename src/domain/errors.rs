use thiserror::Error;

/// Per-request model failure. Always resolved by the prediction service into
/// a baseline answer; never surfaced to HTTP callers as an error.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("no model loaded")]
    ModelUnavailable,

    #[error("unknown feature '{name}' in model feature list")]
    UnknownFeature { name: String },

    #[error("feature layout has {actual} columns, model expects {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("model returned a non-finite value: {value}")]
    NonFinite { value: f64 },

    #[error("model returned no prediction")]
    EmptyOutput,

    #[error("model inference failed: {reason}")]
    Inference { reason: String },
}

/// Failure to read or decode the model artifact at startup.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid model artifact JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure to read the cleaned dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}
