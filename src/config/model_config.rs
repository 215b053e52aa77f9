//! Locations of the trained model artifact and its metadata.

use std::path::PathBuf;

pub const DEFAULT_MODEL_PATH: &str = "backend/models/taxi_model.json";
pub const METADATA_FILE_NAME: &str = "model_meta.json";

/// Model artifact environment configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ModelEnvConfig {
    pub model_path: PathBuf,
    pub metadata_path: PathBuf,
}

impl Default for ModelEnvConfig {
    fn default() -> Self {
        Self::for_artifact(DEFAULT_MODEL_PATH)
    }
}

impl ModelEnvConfig {
    /// Artifact at `model_path`, metadata in the sibling `model_meta.json`.
    pub fn for_artifact(model_path: impl Into<PathBuf>) -> Self {
        let model_path = model_path.into();
        let metadata_path = model_path.with_file_name(METADATA_FILE_NAME);
        Self {
            model_path,
            metadata_path,
        }
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base = match lookup("FARECAST_MODEL_PATH") {
            Some(path) => Self::for_artifact(path),
            None => Self::default(),
        };
        match lookup("FARECAST_MODEL_META_PATH") {
            Some(path) => Self {
                metadata_path: PathBuf::from(path),
                ..base
            },
            None => base,
        }
    }
}
