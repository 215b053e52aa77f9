use crate::domain::ml::ModelMetadata;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Reads the JSON metadata file the training pipeline writes next to the
/// model artifact.
pub struct MetadataStore {
    file_path: PathBuf,
}

impl MetadataStore {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn load(&self) -> Result<Option<ModelMetadata>> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&self.file_path).context("Failed to read model metadata file")?;
        let metadata: ModelMetadata =
            serde_json::from_str(&content).context("Failed to parse model metadata JSON")?;

        info!("Loaded model metadata from {:?}", self.file_path);
        Ok(Some(metadata))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("farecast-{}-{}", uuid::Uuid::new_v4(), name))
    }

    #[test]
    fn test_missing_file_is_none() {
        let store = MetadataStore::new(temp_file("model_meta.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_loads_metadata() {
        let path = temp_file("model_meta.json");
        fs::write(
            &path,
            r#"{"model_name": "LinearRegression", "mae": 1.92, "features": ["distance_km", "duration_min"]}"#,
        )
        .unwrap();

        let meta = MetadataStore::new(&path).load().unwrap().unwrap();
        assert_eq!(meta.model_name, "LinearRegression");
        assert_eq!(meta.mae, Some(1.92));
        assert_eq!(
            meta.features,
            Some(vec!["distance_km".to_string(), "duration_min".to_string()])
        );

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let path = temp_file("model_meta.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(MetadataStore::new(&path).load().is_err());
        let _ = fs::remove_file(path);
    }
}
