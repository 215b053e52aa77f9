//! Location of the cleaned trip dataset.

use std::path::PathBuf;

pub const DEFAULT_DATA_PATH: &str = "data/cleaned_taxi.csv";

/// Dataset environment configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetEnvConfig {
    pub data_path: PathBuf,
}

impl Default for DatasetEnvConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl DatasetEnvConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        lookup("FARECAST_DATA_PATH")
            .map(|path| Self {
                data_path: PathBuf::from(path),
            })
            .unwrap_or_default()
    }
}
