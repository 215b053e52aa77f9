//! Configuration module for farecast.
//!
//! Configuration is read from environment variables (a `.env` file is loaded
//! by the server binary), organized by concern: Server, Model, and Dataset.

mod dataset_config;
mod model_config;
mod server_config;

pub use dataset_config::{DEFAULT_DATA_PATH, DatasetEnvConfig};
pub use model_config::{DEFAULT_MODEL_PATH, METADATA_FILE_NAME, ModelEnvConfig};
pub use server_config::ServerEnvConfig;

use anyhow::{Context, Result};
use std::env;

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub server: ServerEnvConfig,
    pub model: ModelEnvConfig,
    pub dataset: DatasetEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup, so callers and
    /// tests need not touch the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server = ServerEnvConfig::from_lookup(&lookup).context("Failed to load server config")?;
        let model = ModelEnvConfig::from_lookup(&lookup);
        let dataset = DatasetEnvConfig::from_lookup(&lookup);

        Ok(Self {
            server,
            model,
            dataset,
        })
    }
}
