#![allow(dead_code)]

use farecast::application::ml::{Estimator, SmartCoreRegressor};
use farecast::config::ModelEnvConfig;
use farecast::domain::ml::ModelMetadata;
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::{LinearRegression, LinearRegressionParameters};
use std::fs;
use std::path::PathBuf;

/// Scratch directory removed on drop.
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let root = std::env::temp_dir().join(format!("farecast-test-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&root).unwrap();
        Self { root }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn model_config(&self) -> ModelEnvConfig {
        ModelEnvConfig::for_artifact(self.path("taxi_model.json"))
    }

    pub fn write_model(&self, model: &SmartCoreRegressor) {
        model.write_to(&self.model_config().model_path).unwrap();
    }

    pub fn write_metadata(&self, metadata: &ModelMetadata) {
        let json = serde_json::to_string_pretty(metadata).unwrap();
        fs::write(self.model_config().metadata_path, json).unwrap();
    }

    /// Writes a cleaned dataset of `(distance, duration, passengers, fare)` rows.
    pub fn write_dataset(&self, rows: &[(f64, f64, u8, f64)]) -> PathBuf {
        let mut csv = String::from("distance_km,duration_min,passenger_count,fare\n");
        for (distance, duration, passengers, fare) in rows {
            csv.push_str(&format!("{},{},{},{}\n", distance, duration, passengers, fare));
        }
        self.write("cleaned_taxi.csv", &csv)
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

pub fn synthetic_fare(distance_km: f64, duration_min: f64, passenger_count: u8) -> f64 {
    3.5 + 1.8 * distance_km + 0.5 * duration_min + 0.3 * f64::from(passenger_count)
}

/// Synthetic trips in canonical column order, with the full-feature fare as target.
fn training_set(n_features: usize) -> (Vec<Vec<f64>>, Vec<f64>) {
    let mut rows = Vec::new();
    let mut targets = Vec::new();
    for i in 0..40u32 {
        let distance = 0.5 + f64::from(i) * 0.6;
        let duration = 4.0 + f64::from((i * 7) % 13) * 2.5;
        let passengers = (1 + (i * 3) % 5) as u8;
        let full = [distance, duration, f64::from(passengers)];
        rows.push(full[..n_features].to_vec());
        targets.push(synthetic_fare(distance, duration, passengers));
    }
    (rows, targets)
}

/// Linear model fitted on the first `n_features` canonical columns.
pub fn fit_linear(n_features: usize) -> SmartCoreRegressor {
    let (rows, targets) = training_set(n_features);
    let x = DenseMatrix::from_2d_vec(&rows).unwrap();
    let model = LinearRegression::fit(&x, &targets, LinearRegressionParameters::default()).unwrap();
    SmartCoreRegressor::new(Estimator::LinearRegression(model), n_features)
}

pub fn fit_forest() -> SmartCoreRegressor {
    let (rows, targets) = training_set(3);
    let x = DenseMatrix::from_2d_vec(&rows).unwrap();
    let params = RandomForestRegressorParameters::default()
        .with_n_trees(8)
        .with_max_depth(4);
    let model = RandomForestRegressor::fit(&x, &targets, params).unwrap();
    SmartCoreRegressor::new(Estimator::RandomForestRegressor(model), 3)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 0.011,
        "expected {} to be within a cent of {}",
        actual,
        expected
    );
}
