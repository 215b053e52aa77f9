use super::predictor::FareRegressor;
use crate::domain::errors::{ArtifactError, PredictionError};
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::LinearRegression;
use smartcore::linear::ridge_regression::RidgeRegression;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

pub type LinearModel = LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>;
pub type RidgeModel = RidgeRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>;
pub type ForestModel = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// The fitted smartcore estimator. The `kind` tag in the serialized artifact
/// names the concrete algorithm.
#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", content = "params")]
pub enum Estimator {
    LinearRegression(LinearModel),
    RidgeRegression(RidgeModel),
    RandomForestRegressor(ForestModel),
}

impl Estimator {
    pub fn kind(&self) -> &'static str {
        match self {
            Estimator::LinearRegression(_) => "LinearRegression",
            Estimator::RidgeRegression(_) => "RidgeRegression",
            Estimator::RandomForestRegressor(_) => "RandomForestRegressor",
        }
    }
}

/// Model artifact: a smartcore regressor plus the input width it was fitted on.
///
/// On disk this is plain JSON:
/// `{"n_features": 3, "estimator": {"kind": "RandomForestRegressor", "params": {..}}}`
#[derive(Serialize, Deserialize)]
pub struct SmartCoreRegressor {
    n_features: usize,
    estimator: Estimator,
}

impl SmartCoreRegressor {
    pub fn new(estimator: Estimator, n_features: usize) -> Self {
        Self {
            n_features,
            estimator,
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ArtifactError> {
        let file = File::open(path)?;
        let artifact = serde_json::from_reader(BufReader::new(file))?;
        Ok(artifact)
    }

    pub fn write_to(&self, path: &Path) -> Result<(), ArtifactError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }
}

impl FareRegressor for SmartCoreRegressor {
    fn predict(&self, row: &[f64]) -> Result<f64, PredictionError> {
        if row.len() != self.n_features {
            return Err(PredictionError::ShapeMismatch {
                expected: self.n_features,
                actual: row.len(),
            });
        }

        let input = DenseMatrix::from_2d_vec(&vec![row.to_vec()]).map_err(|e| {
            PredictionError::Inference {
                reason: format!("matrix creation failed: {}", e),
            }
        })?;

        let output = match &self.estimator {
            Estimator::LinearRegression(model) => model.predict(&input),
            Estimator::RidgeRegression(model) => model.predict(&input),
            Estimator::RandomForestRegressor(model) => model.predict(&input),
        }
        .map_err(|e| PredictionError::Inference {
            reason: e.to_string(),
        })?;

        output.first().copied().ok_or(PredictionError::EmptyOutput)
    }

    fn n_features(&self) -> Option<usize> {
        Some(self.n_features)
    }

    fn name(&self) -> &str {
        self.estimator.kind()
    }
}
