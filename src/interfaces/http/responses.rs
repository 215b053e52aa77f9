use crate::domain::dataset::{DatasetSummary, DatasetView, TripRecord};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
}

#[derive(Debug, Serialize)]
pub struct ModelInfoResponse {
    pub model_loaded: bool,
    pub model_name: Option<String>,
    pub trained_at: Option<String>,
    pub mae: Option<f64>,
    pub features: Option<Vec<String>>,
    pub has_cleaned_data: bool,
}

/// `{has_data: true, rows, columns, describe}` or `{has_data: false, note}`
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub has_data: bool,
    #[serde(flatten)]
    pub summary: Option<DatasetSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<DatasetView<DatasetSummary>> for StatsResponse {
    fn from(view: DatasetView<DatasetSummary>) -> Self {
        match view {
            DatasetView::Available(summary) => Self {
                has_data: true,
                summary: Some(summary),
                note: None,
            },
            DatasetView::Unavailable { note } => Self {
                has_data: false,
                summary: None,
                note: Some(note),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SampleResponse {
    pub rows: Vec<TripRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<DatasetView<Vec<TripRecord>>> for SampleResponse {
    fn from(view: DatasetView<Vec<TripRecord>>) -> Self {
        match view {
            DatasetView::Available(rows) => Self { rows, note: None },
            DatasetView::Unavailable { note } => Self {
                rows: Vec::new(),
                note: Some(note),
            },
        }
    }
}
