//! HTTP request handlers

use super::error::ApiError;
use super::responses::{HealthResponse, ModelInfoResponse, SampleResponse, StatsResponse};
use super::state::AppState;
use crate::application::dataset_insight::{DEFAULT_SAMPLE_SIZE, parse_sample_size};
use crate::domain::dataset::DatasetView;
use crate::domain::fare::{PredictRequest, PredictResponse};
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use serde::Deserialize;
use tracing::{debug, warn};
use validator::Validate;

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model_loaded: state.prediction.registry().is_loaded(),
    })
}

pub async fn model_info(State(state): State<AppState>) -> Json<ModelInfoResponse> {
    let registry = state.prediction.registry();
    let metadata = registry.metadata();

    Json(ModelInfoResponse {
        model_loaded: registry.is_loaded(),
        model_name: registry.model_name().map(str::to_string),
        trained_at: metadata.and_then(|m| m.trained_at.clone()),
        mae: metadata.and_then(|m| m.mae),
        features: metadata.and_then(|m| m.features.clone()),
        has_cleaned_data: state.insight.has_data(),
    })
}

pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(request) = payload.inspect_err(|e| debug!("Rejected predict body: {}", e))?;
    request.validate()?;

    let response = state.prediction.handle(&request);
    state.metrics.record_prediction(&response);
    Ok(Json(response))
}

pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let insight = state.insight.clone();
    let view = tokio::task::spawn_blocking(move || insight.describe())
        .await
        .unwrap_or_else(|e| {
            warn!("Dataset describe task failed: {}", e);
            DatasetView::unavailable(format!("dataset task failed: {}", e))
        });
    Json(view.into())
}

/// `n` stays raw text so integers beyond the `i64` range still clamp
/// instead of failing deserialization.
#[derive(Debug, Deserialize)]
pub struct SampleQuery {
    pub n: Option<String>,
}

pub async fn data_sample(
    State(state): State<AppState>,
    query: Result<Query<SampleQuery>, QueryRejection>,
) -> Result<Json<SampleResponse>, ApiError> {
    let Query(query) = query?;
    let n = match query.n.as_deref() {
        None => DEFAULT_SAMPLE_SIZE,
        Some(raw) => parse_sample_size(raw)
            .ok_or_else(|| ApiError::InvalidQuery(format!("n must be an integer, got {:?}", raw)))?,
    };

    let insight = state.insight.clone();
    let view = tokio::task::spawn_blocking(move || insight.sample(n))
        .await
        .unwrap_or_else(|e| {
            warn!("Dataset sample task failed: {}", e);
            DatasetView::unavailable(format!("dataset task failed: {}", e))
        });
    Ok(Json(view.into()))
}

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
