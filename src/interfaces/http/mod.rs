//! Thin HTTP boundary over the prediction and dataset services.
//!
//! Request validation happens here; the services behind it only ever see
//! well-formed input.

pub mod error;
pub mod handlers;
pub mod responses;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::Router;
use axum::routing::{get, post};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/model/info", get(handlers::model_info))
        .route("/predict", post(handlers::predict))
        .route("/stats", get(handlers::stats))
        .route("/data/sample", get(handlers::data_sample))
        .route("/metrics", get(handlers::metrics))
        .with_state(state)
}
