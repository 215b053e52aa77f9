//! Prometheus counters for prediction outcomes, rendered on `GET /metrics`.

pub mod metrics;

pub use metrics::Metrics;
