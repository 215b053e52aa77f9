//! Prometheus metrics definitions for farecast
//!
//! All metrics use the `farecast_` prefix.

use crate::domain::fare::PredictResponse;
use prometheus::{Counter, CounterVec, Gauge, Opts, Registry, TextEncoder};
use std::sync::Arc;

/// Prometheus metrics for the prediction service
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    /// Predictions served, by source (`model` or `baseline`)
    pub predictions_total: CounterVec,
    /// Predictions where the model was consulted but failed
    pub prediction_fallbacks_total: Counter,
    /// Whether a model artifact is loaded (0/1)
    pub model_loaded: Gauge,
}

impl Metrics {
    /// Create a new Metrics instance with all gauges and counters registered
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let predictions_total = CounterVec::new(
            Opts::new("farecast_predictions_total", "Fare predictions served by source"),
            &["source"],
        )?;
        registry.register(Box::new(predictions_total.clone()))?;

        let prediction_fallbacks_total = Counter::with_opts(Opts::new(
            "farecast_prediction_fallbacks_total",
            "Model predictions that failed and were answered by the baseline",
        ))?;
        registry.register(Box::new(prediction_fallbacks_total.clone()))?;

        let model_loaded = Gauge::with_opts(Opts::new(
            "farecast_model_loaded",
            "Model artifact loaded (0=no, 1=yes)",
        ))?;
        registry.register(Box::new(model_loaded.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            predictions_total,
            prediction_fallbacks_total,
            model_loaded,
        })
    }

    /// Render all metrics in Prometheus text format
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder
            .encode_to_string(&metric_families)
            .unwrap_or_default()
    }

    pub fn set_model_loaded(&self, loaded: bool) {
        self.model_loaded.set(if loaded { 1.0 } else { 0.0 });
    }

    /// Count a served prediction by where its value came from
    pub fn record_prediction(&self, response: &PredictResponse) {
        let source = if response.used_model { "model" } else { "baseline" };
        self.predictions_total.with_label_values(&[source]).inc();
        if response.note.is_some() {
            self.prediction_fallbacks_total.inc();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        metrics.set_model_loaded(false);
        assert!(metrics.render().contains("farecast_model_loaded 0"));
    }

    #[test]
    fn test_prediction_counters() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        metrics.set_model_loaded(true);
        metrics.record_prediction(&PredictResponse::from_model(12.0, "RandomForest"));
        metrics.record_prediction(&PredictResponse::from_baseline(31.5));
        metrics.record_prediction(&PredictResponse::fallback(
            31.5,
            Some("RandomForest".to_string()),
            "fallback: boom".to_string(),
        ));

        let output = metrics.render();
        assert!(output.contains("farecast_predictions_total{source=\"model\"} 1"));
        assert!(output.contains("farecast_predictions_total{source=\"baseline\"} 2"));
        assert!(output.contains("farecast_prediction_fallbacks_total 1"));
        assert!(output.contains("farecast_model_loaded 1"));
    }
}
