// Model loading and inference
pub mod ml;

// Fare prediction with baseline fallback
pub mod prediction_service;

// Dataset statistics and sampling
pub mod dataset_insight;
