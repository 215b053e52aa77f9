// Fare request/response types and baseline tariff
pub mod fare;

// Model metadata and feature layout
pub mod ml;

// Cleaned trip dataset
pub mod dataset;

// Domain-specific error types
pub mod errors;
