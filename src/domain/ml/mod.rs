pub mod feature_registry;
pub mod metadata;

pub use feature_registry::{FEATURE_NAMES, Feature, TripFeatures};
pub use metadata::ModelMetadata;
