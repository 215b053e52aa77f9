pub mod dataset_csv;
pub mod metadata_store;

pub use dataset_csv::CsvDatasetReader;
pub use metadata_store::MetadataStore;
