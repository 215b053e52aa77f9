use crate::domain::dataset::{TRACKED_COLUMNS, TripRecord};
use crate::domain::errors::DatasetError;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Reads the cleaned trip dataset from CSV. Every call opens the file afresh
/// so edits to the backing file are seen without a restart.
#[derive(Debug, Clone)]
pub struct CsvDatasetReader {
    path: PathBuf,
}

impl CsvDatasetReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn read_all(&self) -> Result<Vec<TripRecord>, DatasetError> {
        self.read_rows(None)
    }

    /// First `limit` rows in file order.
    pub fn read_head(&self, limit: usize) -> Result<Vec<TripRecord>, DatasetError> {
        self.read_rows(Some(limit))
    }

    fn read_rows(&self, limit: Option<usize>) -> Result<Vec<TripRecord>, DatasetError> {
        let file = File::open(&self.path)?;
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let headers = rdr.headers()?;
        let missing: Vec<String> = TRACKED_COLUMNS
            .iter()
            .filter(|column| !headers.iter().any(|h| h == **column))
            .map(|column| column.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(DatasetError::MissingColumns(missing));
        }

        let mut records = Vec::new();
        for result in rdr.deserialize() {
            if limit.is_some_and(|limit| records.len() >= limit) {
                break;
            }
            let record: TripRecord = result?;
            records.push(record);
        }
        Ok(records)
    }
}
