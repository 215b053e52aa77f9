use crate::domain::dataset::{DatasetSummary, DatasetView, TripRecord};
use crate::infrastructure::persistence::CsvDatasetReader;
use std::path::PathBuf;
use tracing::warn;

pub const SAMPLE_MIN: usize = 1;
pub const SAMPLE_MAX: usize = 50;
pub const DEFAULT_SAMPLE_SIZE: i64 = 5;

/// Read-only statistics and row samples over the cleaned dataset.
///
/// Nothing is cached: each call re-reads the file.
#[derive(Debug, Clone)]
pub struct DatasetInsightService {
    reader: CsvDatasetReader,
}

impl DatasetInsightService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            reader: CsvDatasetReader::new(path),
        }
    }

    pub fn has_data(&self) -> bool {
        self.reader.exists()
    }

    pub fn describe(&self) -> DatasetView<DatasetSummary> {
        if !self.reader.exists() {
            return self.missing();
        }
        match self.reader.read_all() {
            Ok(records) => DatasetView::Available(DatasetSummary::from_records(&records)),
            Err(e) => {
                warn!("Cannot describe dataset {:?}: {}", self.reader.path(), e);
                DatasetView::unavailable(e.to_string())
            }
        }
    }

    /// First `n` rows, with `n` clamped to `[SAMPLE_MIN, SAMPLE_MAX]`.
    pub fn sample(&self, n: i64) -> DatasetView<Vec<TripRecord>> {
        if !self.reader.exists() {
            return self.missing();
        }
        match self.reader.read_head(clamp_sample_size(n)) {
            Ok(records) => DatasetView::Available(records),
            Err(e) => {
                warn!("Cannot sample dataset {:?}: {}", self.reader.path(), e);
                DatasetView::unavailable(e.to_string())
            }
        }
    }

    fn missing<T>(&self) -> DatasetView<T> {
        DatasetView::unavailable(format!(
            "cleaned dataset not found: {}",
            self.reader.path().display()
        ))
    }
}

pub fn clamp_sample_size(n: i64) -> usize {
    n.clamp(SAMPLE_MIN as i64, SAMPLE_MAX as i64) as usize
}

/// Parses a caller-supplied sample size. Any optionally signed run of digits
/// is accepted, saturating at the `i64` bounds; anything else is `None`.
pub fn parse_sample_size(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let digits = raw.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match raw.parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) if raw.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}
