//! Cleaned trip dataset: records, per-column statistics and the
//! available/unavailable result wrapper used by the insight service.

pub mod statistics;

pub use statistics::ColumnStats;

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Columns the insight service reports on, in report order.
pub const TRACKED_COLUMNS: &[&str] = &["distance_km", "duration_min", "passenger_count", "fare"];

/// One row of the cleaned dataset. Empty or non-numeric cells are missing
/// values and are left out of the statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub distance_km: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub duration_min: Option<f64>,
    #[serde(
        default,
        deserialize_with = "csv::invalid_option",
        serialize_with = "serialize_whole_number"
    )]
    pub passenger_count: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub fare: Option<f64>,
}

impl TripRecord {
    pub fn column(&self, name: &str) -> Option<f64> {
        match name {
            "distance_km" => self.distance_km,
            "duration_min" => self.duration_min,
            "passenger_count" => self.passenger_count,
            "fare" => self.fare,
            _ => None,
        }
    }
}

/// Writes integral values as JSON integers, so counts read as `1` not `1.0`.
fn serialize_whole_number<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0;
    match *value {
        Some(v) if v.fract() == 0.0 && v.abs() <= EXACT_INT_LIMIT => {
            serializer.serialize_some(&(v as i64))
        }
        _ => value.serialize(serializer),
    }
}

/// Descriptive statistics over the tracked columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub rows: usize,
    pub columns: Vec<String>,
    pub describe: BTreeMap<String, ColumnStats>,
}

impl DatasetSummary {
    pub fn from_records(records: &[TripRecord]) -> Self {
        let describe = TRACKED_COLUMNS
            .iter()
            .map(|&column| {
                let values: Vec<f64> = records.iter().filter_map(|r| r.column(column)).collect();
                (column.to_string(), ColumnStats::from_values(&values))
            })
            .collect();

        Self {
            rows: records.len(),
            columns: TRACKED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            describe,
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnStats> {
        self.describe.get(name)
    }
}

/// Result of a dataset query: either the data, or an explicit "no data"
/// indicator explaining why.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetView<T> {
    Available(T),
    Unavailable { note: String },
}

impl<T> DatasetView<T> {
    pub fn unavailable(note: impl Into<String>) -> Self {
        DatasetView::Unavailable { note: note.into() }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, DatasetView::Available(_))
    }

    pub fn available(&self) -> Option<&T> {
        match self {
            DatasetView::Available(value) => Some(value),
            DatasetView::Unavailable { .. } => None,
        }
    }

    pub fn note(&self) -> Option<&str> {
        match self {
            DatasetView::Available(_) => None,
            DatasetView::Unavailable { note } => Some(note),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(distance: f64, duration: f64, passengers: f64, fare: f64) -> TripRecord {
        TripRecord {
            distance_km: Some(distance),
            duration_min: Some(duration),
            passenger_count: Some(passengers),
            fare: Some(fare),
        }
    }

    #[test]
    fn test_summary_of_small_fixture() {
        let records = vec![
            record(1.0, 5.0, 1.0, 5.8),
            record(2.0, 10.0, 2.0, 10.1),
            record(3.0, 15.0, 1.0, 14.4),
        ];
        let summary = DatasetSummary::from_records(&records);

        assert_eq!(summary.rows, 3);
        assert_eq!(summary.columns, TRACKED_COLUMNS);

        let distance = summary.column("distance_km").unwrap();
        assert_eq!(distance.count, 3);
        assert_eq!(distance.mean, Some(2.0));
        assert_eq!(distance.min, Some(1.0));
        assert_eq!(distance.max, Some(3.0));

        let fare = summary.column("fare").unwrap();
        assert_eq!(fare.mean, Some(10.1));
        assert_eq!(fare.min, Some(5.8));
        assert_eq!(fare.max, Some(14.4));
    }

    #[test]
    fn test_missing_cells_reduce_column_count_only() {
        let mut sparse = record(4.0, 12.0, 1.0, 13.0);
        sparse.fare = None;
        let records = vec![record(2.0, 6.0, 1.0, 9.0), sparse];
        let summary = DatasetSummary::from_records(&records);

        assert_eq!(summary.rows, 2);
        assert_eq!(summary.column("distance_km").unwrap().count, 2);
        assert_eq!(summary.column("fare").unwrap().count, 1);
    }

    #[test]
    fn test_passenger_count_serializes_as_integer() {
        let json = serde_json::to_value(record(1.5, 6.0, 2.0, 8.2)).unwrap();
        assert_eq!(json["passenger_count"], serde_json::json!(2));
        assert!(json["passenger_count"].is_u64());
        assert_eq!(json["distance_km"], serde_json::json!(1.5));

        let mut odd = record(1.0, 1.0, 1.5, 5.0);
        assert_eq!(serde_json::to_value(&odd).unwrap()["passenger_count"], serde_json::json!(1.5));
        odd.passenger_count = None;
        assert!(serde_json::to_value(&odd).unwrap()["passenger_count"].is_null());
    }

    #[test]
    fn test_view_accessors() {
        let view: DatasetView<usize> = DatasetView::unavailable("no data");
        assert!(!view.is_available());
        assert_eq!(view.note(), Some("no data"));
        assert!(view.available().is_none());

        let view = DatasetView::Available(3usize);
        assert_eq!(view.available(), Some(&3));
        assert!(view.note().is_none());
    }
}
