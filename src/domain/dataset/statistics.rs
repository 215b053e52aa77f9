use crate::domain::fare::round2;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Per-column summary: count, mean, sample standard deviation, min,
/// quartiles and max, each rounded to two decimals.
///
/// Values that cannot be computed (empty column, std of a single value) are
/// `None` and serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    #[serde(rename = "25%")]
    pub p25: Option<f64>,
    #[serde(rename = "50%")]
    pub p50: Option<f64>,
    #[serde(rename = "75%")]
    pub p75: Option<f64>,
    pub max: Option<f64>,
}

impl ColumnStats {
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                count: 0,
                mean: None,
                std: None,
                min: None,
                p25: None,
                p50: None,
                p75: None,
                max: None,
            };
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        Self {
            count: values.len(),
            mean: rounded(values.iter().mean()),
            // statrs uses the n-1 (sample) denominator; NaN for a single value
            std: rounded(values.iter().std_dev()),
            min: rounded(Statistics::min(values.iter())),
            p25: rounded(quantile(&sorted, 0.25)),
            p50: rounded(quantile(&sorted, 0.50)),
            p75: rounded(quantile(&sorted, 0.75)),
            max: rounded(Statistics::max(values.iter())),
        }
    }
}

fn rounded(value: f64) -> Option<f64> {
    value.is_finite().then(|| round2(value))
}

/// Quantile with linear interpolation between closest ranks.
/// `sorted` must be ascending and non-empty.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}
