use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Direction of a value series, judged by its endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    #[strum(serialize = "increasing")]
    Increasing,
    #[strum(serialize = "decreasing")]
    Decreasing,
    #[strum(serialize = "stable")]
    Stable,
}

impl TrendDirection {
    /// Compare first and last value with a 1% threshold on the first
    pub fn from_values(values: &[f64]) -> Self {
        if values.len() < 2 {
            return Self::Stable;
        }
        let first = values[0];
        let last = values[values.len() - 1];
        let threshold = first.abs() * 0.01;
        if last - first > threshold {
            Self::Increasing
        } else if first - last > threshold {
            Self::Decreasing
        } else {
            Self::Stable
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[strum(serialize = "kg")]
    Kg,
    #[strum(serialize = "lb")]
    Lb,
}

impl Default for WeightUnit {
    fn default() -> Self {
        Self::Kg
    }
}
