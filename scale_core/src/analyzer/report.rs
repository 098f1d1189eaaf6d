use serde::Serialize;

use crate::common::{enums::TrendDirection, time::Day};

/// Summary of an analyzed weight history
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub entry_count: usize,
    pub day_count: usize,
    pub first_day: Option<Day>,
    pub last_day: Option<Day>,
    pub latest_average: Option<f64>,
    pub min_average: Option<f64>,
    pub max_average: Option<f64>,
    pub mean_average: Option<f64>,
    pub direction: TrendDirection,
    pub bands_available: bool,
}
