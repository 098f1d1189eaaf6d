use serde::{Deserialize, Serialize};

use crate::common::time::Day;
use crate::entry::entry::Entry;

/// Average of all measurements recorded on one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyAverage {
    pub day: Day,
    pub value: f64,
    pub count: usize,
}

impl DailyAverage {
    pub fn new(entry: &Entry) -> Self {
        Self {
            day: entry.day(),
            value: entry.value,
            count: 1,
        }
    }

    /// Fold another same-day measurement into the running mean
    pub fn add(&mut self, entry: &Entry) {
        let total = self.value * self.count as f64 + entry.value;
        self.count += 1;
        self.value = total / self.count as f64;
    }
}
