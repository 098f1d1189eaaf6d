use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::common::{
    scale_error::{ErrCode, ScaleError},
    time::Day,
};

/// Upper bound accepted for a single measurement
pub const MAX_WEIGHT: f64 = 1000.0;

/// One raw weight measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub recorded_at: NaiveDateTime,
    pub value: f64,
    pub note: Option<String>,
}

impl Entry {
    pub fn new(
        recorded_at: NaiveDateTime,
        value: f64,
        note: Option<String>,
    ) -> Result<Self, ScaleError> {
        let entry = Self {
            recorded_at,
            value,
            note,
        };
        entry.check()?;
        Ok(entry)
    }

    fn check(&self) -> Result<(), ScaleError> {
        if !self.value.is_finite() {
            return Err(ScaleError::new(
                format!("{} weight={} is not finite", self.recorded_at, self.value),
                ErrCode::ValueNotFinite,
            ));
        }
        if self.value <= 0.0 || self.value > MAX_WEIGHT {
            return Err(ScaleError::new(
                format!(
                    "{} weight={} is outside (0, {}]",
                    self.recorded_at, self.value, MAX_WEIGHT
                ),
                ErrCode::ValueOutOfRange,
            ));
        }
        Ok(())
    }

    /// Calendar day this measurement falls on
    pub fn day(&self) -> Day {
        Day::from_datetime(&self.recorded_at)
    }
}

/// First and last day covered by a set of entries
pub fn date_range(entries: &[Entry]) -> Option<(Day, Day)> {
    let first = entries.iter().map(Entry::day).min()?;
    let last = entries.iter().map(Entry::day).max()?;
    Some((first, last))
}
