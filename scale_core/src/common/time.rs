use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::scale_error::{ErrCode, ScaleError};

/// Calendar day a measurement belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Day(NaiveDate);

impl Day {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_str(day_str: &str) -> Result<Self, ScaleError> {
        let date = NaiveDate::parse_from_str(day_str, "%Y-%m-%d").map_err(|e| {
            ScaleError::new(
                format!("invalid day {}: {}", day_str, e),
                ErrCode::SrcDataFormatError,
            )
        })?;
        Ok(Self(date))
    }

    pub fn from_datetime(datetime: &NaiveDateTime) -> Self {
        Self(datetime.date())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn add_days(&self, days: i64) -> Result<Self, ScaleError> {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days as u64))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted.map(Self).ok_or_else(|| {
            ScaleError::new(
                format!("day out of range: {} {:+} days", self, days),
                ErrCode::ValueOutOfRange,
            )
        })
    }

    /// Days from self to other, negative when other is earlier
    pub fn days_between(&self, other: &Day) -> i64 {
        (other.0 - self.0).num_days()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
