use std::ops::Index;

use crate::common::scale_error::{ErrCode, ScaleError};
use crate::entry::entry::Entry;

use super::daily_average::DailyAverage;

/// Day-ordered buckets built from raw entries, one per calendar day
#[derive(Debug, Clone, Default)]
pub struct DailyList {
    pub lst: Vec<DailyAverage>,
}

impl DailyList {
    pub fn new() -> Self {
        Self { lst: Vec::new() }
    }

    /// Build from entries in any order
    pub fn from_entries(entries: &[Entry]) -> Self {
        let mut sorted: Vec<&Entry> = entries.iter().collect();
        sorted.sort_by_key(|e| e.recorded_at);

        let mut list = Self::new();
        for entry in sorted {
            list.fold_or_push(entry);
        }
        list
    }

    /// Add an entry arriving in chronological order
    pub fn add_entry(&mut self, entry: &Entry) -> Result<(), ScaleError> {
        if let Some(last) = self.lst.last() {
            if entry.day() < last.day {
                return Err(ScaleError::new(
                    format!("entry day {} is before last day {}", entry.day(), last.day),
                    ErrCode::TimeNotMonotonous,
                ));
            }
        }
        self.fold_or_push(entry);
        Ok(())
    }

    fn fold_or_push(&mut self, entry: &Entry) {
        match self.lst.last_mut() {
            Some(last) if last.day == entry.day() => last.add(entry),
            _ => self.lst.push(DailyAverage::new(entry)),
        }
    }

    /// Day-ordered average values, the trend line input
    pub fn values(&self) -> Vec<f64> {
        self.lst.iter().map(|d| d.value).collect()
    }

    pub fn last(&self) -> Option<&DailyAverage> {
        self.lst.last()
    }

    pub fn len(&self) -> usize {
        self.lst.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lst.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyAverage> {
        self.lst.iter()
    }
}

impl Index<usize> for DailyList {
    type Output = DailyAverage;

    fn index(&self, index: usize) -> &Self::Output {
        &self.lst[index]
    }
}

/// Collapse entries into one average per recorded day
pub fn aggregate_daily_averages(entries: &[Entry]) -> Vec<DailyAverage> {
    DailyList::from_entries(entries).lst
}
