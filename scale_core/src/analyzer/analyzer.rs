use tracing::debug;

use crate::common::enums::TrendDirection;
use crate::common::scale_error::ScaleError;
use crate::config::trend_settings::TrendSettings;
use crate::daily::{daily_average::DailyAverage, daily_list::DailyList};
use crate::entry::entry::Entry;
use crate::math::stats::mean;
use crate::trend::trend_bands::TrendBands;

use super::report::Report;

/// Holds the entry history and keeps the daily buckets current
#[derive(Debug, Clone)]
pub struct Analyzer {
    pub daily_list: DailyList,
    entries: Vec<Entry>,
    settings: TrendSettings,
}

impl Analyzer {
    pub fn new(settings: TrendSettings) -> Result<Self, ScaleError> {
        settings.validate()?;
        Ok(Self {
            daily_list: DailyList::new(),
            entries: Vec::new(),
            settings,
        })
    }

    /// Accepts entries in any order; out-of-order days trigger a rebuild
    pub fn add_entry(&mut self, entry: Entry) {
        if let Err(err) = self.daily_list.add_entry(&entry) {
            debug!("{}, rebuilding daily buckets", err);
            self.entries.push(entry);
            self.entries.sort_by_key(|e| e.recorded_at);
            self.daily_list = DailyList::from_entries(&self.entries);
            return;
        }
        self.entries.push(entry);
    }

    pub fn add_entries(&mut self, entries: impl IntoIterator<Item = Entry>) {
        for entry in entries {
            self.add_entry(entry);
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn settings(&self) -> &TrendSettings {
        &self.settings
    }

    pub fn daily_averages(&self) -> &[DailyAverage] {
        &self.daily_list.lst
    }

    /// None while no weight goal is configured
    pub fn trend_bands(&self) -> Option<TrendBands> {
        let bands = TrendBands::compute(&self.daily_list.values(), &self.settings);
        if bands.is_none() {
            debug!("no weight goal set, trend lines unavailable");
        }
        bands
    }

    pub fn report(&self) -> Report {
        let values = self.daily_list.values();
        Report {
            entry_count: self.entries.len(),
            day_count: self.daily_list.len(),
            first_day: self.daily_list.iter().next().map(|d| d.day),
            last_day: self.daily_list.last().map(|d| d.day),
            latest_average: values.last().copied(),
            min_average: values.iter().copied().reduce(f64::min),
            max_average: values.iter().copied().reduce(f64::max),
            mean_average: if values.is_empty() {
                None
            } else {
                Some(mean(&values))
            },
            direction: TrendDirection::from_values(&values),
            bands_available: self.trend_bands().map_or(false, |b| !b.floor.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::time::Day;
    use chrono::NaiveDateTime;

    fn entry(s: &str, value: f64) -> Entry {
        let recorded_at = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
        Entry::new(recorded_at, value, None).unwrap()
    }

    fn ten_day_history() -> Vec<Entry> {
        let values = [100.0, 100.5, 99.5, 100.0, 99.8, 100.2, 99.5, 99.0, 98.5, 98.0];
        values
            .iter()
            .enumerate()
            .map(|(i, v)| entry(&format!("2024-01-{:02} 08:00:00", i + 1), *v))
            .collect()
    }

    fn goal_settings() -> TrendSettings {
        TrendSettings::new(Some(85.0), None, None, None).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_settings() {
        let settings = TrendSettings {
            weight_goal: Some(-1.0),
            ..TrendSettings::default()
        };
        assert!(Analyzer::new(settings).is_err());
    }

    #[test]
    fn test_add_entries_in_order() {
        let mut analyzer = Analyzer::new(goal_settings()).unwrap();
        analyzer.add_entries(ten_day_history());

        assert_eq!(analyzer.entries().len(), 10);
        assert_eq!(analyzer.daily_averages().len(), 10);
        assert_eq!(analyzer.daily_averages()[0].value, 100.0);
    }

    #[test]
    fn test_add_entry_out_of_order_rebuilds() {
        let mut analyzer = Analyzer::new(goal_settings()).unwrap();
        analyzer.add_entry(entry("2024-01-03 08:00:00", 99.0));
        analyzer.add_entry(entry("2024-01-01 08:00:00", 100.0));
        analyzer.add_entry(entry("2024-01-02 08:00:00", 99.5));

        let days: Vec<Day> = analyzer.daily_averages().iter().map(|d| d.day).collect();
        assert_eq!(
            days,
            vec![
                Day::from_str("2024-01-01").unwrap(),
                Day::from_str("2024-01-02").unwrap(),
                Day::from_str("2024-01-03").unwrap(),
            ]
        );
        assert_eq!(analyzer.daily_list.values(), vec![100.0, 99.5, 99.0]);
    }

    #[test]
    fn test_same_day_entries_fold() {
        let mut analyzer = Analyzer::new(goal_settings()).unwrap();
        analyzer.add_entry(entry("2024-01-01 08:00:00", 80.0));
        analyzer.add_entry(entry("2024-01-01 21:00:00", 82.0));

        assert_eq!(analyzer.entries().len(), 2);
        assert_eq!(analyzer.daily_averages().len(), 1);
        assert_eq!(analyzer.daily_averages()[0].value, 81.0);
    }

    #[test]
    fn test_trend_bands_need_goal() {
        let mut analyzer = Analyzer::new(TrendSettings::default()).unwrap();
        analyzer.add_entries(ten_day_history());
        assert!(analyzer.trend_bands().is_none());
    }

    #[test]
    fn test_trend_bands_with_goal() {
        let mut analyzer = Analyzer::new(goal_settings()).unwrap();
        analyzer.add_entries(ten_day_history());

        let bands = analyzer.trend_bands().unwrap();
        assert_eq!(bands.floor.len(), 10);
        assert!((bands.floor[6].unwrap() - 99.625).abs() < 1e-9);
        assert!((bands.ceiling[6].unwrap() - 100.375).abs() < 1e-9);
    }

    #[test]
    fn test_report() {
        let mut analyzer = Analyzer::new(goal_settings()).unwrap();
        analyzer.add_entries(ten_day_history());

        let report = analyzer.report();
        assert_eq!(report.entry_count, 10);
        assert_eq!(report.day_count, 10);
        assert_eq!(report.first_day, Some(Day::from_str("2024-01-01").unwrap()));
        assert_eq!(report.last_day, Some(Day::from_str("2024-01-10").unwrap()));
        assert_eq!(report.latest_average, Some(98.0));
        assert_eq!(report.min_average, Some(98.0));
        assert_eq!(report.max_average, Some(100.5));
        assert_eq!(report.direction, TrendDirection::Decreasing);
        assert!(report.bands_available);
    }

    #[test]
    fn test_report_empty() {
        let analyzer = Analyzer::new(goal_settings()).unwrap();
        let report = analyzer.report();

        assert_eq!(report.entry_count, 0);
        assert_eq!(report.day_count, 0);
        assert_eq!(report.first_day, None);
        assert_eq!(report.latest_average, None);
        assert_eq!(report.direction, TrendDirection::Stable);
        assert!(!report.bands_available);
    }

    #[test]
    fn test_report_short_history_has_no_bands() {
        let mut analyzer = Analyzer::new(goal_settings()).unwrap();
        analyzer.add_entries(ten_day_history().into_iter().take(6));

        let report = analyzer.report();
        assert_eq!(report.day_count, 6);
        assert!(!report.bands_available);
    }
}
