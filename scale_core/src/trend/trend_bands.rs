use serde::{Deserialize, Serialize};

use crate::config::trend_settings::TrendSettings;

use super::trend_line::{
    calculate_ceiling_line, calculate_floor_line, calculate_ideal_line, TrendSeries,
};

/// Floor, ceiling and ideal series aligned with the daily averages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendBands {
    pub floor: TrendSeries,
    pub ceiling: TrendSeries,
    pub ideal: TrendSeries,
}

impl TrendBands {
    /// None while no weight goal is configured
    pub fn compute(values: &[f64], settings: &TrendSettings) -> Option<Self> {
        let params = settings.params()?;
        let floor = calculate_floor_line(values, &params);
        let ceiling = calculate_ceiling_line(values, &params);
        let ideal = calculate_ideal_line(&floor, &ceiling);
        Some(Self {
            floor,
            ceiling,
            ideal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(weight_goal: Option<f64>) -> TrendSettings {
        TrendSettings {
            weight_goal,
            ..TrendSettings::default()
        }
    }

    #[test]
    fn test_compute_without_goal() {
        let values = vec![100.0; 10];
        assert!(TrendBands::compute(&values, &settings(None)).is_none());
    }

    #[test]
    fn test_compute_with_goal() {
        let values = vec![100.0; 10];
        let bands = TrendBands::compute(&values, &settings(Some(85.0))).unwrap();

        assert_eq!(bands.floor.len(), 10);
        assert_eq!(bands.ceiling.len(), 10);
        assert_eq!(bands.ideal.len(), 10);
        assert!(bands.floor[6].unwrap() < bands.ideal[6].unwrap());
        assert!(bands.ideal[6].unwrap() < bands.ceiling[6].unwrap());
    }

    #[test]
    fn test_compute_short_history() {
        let values = vec![100.0; 5];
        let bands = TrendBands::compute(&values, &settings(Some(85.0))).unwrap();
        assert!(bands.floor.is_empty());
        assert!(bands.ceiling.is_empty());
        assert!(bands.ideal.is_empty());
    }

    #[test]
    fn test_serializes_nulls() {
        let values = vec![100.0; 7];
        let bands = TrendBands::compute(&values, &settings(Some(85.0))).unwrap();
        let json = serde_json::to_value(&bands).unwrap();
        assert!(json["floor"][0].is_null());
        assert!(json["floor"][6].is_number());
    }
}
