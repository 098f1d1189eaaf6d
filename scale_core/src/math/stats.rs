/// Round to a fixed number of decimal places
pub fn round_to_decimal_places(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Mean, zero for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median, zero for an empty slice
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Percent change from old to new, zero when old is zero
pub fn percentage_change(old_value: f64, new_value: f64) -> f64 {
    if old_value == 0.0 {
        return 0.0;
    }
    (new_value - old_value) / old_value * 100.0
}

/// Clamp into [min, max]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Linear interpolation from a to b
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Trailing-window averages, the window grows until window_size
pub fn running_average(values: &[f64], window_size: usize) -> Vec<f64> {
    values
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let start = (i + 1).saturating_sub(window_size);
            mean(&values[start..=i])
        })
        .collect()
}

/// Values further than threshold standard deviations from the mean
pub fn find_outliers(values: &[f64], threshold: f64) -> Vec<f64> {
    if values.len() < 3 {
        return Vec::new();
    }

    let avg = mean(values);
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    let std_dev = variance.sqrt();
    if std_dev == 0.0 {
        return Vec::new();
    }

    values
        .iter()
        .copied()
        .filter(|v| (v - avg).abs() > threshold * std_dev)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_decimal_places() {
        assert_eq!(round_to_decimal_places(3.14159, 2), 3.14);
        assert_eq!(round_to_decimal_places(3.14159, 3), 3.142);
        assert_eq!(round_to_decimal_places(3.14159, 0), 3.0);
        assert_eq!(round_to_decimal_places(-3.14159, 2), -3.14);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
        assert_eq!(mean(&[42.0]), 42.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&[5.0, 1.0, 3.0]), 3.0);
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(median(&[10.0, 20.0]), 15.0);
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn test_percentage_change() {
        assert_eq!(percentage_change(100.0, 110.0), 10.0);
        assert_eq!(percentage_change(50.0, 75.0), 50.0);
        assert_eq!(percentage_change(100.0, 90.0), -10.0);
        assert_eq!(percentage_change(0.0, 100.0), 0.0);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(10.0, 20.0, 0.3), 13.0);
        assert_eq!(lerp(-10.0, 10.0, 0.5), 0.0);
    }

    #[test]
    fn test_running_average() {
        assert_eq!(
            running_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 3),
            vec![1.0, 1.5, 2.0, 3.0, 4.0]
        );
        // window larger than the data keeps growing
        assert_eq!(running_average(&[1.0, 2.0, 3.0], 10), vec![1.0, 1.5, 2.0]);
        assert_eq!(running_average(&[], 3), Vec::<f64>::new());
    }

    #[test]
    fn test_find_outliers() {
        let outliers = find_outliers(&[98.0, 99.0, 100.0, 101.0, 102.0, 150.0], 2.0);
        assert_eq!(outliers, vec![150.0]);

        assert!(find_outliers(&[1.0, 2.0, 3.0], 2.0).is_empty());
        assert!(find_outliers(&[1.0, 2.0], 2.0).is_empty());
        assert!(find_outliers(&[5.0, 5.0, 5.0, 5.0], 2.0).is_empty());
    }
}
