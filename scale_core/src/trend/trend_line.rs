/// Days of history required before any line starts
pub const WARMUP_DAYS: usize = 7;
/// Days averaged into the starting value
pub const SEED_DAYS: usize = 6;

/// Day-aligned series, None while the warm-up is incomplete
pub type TrendSeries = Vec<Option<f64>>;

/// Resolved calculator inputs, only built once a goal is set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendParams {
    pub weight_goal: f64,
    pub loss_rate: f64,
    pub buffer_value: f64,
    pub carb_fat_ratio: f64,
}

fn seed_value(values: &[f64]) -> f64 {
    values[..SEED_DAYS].iter().sum::<f64>() / SEED_DAYS as f64
}

/// Lower guide line: starts half a buffer below the six-day mean,
/// then decays toward the goal
pub fn calculate_floor_line(values: &[f64], params: &TrendParams) -> TrendSeries {
    if values.len() < WARMUP_DAYS {
        return Vec::new();
    }

    let start_value = seed_value(values);
    let mut result: TrendSeries = vec![None; SEED_DAYS];

    let mut floor = start_value - start_value * params.buffer_value * 0.5;
    result.push(Some(floor));

    for _ in WARMUP_DAYS..values.len() {
        floor -= (floor - params.weight_goal) * params.loss_rate;
        result.push(Some(floor));
    }
    result
}

/// Upper guide line: starts half a buffer above the six-day mean,
/// then decays toward a goal inflated by one buffer
pub fn calculate_ceiling_line(values: &[f64], params: &TrendParams) -> TrendSeries {
    if values.len() < WARMUP_DAYS {
        return Vec::new();
    }

    let start_value = seed_value(values);
    let adjusted_goal = params.weight_goal + params.weight_goal * params.buffer_value;
    let mut result: TrendSeries = vec![None; SEED_DAYS];

    let mut ceiling = start_value + start_value * params.buffer_value * 0.5;
    result.push(Some(ceiling));

    for _ in WARMUP_DAYS..values.len() {
        ceiling -= (ceiling - adjusted_goal) * params.loss_rate * params.carb_fat_ratio;
        result.push(Some(ceiling));
    }
    result
}

/// Midpoint of floor and ceiling, None wherever either side is missing
pub fn calculate_ideal_line(floor: &TrendSeries, ceiling: &TrendSeries) -> TrendSeries {
    if floor.len() != ceiling.len() {
        return Vec::new();
    }

    floor
        .iter()
        .zip(ceiling.iter())
        .map(|(f, c)| match (f, c) {
            (Some(f), Some(c)) => Some((f + c) / 2.0),
            _ => None,
        })
        .collect()
}
