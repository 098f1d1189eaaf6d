use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::common::scale_error::{ErrCode, ScaleError};
use crate::entry::entry::MAX_WEIGHT;
use crate::trend::trend_line::TrendParams;

pub const DEFAULT_LOSS_RATE: f64 = 0.0055;
pub const DEFAULT_CARB_FAT_RATIO: f64 = 0.6;
pub const DEFAULT_BUFFER_VALUE: f64 = 0.0075;

fn default_loss_rate() -> f64 {
    DEFAULT_LOSS_RATE
}

fn default_carb_fat_ratio() -> f64 {
    DEFAULT_CARB_FAT_RATIO
}

fn default_buffer_value() -> f64 {
    DEFAULT_BUFFER_VALUE
}

/// Trend configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSettings {
    /// Target weight; trend lines stay unavailable while unset
    #[serde(default)]
    pub weight_goal: Option<f64>,

    /// Daily decay of the floor distance to the goal
    #[serde(default = "default_loss_rate")]
    pub loss_rate: f64,

    /// Band width at the start, half above and half below
    #[serde(default = "default_buffer_value")]
    pub buffer_value: f64,

    /// Slows the ceiling decay relative to the floor
    #[serde(default = "default_carb_fat_ratio")]
    pub carb_fat_ratio: f64,
}

impl TrendSettings {
    pub fn new(
        weight_goal: Option<f64>,
        loss_rate: Option<f64>,
        buffer_value: Option<f64>,
        carb_fat_ratio: Option<f64>,
    ) -> Result<Self, ScaleError> {
        let settings = Self {
            weight_goal,
            loss_rate: loss_rate.unwrap_or(DEFAULT_LOSS_RATE),
            buffer_value: buffer_value.unwrap_or(DEFAULT_BUFFER_VALUE),
            carb_fat_ratio: carb_fat_ratio.unwrap_or(DEFAULT_CARB_FAT_RATIO),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Build from a loose key/value map, unknown keys are rejected
    pub fn from_map(conf: Option<HashMap<String, serde_json::Value>>) -> Result<Self, ScaleError> {
        let mut conf = ConfigWithCheck::new(conf.unwrap_or_default());

        let settings = Self::new(
            conf.get_number("weight_goal")?,
            conf.get_number("loss_rate")?,
            conf.get_number("buffer_value")?,
            conf.get_number("carb_fat_ratio")?,
        )?;

        conf.check()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ScaleError> {
        if let Some(goal) = self.weight_goal {
            if !goal.is_finite() || goal <= 0.0 || goal > MAX_WEIGHT {
                return Err(ScaleError::new(
                    format!("weight_goal={} must be in (0, {}]", goal, MAX_WEIGHT),
                    ErrCode::InvalidParameter,
                ));
            }
        }
        check_rate("loss_rate", self.loss_rate)?;
        check_rate("buffer_value", self.buffer_value)?;
        check_rate("carb_fat_ratio", self.carb_fat_ratio)?;
        Ok(())
    }

    /// Resolve into calculator parameters, None while no goal is set
    pub fn params(&self) -> Option<TrendParams> {
        self.weight_goal.map(|weight_goal| TrendParams {
            weight_goal,
            loss_rate: self.loss_rate,
            buffer_value: self.buffer_value,
            carb_fat_ratio: self.carb_fat_ratio,
        })
    }
}

impl Default for TrendSettings {
    fn default() -> Self {
        Self {
            weight_goal: None,
            loss_rate: DEFAULT_LOSS_RATE,
            buffer_value: DEFAULT_BUFFER_VALUE,
            carb_fat_ratio: DEFAULT_CARB_FAT_RATIO,
        }
    }
}

fn check_rate(name: &str, value: f64) -> Result<(), ScaleError> {
    if !value.is_finite() || value <= 0.0 || value >= 1.0 {
        return Err(ScaleError::new(
            format!("{}={} must be in (0, 1)", name, value),
            ErrCode::InvalidParameter,
        ));
    }
    Ok(())
}

/// Tracks consumed keys so leftovers can be flagged
struct ConfigWithCheck {
    conf: HashMap<String, serde_json::Value>,
}

impl ConfigWithCheck {
    fn new(conf: HashMap<String, serde_json::Value>) -> Self {
        Self { conf }
    }

    fn get_number(&mut self, key: &str) -> Result<Option<f64>, ScaleError> {
        match self.conf.remove(key) {
            None => Ok(None),
            Some(serde_json::Value::Null) => Ok(None),
            Some(v) => match v.as_f64() {
                Some(n) => Ok(Some(n)),
                None => Err(ScaleError::new(
                    format!("{} = {} is not a number", key, v),
                    ErrCode::ConfigError,
                )),
            },
        }
    }

    fn check(&self) -> Result<(), ScaleError> {
        if let Some(k) = self.conf.keys().next() {
            return Err(ScaleError::new(
                format!("unknown para = {}", k),
                ErrCode::UnknownParameter,
            ));
        }
        Ok(())
    }
}
