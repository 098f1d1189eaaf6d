use strum_macros::{Display, EnumString};
use thiserror::Error;

/// Error codes for the scale system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[repr(i32)]
pub enum ErrCode {
    // Config errors (0-99)
    #[strum(serialize = "_CONFIG_ERR_BEGIN")]
    ConfigErrBegin = 0,
    #[strum(serialize = "COMMON_ERROR")]
    CommonError = 1,
    #[strum(serialize = "INVALID_PARAMETER")]
    InvalidParameter = 2,
    #[strum(serialize = "UNKNOWN_PARAMETER")]
    UnknownParameter = 3,
    #[strum(serialize = "CONFIG_ERROR")]
    ConfigError = 4,
    #[strum(serialize = "_CONFIG_ERR_END")]
    ConfigErrEnd = 99,

    // Data errors (100-199)
    #[strum(serialize = "_DATA_ERR_BEGIN")]
    DataErrBegin = 100,
    #[strum(serialize = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 101,
    #[strum(serialize = "VALUE_NOT_FINITE")]
    ValueNotFinite = 102,
    #[strum(serialize = "TIME_NOT_MONOTONOUS")]
    TimeNotMonotonous = 103,
    #[strum(serialize = "SRC_DATA_FORMAT_ERROR")]
    SrcDataFormatError = 104,
    #[strum(serialize = "NO_DATA")]
    NoData = 105,
    #[strum(serialize = "_DATA_ERR_END")]
    DataErrEnd = 199,
}

impl ErrCode {
    pub fn is_config_err(&self) -> bool {
        let code = *self as i32;
        code > Self::ConfigErrBegin as i32 && code < Self::ConfigErrEnd as i32
    }

    pub fn is_data_err(&self) -> bool {
        let code = *self as i32;
        code > Self::DataErrBegin as i32 && code < Self::DataErrEnd as i32
    }
}

#[derive(Debug, Error)]
#[error("{errcode}: {msg}")]
pub struct ScaleError {
    pub errcode: ErrCode,
    pub msg: String,
}

impl ScaleError {
    pub fn new(message: impl Into<String>, code: ErrCode) -> Self {
        Self {
            errcode: code,
            msg: message.into(),
        }
    }

    pub fn is_config_err(&self) -> bool {
        self.errcode.is_config_err()
    }

    pub fn is_data_err(&self) -> bool {
        self.errcode.is_data_err()
    }
}
