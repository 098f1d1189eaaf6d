pub mod enums;
pub mod func_util;
pub mod scale_error;
pub mod time;
