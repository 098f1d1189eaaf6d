pub mod trend_bands;
pub mod trend_line;
