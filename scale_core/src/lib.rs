pub mod analyzer;
pub mod common;
pub mod config;
pub mod daily;
pub mod entry;
pub mod math;
pub mod trend;

pub use analyzer::analyzer::Analyzer;
pub use config::trend_settings::TrendSettings;
pub use entry::entry::Entry;
