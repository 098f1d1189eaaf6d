pub mod trend_settings;
