pub mod daily_average;
pub mod daily_list;
