pub mod common;
pub mod config;
pub mod holidays;
pub mod inspiration;
pub mod long_weekends;
