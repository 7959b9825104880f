pub mod holiday_source;
pub mod inspiration;
pub mod long_weekend;
