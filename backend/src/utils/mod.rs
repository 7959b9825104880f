pub mod calendar;
pub mod time;

pub use time::*;
