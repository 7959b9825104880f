pub mod holiday;
pub mod long_weekend;

pub use holiday::*;
pub use long_weekend::*;
