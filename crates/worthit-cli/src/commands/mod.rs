pub mod config;
pub mod evaluate;
pub mod format;
pub mod normalize;
pub mod units;
