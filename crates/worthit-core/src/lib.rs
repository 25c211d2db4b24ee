//! # worthit Core Library
//!
//! Answers "is it worth the time?" for a recurring task: given how long the
//! task takes, how often it recurs and for how long, and a one-time
//! optimization that costs some time now to shave time off every future
//! occurrence, decide whether the optimization pays off.
//!
//! The library is a set of pure functions. The `worthit` CLI is a thin
//! presentation layer over it.
//!
//! ## Architecture
//!
//! - **Units**: closed [`TimeUnit`] / [`FrequencyUnit`] enums and the
//!   [`UnitValue`] pair
//! - **Calendar**: the fixed [`WorkCalendar`] (7-hour day, 5-day week,
//!   21-day month, 12-month year) and its seconds-per-unit table
//! - **Normalizer**: `(value, unit)` to seconds or occurrences per second
//! - **Decomposer**: seconds back to a greedy, precision-bounded mix of units
//! - **Formatter**: decompositions and gain ratios as display strings
//! - **Evaluator**: the break-even comparison itself
//!
//! ## Key Components
//!
//! - [`normalize_duration`], [`normalize_frequency`], [`format_duration`],
//!   [`is_it_worth_it`]: the engine's public surface
//! - [`Scenario`]: five raw answers, validated and evaluated in one step
//! - [`Config`]: user preferences and default answers

pub mod calendar;
pub mod config;
pub mod decompose;
pub mod error;
pub mod evaluate;
pub mod format;
pub mod normalize;
pub mod scenario;
pub mod units;

pub use calendar::WorkCalendar;
pub use config::{Config, DisplayConfig};
pub use decompose::decompose_duration;
pub use error::{ConfigError, CoreError, ParseError, ValidationError};
pub use evaluate::{is_it_worth_it, Evaluation};
pub use format::{format_duration, format_gain_ratio, DEFAULT_PRECISION};
pub use normalize::{normalize_duration, normalize_frequency};
pub use scenario::{Report, Scenario};
pub use units::{FrequencyUnit, TimeUnit, UnitValue};
