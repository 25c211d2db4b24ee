//! A complete "is it worth the time?" question, as the user states it.
//!
//! A [`Scenario`] holds the five raw `(value, unit)` answers. It validates
//! them at the boundary, normalizes them on a [`WorkCalendar`], runs the
//! evaluator and renders a [`Report`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar::WorkCalendar;
use crate::error::{Result, ValidationError};
use crate::evaluate::{is_it_worth_it, Evaluation};
use crate::format::format_gain_ratio;
use crate::units::{FrequencyUnit, TimeUnit, UnitValue};

/// "I have a recurring task that takes `task_duration`, that I do
/// `task_frequency` for `task_lifetime`. If I spent `time_spent` I could
/// shorten it by `time_shaved`."
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default = "default_task_duration")]
    pub task_duration: UnitValue<TimeUnit>,
    #[serde(default = "default_task_frequency")]
    pub task_frequency: UnitValue<FrequencyUnit>,
    #[serde(default = "default_task_lifetime")]
    pub task_lifetime: UnitValue<TimeUnit>,
    #[serde(default = "default_time_spent")]
    pub time_spent: UnitValue<TimeUnit>,
    #[serde(default = "default_time_shaved")]
    pub time_shaved: UnitValue<TimeUnit>,
}

fn default_task_duration() -> UnitValue<TimeUnit> {
    UnitValue::new(3.0, TimeUnit::Minute)
}
fn default_task_frequency() -> UnitValue<FrequencyUnit> {
    UnitValue::new(10.0, FrequencyUnit::Daily)
}
fn default_task_lifetime() -> UnitValue<TimeUnit> {
    UnitValue::new(1.0, TimeUnit::Month)
}
fn default_time_spent() -> UnitValue<TimeUnit> {
    UnitValue::new(1.0, TimeUnit::Hour)
}
fn default_time_shaved() -> UnitValue<TimeUnit> {
    UnitValue::new(2.0, TimeUnit::Minute)
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            task_duration: default_task_duration(),
            task_frequency: default_task_frequency(),
            task_lifetime: default_task_lifetime(),
            time_spent: default_time_spent(),
            time_shaved: default_time_shaved(),
        }
    }
}

fn check_magnitude(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
            value,
        });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

/// Reject precisions the decomposer is not defined for.
pub fn validate_precision(precision: f64) -> Result<f64, ValidationError> {
    if precision.is_finite() && precision >= 0.0 {
        Ok(precision)
    } else {
        Err(ValidationError::InvalidPrecision(precision))
    }
}

impl Scenario {
    /// Check every magnitude is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_magnitude("task_duration", self.task_duration.value)?;
        check_magnitude("task_frequency", self.task_frequency.value)?;
        check_magnitude("task_lifetime", self.task_lifetime.value)?;
        check_magnitude("time_spent", self.time_spent.value)?;
        check_magnitude("time_shaved", self.time_shaved.value)?;
        Ok(())
    }

    /// Validate, normalize on `calendar` and evaluate.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any magnitude is negative or not finite.
    pub fn evaluate(&self, calendar: &WorkCalendar) -> Result<Evaluation> {
        self.validate()?;
        Ok(is_it_worth_it(
            calendar.normalize_duration(self.task_duration),
            calendar.normalize_frequency(self.task_frequency),
            calendar.normalize_duration(self.task_lifetime),
            calendar.normalize_duration(self.time_shaved),
            calendar.normalize_duration(self.time_spent),
        ))
    }

    /// Evaluate and render every duration at `precision`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for invalid magnitudes or precision.
    pub fn report(&self, calendar: &WorkCalendar, precision: f64) -> Result<Report> {
        let precision = validate_precision(precision)?;
        let evaluation = self.evaluate(calendar)?;
        let time_spent = calendar.normalize_duration(self.time_spent);
        Ok(Report {
            answer: if evaluation.worth_it { "YES!" } else { "No..." }.to_string(),
            time_spent: calendar.format_duration(time_spent, precision),
            time_saved: calendar.format_duration(evaluation.time_saved, precision),
            efficiency_factor: format_gain_ratio(evaluation.gain_ratio),
            total_task_time: calendar.format_duration(evaluation.initial_task_time, precision),
            total_optimized_task_time: calendar
                .format_duration(evaluation.optimized_task_time, precision),
            evaluation,
        })
    }
}

/// Human readable answer to a [`Scenario`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// `"YES!"` or `"No..."`.
    pub answer: String,
    pub time_spent: String,
    pub time_saved: String,
    pub efficiency_factor: String,
    pub total_task_time: String,
    pub total_optimized_task_time: String,
    pub evaluation: Evaluation,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.answer)?;
        writeln!(f, "Time spent: {}", self.time_spent)?;
        writeln!(f, "Time saved: {}", self.time_saved)?;
        writeln!(f, "Efficiency factor: {}", self.efficiency_factor)?;
        writeln!(f, "Total time of the task: {}", self.total_task_time)?;
        write!(
            f,
            "Total time of the task, after optimization: {}",
            self.total_optimized_task_time
        )
    }
}
