//! Unit normalization: `(value, unit)` to a single base number.
//!
//! Durations normalize to seconds, frequencies to occurrences per second.

use crate::calendar::WorkCalendar;
use crate::units::{FrequencyUnit, TimeUnit, UnitValue};

impl WorkCalendar {
    /// Seconds in `duration` under this calendar.
    pub fn normalize_duration(&self, duration: UnitValue<TimeUnit>) -> f64 {
        duration.value * self.seconds_per(duration.unit)
    }

    /// Occurrences per second for `frequency` under this calendar.
    ///
    /// Divides by the period length: "5 weekly" is a lower rate than
    /// "5 daily".
    pub fn normalize_frequency(&self, frequency: UnitValue<FrequencyUnit>) -> f64 {
        frequency.value / self.seconds_per_period(frequency.unit)
    }
}

/// [`WorkCalendar::normalize_duration`] on the standard calendar.
pub fn normalize_duration(duration: UnitValue<TimeUnit>) -> f64 {
    WorkCalendar::STANDARD.normalize_duration(duration)
}

/// [`WorkCalendar::normalize_frequency`] on the standard calendar.
pub fn normalize_frequency(frequency: UnitValue<FrequencyUnit>) -> f64 {
    WorkCalendar::STANDARD.normalize_frequency(frequency)
}
