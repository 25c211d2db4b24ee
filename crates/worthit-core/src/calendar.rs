//! Work calendar constants.
//!
//! Days, weeks, months and years are *worked* time, not wall-clock time: a
//! day is 7 working hours, a week 5 working days, a month 21 working days.
//! Every conversion in the crate goes through a [`WorkCalendar`] value so the
//! chain from one unit down to seconds lives in one table.

use serde::Serialize;

use crate::units::{FrequencyUnit, TimeUnit};

pub const SECONDS_IN_MINUTE: u32 = 60;
pub const MINUTES_IN_HOUR: u32 = 60;
/// Worked hours per day.
pub const HOURS_IN_DAY: u32 = 7;
/// Worked days per week.
pub const DAYS_IN_WEEK: u32 = 5;
/// Worked days per month.
pub const DAYS_IN_MONTH: u32 = 21;
pub const MONTHS_IN_YEAR: u32 = 12;

/// Immutable set of conversion factors between adjacent units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkCalendar {
    pub seconds_in_minute: u32,
    pub minutes_in_hour: u32,
    pub hours_in_day: u32,
    pub days_in_week: u32,
    pub days_in_month: u32,
    pub months_in_year: u32,
}

impl WorkCalendar {
    /// 7-hour days, 5-day weeks, 21-day months, 12-month years.
    pub const STANDARD: WorkCalendar = WorkCalendar {
        seconds_in_minute: SECONDS_IN_MINUTE,
        minutes_in_hour: MINUTES_IN_HOUR,
        hours_in_day: HOURS_IN_DAY,
        days_in_week: DAYS_IN_WEEK,
        days_in_month: DAYS_IN_MONTH,
        months_in_year: MONTHS_IN_YEAR,
    };

    /// Seconds in one `unit`.
    ///
    /// Weeks and months are both expressed in days; a month is not a whole
    /// number of weeks under this calendar.
    pub fn seconds_per(&self, unit: TimeUnit) -> f64 {
        let minute = self.seconds_in_minute as f64;
        let hour = minute * self.minutes_in_hour as f64;
        let day = hour * self.hours_in_day as f64;
        let month = day * self.days_in_month as f64;
        match unit {
            TimeUnit::Second => 1.0,
            TimeUnit::Minute => minute,
            TimeUnit::Hour => hour,
            TimeUnit::Day => day,
            TimeUnit::Week => day * self.days_in_week as f64,
            TimeUnit::Month => month,
            TimeUnit::Year => month * self.months_in_year as f64,
        }
    }

    /// Length in seconds of the period one frequency unit counts over.
    pub fn seconds_per_period(&self, unit: FrequencyUnit) -> f64 {
        self.seconds_per(unit.period())
    }

    /// `(unit, seconds)` for every unit, largest first.
    pub fn table(&self) -> [(TimeUnit, f64); 7] {
        TimeUnit::DESCENDING.map(|unit| (unit, self.seconds_per(unit)))
    }
}

impl Default for WorkCalendar {
    fn default() -> Self {
        Self::STANDARD
    }
}
