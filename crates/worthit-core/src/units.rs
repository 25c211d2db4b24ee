//! Time and frequency units, and the `(value, unit)` pair used at every
//! boundary of the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Duration units, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    /// Every unit, smallest first.
    pub const ALL: [TimeUnit; 7] = [
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::Year,
    ];

    /// Every unit, largest first. This is the scan order of the decomposer.
    pub const DESCENDING: [TimeUnit; 7] = [
        TimeUnit::Year,
        TimeUnit::Month,
        TimeUnit::Week,
        TimeUnit::Day,
        TimeUnit::Hour,
        TimeUnit::Minute,
        TimeUnit::Second,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "s" | "sec" | "secs" | "second" | "seconds" => Ok(TimeUnit::Second),
            "min" | "mins" | "minute" | "minutes" => Ok(TimeUnit::Minute),
            "h" | "hr" | "hrs" | "hour" | "hours" => Ok(TimeUnit::Hour),
            "d" | "day" | "days" => Ok(TimeUnit::Day),
            "w" | "wk" | "wks" | "week" | "weeks" => Ok(TimeUnit::Week),
            "mo" | "mon" | "month" | "months" => Ok(TimeUnit::Month),
            "y" | "yr" | "yrs" | "year" | "years" => Ok(TimeUnit::Year),
            _ => Err(ParseError::UnknownTimeUnit(s.trim().to_string())),
        }
    }
}

/// How often a task recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyUnit {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl FrequencyUnit {
    pub const ALL: [FrequencyUnit; 4] = [
        FrequencyUnit::Daily,
        FrequencyUnit::Weekly,
        FrequencyUnit::Monthly,
        FrequencyUnit::Yearly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FrequencyUnit::Daily => "daily",
            FrequencyUnit::Weekly => "weekly",
            FrequencyUnit::Monthly => "monthly",
            FrequencyUnit::Yearly => "yearly",
        }
    }

    /// Label shown after "N times", e.g. "5 times a week".
    pub fn label(self) -> &'static str {
        match self {
            FrequencyUnit::Daily => "a day",
            FrequencyUnit::Weekly => "a week",
            FrequencyUnit::Monthly => "a month",
            FrequencyUnit::Yearly => "a year",
        }
    }

    /// The time unit one occurrence period spans.
    pub fn period(self) -> TimeUnit {
        match self {
            FrequencyUnit::Daily => TimeUnit::Day,
            FrequencyUnit::Weekly => TimeUnit::Week,
            FrequencyUnit::Monthly => TimeUnit::Month,
            FrequencyUnit::Yearly => TimeUnit::Year,
        }
    }
}

impl fmt::Display for FrequencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for FrequencyUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let key = lower
            .strip_prefix("a ")
            .or_else(|| lower.strip_prefix("per "))
            .unwrap_or(&lower)
            .trim();
        match key {
            "daily" | "day" => Ok(FrequencyUnit::Daily),
            "weekly" | "week" => Ok(FrequencyUnit::Weekly),
            "monthly" | "month" => Ok(FrequencyUnit::Monthly),
            "yearly" | "year" => Ok(FrequencyUnit::Yearly),
            _ => Err(ParseError::UnknownFrequencyUnit(s.trim().to_string())),
        }
    }
}

/// A magnitude tagged with its unit.
///
/// Magnitudes are expected to be finite and non-negative. The engine does
/// not check this; see [`crate::Scenario::validate`] for the boundary check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitValue<U> {
    pub value: f64,
    pub unit: U,
}

impl<U> UnitValue<U> {
    pub const fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }
}

impl<U: fmt::Display> fmt::Display for UnitValue<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Parses `"<number> <unit>"`. The separating space is optional
/// (`"90min"` works) and the unit accepts the aliases of `U::from_str`.
impl<U> FromStr for UnitValue<U>
where
    U: FromStr<Err = ParseError>,
{
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| c.is_alphabetic() || c.is_whitespace())
            .ok_or_else(|| ParseError::Malformed(s.to_string()))?;
        let (number, unit) = s.split_at(split);
        let (number, unit) = (number.trim(), unit.trim());
        if number.is_empty() || unit.is_empty() {
            return Err(ParseError::Malformed(s.to_string()));
        }
        let value = number
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidNumber(number.to_string()))?;
        Ok(Self {
            value,
            unit: unit.parse()?,
        })
    }
}
