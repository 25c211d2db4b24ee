//! Greedy decomposition of a second count into a mix of units.
//!
//! The inverse of normalization, and lossy: the decomposer stops as soon as
//! the part it has not yet expressed is negligible at the requested
//! precision.

use tracing::trace;

use crate::calendar::WorkCalendar;
use crate::units::{TimeUnit, UnitValue};

/// Remainders at or below this many seconds count as exact.
pub const REMAINDER_EPSILON: f64 = 1e-9;

/// Relative distance, as a fraction of the duration, within which a
/// duration counts as a whole number of units.
///
/// Normalized products can land a few ulps short of a whole unit
/// (`1979.9999999999998` for 33 minutes). Such a duration still selects
/// the unit and rounds its count up, and the remainder is clamped at zero.
/// Whole-second inputs are never this close to a unit boundary without
/// being on it.
pub const WHOLE_UNIT_EPSILON: f64 = 1e-12;

/// Whether `duration` is `units_seconds` up to [`WHOLE_UNIT_EPSILON`].
fn is_whole(duration: f64, units_seconds: f64) -> bool {
    (units_seconds - duration).abs() <= duration.abs() * WHOLE_UNIT_EPSILON
}

impl WorkCalendar {
    /// Decompose `duration` seconds into terms, largest unit first.
    ///
    /// `precision` is the accepted relative error: `0.0` decomposes down to
    /// the second, anything `>= 1.0` yields no terms at all. After each
    /// term the precision is rescaled by `duration / remainder`, so a
    /// remainder that is small next to the whole quickly becomes
    /// negligible. Durations under one second decompose to nothing.
    pub fn decompose_duration(&self, duration: f64, precision: f64) -> Vec<UnitValue<TimeUnit>> {
        let mut terms = Vec::new();
        self.decompose_into(duration, precision, &mut terms);
        terms
    }

    fn decompose_into(&self, duration: f64, precision: f64, terms: &mut Vec<UnitValue<TimeUnit>>) {
        if precision >= 1.0 {
            return;
        }

        let Some((unit, unit_seconds)) = self
            .table()
            .into_iter()
            .find(|&(_, seconds)| duration >= seconds || is_whole(duration, seconds))
        else {
            return;
        };

        let ratio = duration / unit_seconds;
        let nearest = ratio.round();
        let count = if nearest > ratio && is_whole(duration, nearest * unit_seconds) {
            nearest
        } else {
            ratio.floor()
        };
        let rest = (duration - count * unit_seconds).max(0.0);
        terms.push(UnitValue::new(count, unit));

        if rest <= REMAINDER_EPSILON {
            return;
        }

        let rest_precision = precision * duration / rest;
        trace!(%unit, count, rest, rest_precision, "decomposing remainder");
        self.decompose_into(rest, rest_precision, terms);
    }
}

/// [`WorkCalendar::decompose_duration`] on the standard calendar.
pub fn decompose_duration(duration: f64, precision: f64) -> Vec<UnitValue<TimeUnit>> {
    WorkCalendar::STANDARD.decompose_duration(duration, precision)
}
