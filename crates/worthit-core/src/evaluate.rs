//! Break-even evaluation of a one-time optimization of a recurring task.

use serde::Serialize;
use tracing::debug;

/// Outcome of [`is_it_worth_it`]. All times are in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    /// `time_saved > time_spent`; a tie is not worth it.
    pub worth_it: bool,
    /// Time shaved per occurrence, over every occurrence in the lifetime.
    pub time_saved: f64,
    /// Total time the task costs over its lifetime, unoptimized.
    pub initial_task_time: f64,
    /// Total time the task costs after optimization.
    pub optimized_task_time: f64,
    /// `time_saved / time_spent` as a percentage. Infinite when nothing
    /// is spent (serialized as `null` in JSON).
    pub gain_ratio: f64,
}

/// Compare the time an optimization saves with the time it costs.
///
/// Inputs are normalized: `task_frequency` in occurrences per second, every
/// other argument in seconds.
///
/// The per-occurrence duration is clamped at zero for `optimized_task_time`,
/// but `time_saved` is not: when `time_shaved > task_duration` it reports
/// more savings than the task ever cost.
pub fn is_it_worth_it(
    task_duration: f64,
    task_frequency: f64,
    task_lifetime: f64,
    time_shaved: f64,
    time_spent: f64,
) -> Evaluation {
    let initial_task_time = task_duration * task_frequency * task_lifetime;
    let optimized_task_time =
        (task_duration - time_shaved).max(0.0) * task_frequency * task_lifetime;

    let time_saved = time_shaved * task_lifetime * task_frequency;
    let worth_it = time_saved > time_spent;
    let gain_ratio = if time_spent == 0.0 {
        f64::INFINITY
    } else {
        (time_saved / time_spent) * 100.0
    };

    debug!(
        initial_task_time,
        optimized_task_time, time_saved, time_spent, worth_it, "evaluated optimization"
    );

    Evaluation {
        worth_it,
        time_saved,
        initial_task_time,
        optimized_task_time,
        gain_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{normalize_duration, normalize_frequency};
    use crate::units::{FrequencyUnit, TimeUnit, UnitValue};

    fn norm(value: f64, unit: TimeUnit) -> f64 {
        normalize_duration(UnitValue::new(value, unit))
    }

    #[test]
    fn default_example() {
        let task_duration = norm(3.0, TimeUnit::Minute);
        let task_frequency = normalize_frequency(UnitValue::new(5.0, FrequencyUnit::Daily));
        let task_lifetime = norm(1.0, TimeUnit::Year);
        let time_shaved = norm(1.0, TimeUnit::Minute);
        let time_spent = norm(1.0, TimeUnit::Day);

        let initial = task_duration * task_lifetime * task_frequency;
        let optimized = (task_duration - time_shaved) * task_lifetime * task_frequency;
        let saved = initial - optimized;

        let eval = is_it_worth_it(task_duration, task_frequency, task_lifetime, time_shaved, time_spent);
        assert!(eval.worth_it);
        assert!((eval.initial_task_time - initial).abs() < 1e-6);
        assert!((eval.optimized_task_time - optimized).abs() < 1e-6);
        assert!((eval.time_saved - saved).abs() < 1e-6);
        assert!((eval.gain_ratio - saved / time_spent * 100.0).abs() < 1e-6);
    }

    #[test]
    fn reducing_task_to_zero() {
        let eval = is_it_worth_it(
            norm(3.0, TimeUnit::Minute),
            normalize_frequency(UnitValue::new(5.0, FrequencyUnit::Daily)),
            norm(1.0, TimeUnit::Year),
            norm(3.0, TimeUnit::Minute),
            norm(1.0, TimeUnit::Day),
        );
        assert_eq!(
            eval,
            Evaluation {
                worth_it: true,
                time_saved: 226_800.0,
                initial_task_time: 226_800.0,
                optimized_task_time: 0.0,
                gain_ratio: 900.0,
            }
        );
    }

    #[test]
    fn nothing_shaved_is_never_worth_it() {
        let eval = is_it_worth_it(600.0, 1e-4, 1e7, 0.0, 1.0);
        assert!(!eval.worth_it);
        assert_eq!(eval.time_saved, 0.0);
        assert_eq!(eval.gain_ratio, 0.0);
        assert_eq!(eval.initial_task_time, eval.optimized_task_time);
    }

    #[test]
    fn nothing_spent_is_infinite_gain() {
        let eval = is_it_worth_it(600.0, 1e-4, 1e7, 60.0, 0.0);
        assert_eq!(eval.gain_ratio, f64::INFINITY);
        assert!(eval.worth_it);

        let eval = is_it_worth_it(600.0, 1e-4, 1e7, 0.0, 0.0);
        assert_eq!(eval.gain_ratio, f64::INFINITY);
        assert!(!eval.worth_it);
    }

    #[test]
    fn tie_is_not_worth_it() {
        // 1 occurrence per second for 10 seconds, 2 seconds shaved each time.
        let eval = is_it_worth_it(5.0, 1.0, 10.0, 2.0, 20.0);
        assert_eq!(eval.time_saved, 20.0);
        assert!(!eval.worth_it);
        assert_eq!(eval.gain_ratio, 100.0);
    }

    #[test]
    fn shaving_more_than_the_task_overstates_savings() {
        let eval = is_it_worth_it(60.0, 1.0, 10.0, 90.0, 100.0);
        assert_eq!(eval.optimized_task_time, 0.0);
        assert_eq!(eval.initial_task_time, 600.0);
        assert_eq!(eval.time_saved, 900.0);
        assert!(eval.time_saved > eval.initial_task_time - eval.optimized_task_time);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let eval = is_it_worth_it(5.0, 1.0, 10.0, 2.0, 0.0);
        let json = serde_json::to_value(eval).unwrap();
        assert_eq!(json["worthIt"], true);
        assert_eq!(json["timeSaved"], 20.0);
        assert_eq!(json["initialTaskTime"], 50.0);
        assert_eq!(json["optimizedTaskTime"], 30.0);
        assert!(json["gainRatio"].is_null());
    }
}
