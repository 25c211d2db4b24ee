//! Integration tests for the normalize -> evaluate -> format pipeline.

use worthit_core::{
    decompose_duration, format_duration, is_it_worth_it, normalize_duration, normalize_frequency,
    FrequencyUnit, Scenario, TimeUnit, UnitValue, WorkCalendar, DEFAULT_PRECISION,
};

fn norm(value: f64, unit: TimeUnit) -> f64 {
    normalize_duration(UnitValue::new(value, unit))
}

#[test]
fn test_one_year_is_the_chained_work_calendar() {
    assert_eq!(norm(1.0, TimeUnit::Year), (60 * 60 * 7 * 21 * 12) as f64);
}

#[test]
fn test_free_functions_use_standard_calendar() {
    let cal = WorkCalendar::default();
    for unit in TimeUnit::ALL {
        let v = UnitValue::new(2.5, unit);
        assert_eq!(cal.normalize_duration(v), normalize_duration(v));
        assert_eq!(
            cal.decompose_duration(cal.normalize_duration(v), 0.0),
            decompose_duration(normalize_duration(v), 0.0)
        );
    }
    for unit in FrequencyUnit::ALL {
        let v = UnitValue::new(3.0, unit);
        assert_eq!(cal.normalize_frequency(v), normalize_frequency(v));
    }
}

#[test]
fn test_full_pipeline_from_raw_answers() {
    let task_duration = norm(3.0, TimeUnit::Minute);
    let task_frequency = normalize_frequency(UnitValue::new(5.0, FrequencyUnit::Daily));
    let task_lifetime = norm(1.0, TimeUnit::Year);
    let time_shaved = norm(3.0, TimeUnit::Minute);
    let time_spent = norm(1.0, TimeUnit::Day);

    let eval = is_it_worth_it(task_duration, task_frequency, task_lifetime, time_shaved, time_spent);

    assert!(eval.worth_it);
    assert_eq!(eval.time_saved, 226_800.0);
    assert_eq!(eval.initial_task_time, 226_800.0);
    assert_eq!(eval.optimized_task_time, 0.0);
    assert_eq!(eval.gain_ratio, 900.0);

    assert_eq!(format_duration(eval.time_saved, DEFAULT_PRECISION), "1 week, 4 day");
    assert_eq!(format_duration(time_spent, DEFAULT_PRECISION), "1 day");
}

#[test]
fn test_scenario_matches_manual_pipeline() {
    let scenario = Scenario {
        task_duration: UnitValue::new(10.0, TimeUnit::Minute),
        task_frequency: UnitValue::new(2.0, FrequencyUnit::Weekly),
        task_lifetime: UnitValue::new(6.0, TimeUnit::Month),
        time_spent: UnitValue::new(2.0, TimeUnit::Hour),
        time_shaved: UnitValue::new(4.0, TimeUnit::Minute),
    };

    let manual = is_it_worth_it(
        norm(10.0, TimeUnit::Minute),
        normalize_frequency(UnitValue::new(2.0, FrequencyUnit::Weekly)),
        norm(6.0, TimeUnit::Month),
        norm(4.0, TimeUnit::Minute),
        norm(2.0, TimeUnit::Hour),
    );

    assert_eq!(scenario.evaluate(&WorkCalendar::STANDARD).unwrap(), manual);
}

#[test]
fn test_parsed_answers_feed_the_engine() {
    let scenario = Scenario {
        task_duration: "30s".parse().unwrap(),
        task_frequency: "50 a day".parse().unwrap(),
        task_lifetime: "5 years".parse().unwrap(),
        time_spent: "1 week".parse().unwrap(),
        time_shaved: "5 seconds".parse().unwrap(),
    };

    // 50 * 21 * 12 * 5 occurrences, 5 seconds each.
    let eval = scenario.evaluate(&WorkCalendar::STANDARD).unwrap();
    assert!((eval.time_saved - 315_000.0).abs() < 1e-6);
    assert!(eval.worth_it);
}
