//! Display strings for durations and gain ratios.

use crate::calendar::WorkCalendar;

/// Default relative precision for displayed durations (5%).
pub const DEFAULT_PRECISION: f64 = 0.05;

impl WorkCalendar {
    /// Render `duration` seconds as `"<n> <unit>, <n> <unit>, ..."`.
    pub fn format_duration(&self, duration: f64, precision: f64) -> String {
        self.decompose_duration(duration, precision)
            .iter()
            .map(|term| format!("{} {}", term.value, term.unit))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Human readable duration on the standard calendar.
///
/// Returns an empty string when nothing survives decomposition (zero,
/// under a second, or `precision >= 1`).
pub fn format_duration(duration: f64, precision: f64) -> String {
    WorkCalendar::STANDARD.format_duration(duration, precision)
}

/// Render a gain ratio percentage, `∞%` when nothing was spent.
///
/// Halves round up (`50.5` renders `51%`).
pub fn format_gain_ratio(gain_ratio: f64) -> String {
    if gain_ratio == f64::INFINITY {
        "∞%".to_string()
    } else {
        format!("{:.0}%", gain_ratio.round())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose::decompose_duration;

    #[test]
    fn joins_terms_with_comma_space() {
        let duration = 11.0 * 529_200.0 + 126_000.0 + 3600.0;
        assert_eq!(format_duration(duration, DEFAULT_PRECISION), "11 month, 1 week");
        assert_eq!(format_duration(duration, 0.0), "11 month, 1 week, 1 hour");
    }

    #[test]
    fn matches_joined_decomposition() {
        for duration in [0.0, 59.0, 3661.0, 226_800.0, 7_034_461.0] {
            let joined = decompose_duration(duration, DEFAULT_PRECISION)
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            assert_eq!(format_duration(duration, DEFAULT_PRECISION), joined);
        }
    }

    #[test]
    fn empty_decomposition_is_empty_string() {
        assert_eq!(format_duration(0.0, DEFAULT_PRECISION), "");
        assert_eq!(format_duration(100.0, 1.0), "");
    }

    #[test]
    fn one_workday_of_seconds() {
        assert_eq!(format_duration(25_200.0, DEFAULT_PRECISION), "1 day");
    }

    #[test]
    fn gain_ratio_rendering() {
        assert_eq!(format_gain_ratio(f64::INFINITY), "∞%");
        assert_eq!(format_gain_ratio(900.0), "900%");
        assert_eq!(format_gain_ratio(33.333), "33%");
        assert_eq!(format_gain_ratio(0.0), "0%");
    }

    #[test]
    fn gain_ratio_halves_round_up() {
        assert_eq!(format_gain_ratio(50.5), "51%");
        assert_eq!(format_gain_ratio(2.5), "3%");
        assert_eq!(format_gain_ratio(49.49), "49%");
    }
}
