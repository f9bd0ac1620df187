//! Current-value and trend derivation for a single series.

use serde::{Deserialize, Serialize};

/// Latest value and period-over-period change for one series window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSummary {
    pub current_value: f64,
    pub trend_percent: f64,
}

/// Derive the summary from a window-ascending sequence of values.
///
/// An empty window reports zeros. A single-sample window has no prior value
/// to compare against, and a prior value of exactly zero is reported as a
/// flat trend rather than dividing by zero. The zero-previous branch masks
/// genuine growth-from-zero as 0%; that is the documented policy, kept as is.
pub fn summarize(values: &[f64]) -> TrendSummary {
    let Some(&current) = values.last() else {
        return TrendSummary { current_value: 0.0, trend_percent: 0.0 };
    };

    let trend_percent = match values.len().checked_sub(2).map(|i| values[i]) {
        Some(previous) if previous != 0.0 => (current - previous) / previous * 100.0,
        _ => 0.0,
    };

    TrendSummary { current_value: current, trend_percent }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rising_series() {
        let summary = summarize(&[10.0, 20.0]);
        assert_eq!(summary.current_value, 20.0);
        assert_eq!(summary.trend_percent, 100.0);
    }

    #[test]
    fn test_falling_series() {
        let summary = summarize(&[20.0, 10.0]);
        assert_eq!(summary.current_value, 10.0);
        assert_eq!(summary.trend_percent, -50.0);
    }

    #[test]
    fn test_only_last_two_values_matter() {
        let summary = summarize(&[1.0, 2.0, 50.0, 75.0]);
        assert_eq!(summary.current_value, 75.0);
        assert_eq!(summary.trend_percent, 50.0);
    }

    #[test]
    fn test_empty_window() {
        let summary = summarize(&[]);
        assert_eq!(summary.current_value, 0.0);
        assert_eq!(summary.trend_percent, 0.0);
    }

    #[test]
    fn test_single_sample_has_no_trend() {
        let summary = summarize(&[42.0]);
        assert_eq!(summary.current_value, 42.0);
        assert_eq!(summary.trend_percent, 0.0);
    }

    #[test]
    fn test_zero_previous_value_guard() {
        // Growth from zero is reported flat, not infinite.
        let summary = summarize(&[0.0, 5.0]);
        assert_eq!(summary.current_value, 5.0);
        assert_eq!(summary.trend_percent, 0.0);
    }

    #[test]
    fn test_flat_series() {
        let summary = summarize(&[85.0, 85.0, 85.0]);
        assert_eq!(summary.current_value, 85.0);
        assert_eq!(summary.trend_percent, 0.0);
    }
}
