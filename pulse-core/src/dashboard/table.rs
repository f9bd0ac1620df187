//! Cross-series trend table assembly.

use crate::types::SeriesName;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{HistoryPoint, SeriesSummary};

/// One dated row of the multi-series chart table.
///
/// A series without a sample on the row's date is absent from `values`
/// entirely. A missing key means "no observation", which charts must not
/// conflate with a measured zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendRow {
    pub date: String,
    #[serde(flatten)]
    pub values: BTreeMap<SeriesName, f64>,
}

/// Reduce a timestamp to the calendar-date key used by the table.
pub(crate) fn date_key(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

/// Merge per-series histories into one date-indexed table.
///
/// Lexicographic order on `YYYY-MM-DD` keys is chronological order, so the
/// BTreeMap doubles as the sort. When a series has more than one sample on
/// the same date, the latest one wins.
pub fn build(series: &BTreeMap<SeriesName, SeriesSummary>) -> Vec<TrendRow> {
    let mut rows: BTreeMap<String, BTreeMap<SeriesName, f64>> = BTreeMap::new();

    for (&name, summary) in series {
        for point in &summary.history {
            rows.entry(date_key(point.date)).or_default().insert(name, point.value);
        }
    }

    rows.into_iter().map(|(date, values)| TrendRow { date, values }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn point(year: i32, month: u32, day: u32, value: f64) -> HistoryPoint {
        HistoryPoint {
            date: Utc.with_ymd_and_hms(year, month, day, 9, 30, 0).unwrap(),
            value,
            attributes: Default::default(),
        }
    }

    fn summary(history: Vec<HistoryPoint>) -> SeriesSummary {
        SeriesSummary { current_value: 0.0, trend_percent: 0.0, history }
    }

    #[test]
    fn test_date_key_drops_time_of_day() {
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 23, 59, 59).unwrap();
        assert_eq!(date_key(at), "2024-03-07");
    }

    #[test]
    fn test_disjoint_dates_produce_sparse_rows() {
        let mut series = BTreeMap::new();
        series.insert(
            SeriesName::UserSatisfaction,
            summary(vec![point(2024, 5, 1, 80.0), point(2024, 5, 2, 81.0)]),
        );
        series.insert(
            SeriesName::AdoptionRate,
            summary(vec![point(2024, 5, 2, 50.0), point(2024, 5, 3, 51.0)]),
        );

        let rows = build(&series);
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].date, "2024-05-01");
        assert_eq!(rows[0].values.get(&SeriesName::UserSatisfaction), Some(&80.0));
        assert!(!rows[0].values.contains_key(&SeriesName::AdoptionRate));

        assert_eq!(rows[1].date, "2024-05-02");
        assert_eq!(rows[1].values.get(&SeriesName::UserSatisfaction), Some(&81.0));
        assert_eq!(rows[1].values.get(&SeriesName::AdoptionRate), Some(&50.0));

        assert_eq!(rows[2].date, "2024-05-03");
        assert!(!rows[2].values.contains_key(&SeriesName::UserSatisfaction));
        assert_eq!(rows[2].values.get(&SeriesName::AdoptionRate), Some(&51.0));
    }

    #[test]
    fn test_rows_ascend_by_date_from_unordered_input() {
        let mut series = BTreeMap::new();
        series.insert(
            SeriesName::TechUtilization,
            summary(vec![point(2024, 6, 9, 3.0), point(2024, 6, 1, 1.0), point(2024, 6, 5, 2.0)]),
        );

        let rows = build(&series);
        let dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-06-01", "2024-06-05", "2024-06-09"]);
    }

    #[test]
    fn test_same_day_duplicate_keeps_latest_value() {
        let mut series = BTreeMap::new();
        series.insert(
            SeriesName::InvestmentLevels,
            summary(vec![point(2024, 6, 1, 10.0), point(2024, 6, 1, 12.0)]),
        );

        let rows = build(&series);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].values.get(&SeriesName::InvestmentLevels), Some(&12.0));
    }

    #[test]
    fn test_missing_value_is_absent_not_zero() {
        let mut series = BTreeMap::new();
        series.insert(SeriesName::UserSatisfaction, summary(vec![point(2024, 5, 1, 80.0)]));
        series.insert(SeriesName::AdoptionRate, summary(vec![point(2024, 5, 2, 50.0)]));

        let rows = build(&series);
        let json = serde_json::to_value(&rows[0]).unwrap();
        assert!(json.get("userSatisfaction").is_some());
        assert!(json.get("adoptionRate").is_none());
    }
}
