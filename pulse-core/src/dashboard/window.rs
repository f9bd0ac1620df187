//! Time-window resolution for dashboard queries.

use chrono::{DateTime, Months, Utc};

/// Symbolic dashboard time ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    OneMonth,
    ThreeMonths,
    #[default]
    SixMonths,
    OneYear,
}

impl TimeRange {
    /// Parse a range token.
    ///
    /// Unrecognized or empty tokens fall back to the six-month default
    /// rather than erroring; the dashboard API is deliberately lenient here.
    pub fn parse(token: &str) -> Self {
        match token {
            "1m" => Self::OneMonth,
            "3m" => Self::ThreeMonths,
            "6m" => Self::SixMonths,
            "1y" => Self::OneYear,
            _ => Self::SixMonths,
        }
    }

    /// The token form of this range.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMonth => "1m",
            Self::ThreeMonths => "3m",
            Self::SixMonths => "6m",
            Self::OneYear => "1y",
        }
    }

    fn months(&self) -> u32 {
        match self {
            Self::OneMonth => 1,
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::OneYear => 12,
        }
    }

    /// Window start relative to `now`.
    ///
    /// Month subtraction follows calendar-rollback semantics: March 31 minus
    /// one month is the last day of February, not a fixed 30 days earlier.
    pub fn start_from(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_sub_months(Months::new(self.months())).unwrap_or(now)
    }

    /// Window start relative to the current time.
    pub fn start(&self) -> DateTime<Utc> {
        self.start_from(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_known_tokens() {
        assert_eq!(TimeRange::parse("1m"), TimeRange::OneMonth);
        assert_eq!(TimeRange::parse("3m"), TimeRange::ThreeMonths);
        assert_eq!(TimeRange::parse("6m"), TimeRange::SixMonths);
        assert_eq!(TimeRange::parse("1y"), TimeRange::OneYear);
    }

    #[test]
    fn test_parse_falls_back_to_six_months() {
        assert_eq!(TimeRange::parse("2w"), TimeRange::SixMonths);
        assert_eq!(TimeRange::parse(""), TimeRange::SixMonths);
        assert_eq!(TimeRange::parse("1M"), TimeRange::SixMonths);
        assert_eq!(TimeRange::default(), TimeRange::SixMonths);
    }

    #[test]
    fn test_start_subtracts_calendar_months() {
        let now = Utc.with_ymd_and_hms(2024, 7, 15, 12, 30, 0).unwrap();

        assert_eq!(
            TimeRange::OneMonth.start_from(now),
            Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 0).unwrap()
        );
        assert_eq!(
            TimeRange::ThreeMonths.start_from(now),
            Utc.with_ymd_and_hms(2024, 4, 15, 12, 30, 0).unwrap()
        );
        assert_eq!(
            TimeRange::SixMonths.start_from(now),
            Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 0).unwrap()
        );
        assert_eq!(
            TimeRange::OneYear.start_from(now),
            Utc.with_ymd_and_hms(2023, 7, 15, 12, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_start_rolls_back_to_end_of_shorter_month() {
        // March 31 minus one month lands on the last day of February.
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap();
        assert_eq!(
            TimeRange::OneMonth.start_from(now),
            Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap()
        );

        // A leap day minus a year clamps to February 28.
        let leap = Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap();
        assert_eq!(
            TimeRange::OneYear.start_from(leap),
            Utc.with_ymd_and_hms(2023, 2, 28, 0, 0, 0).unwrap()
        );
    }
}
