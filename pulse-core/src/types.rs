//! Domain types for the pulse dashboard.

use crate::error::PulseError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Open-ended key/value attributes attached to a sample.
///
/// A `BTreeMap` keeps serialized output deterministic across calls.
pub type Attributes = BTreeMap<String, serde_json::Value>;

/// The fixed set of metric series tracked by the dashboard.
///
/// This is the single source of truth for valid series names: ingestion
/// validation, seeding, and aggregation all consume it, so the set cannot
/// drift between components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesName {
    UserSatisfaction,
    AdoptionRate,
    TechUtilization,
    MarketCompetitiveness,
    InvestmentLevels,
    InnovationRates,
}

impl SeriesName {
    /// Every tracked series, in dashboard display order.
    pub const ALL: [SeriesName; 6] = [
        SeriesName::UserSatisfaction,
        SeriesName::AdoptionRate,
        SeriesName::TechUtilization,
        SeriesName::MarketCompetitiveness,
        SeriesName::InvestmentLevels,
        SeriesName::InnovationRates,
    ];

    /// The wire and storage name (camelCase, matching the JSON payload).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserSatisfaction => "userSatisfaction",
            Self::AdoptionRate => "adoptionRate",
            Self::TechUtilization => "techUtilization",
            Self::MarketCompetitiveness => "marketCompetitiveness",
            Self::InvestmentLevels => "investmentLevels",
            Self::InnovationRates => "innovationRates",
        }
    }
}

impl fmt::Display for SeriesName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeriesName {
    type Err = PulseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SeriesName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| PulseError::UnknownSeries { name: s.to_string() })
    }
}

/// One recorded observation within a series.
///
/// Samples are immutable once stored. They are created by manual ingestion or
/// by the seeder; the only deletion path is the seeder's bulk reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSample {
    pub id: i64,
    pub series: SeriesName,
    pub value: f64,
    pub observed_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

/// A sample as submitted for ingestion, before storage assigns its id.
///
/// `observed_at` defaults to the insertion time when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSample {
    pub series: SeriesName,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_name_round_trip() {
        for name in SeriesName::ALL {
            assert_eq!(SeriesName::from_str(name.as_str()).unwrap(), name);
        }
    }

    #[test]
    fn test_series_name_rejects_unknown() {
        assert!(SeriesName::from_str("serverLoad").is_err());
        assert!(SeriesName::from_str("").is_err());
    }

    #[test]
    fn test_series_name_serde_matches_as_str() {
        for name in SeriesName::ALL {
            let json = serde_json::to_string(&name).unwrap();
            assert_eq!(json, format!("\"{}\"", name.as_str()));
        }
    }
}
