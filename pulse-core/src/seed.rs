//! Demo-data seeding.
//!
//! Seeding is the one bulk mutation in the system: it clears every stored
//! sample and repopulates each series with one value per day, ending today.
//! Values follow a bounded random walk around a per-series baseline.

use crate::error::Result;
use crate::state::SampleStore;
use crate::types::{NewSample, SeriesName};
use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, instrument};

/// Default number of days of history the seeder generates.
pub const DEFAULT_SEED_DAYS: u32 = 180;

/// RNG seed for demo data ("PULS" in little-endian).
const SEED_MAGIC: u64 = 0x534C5550;

/// Baseline value and daily jitter for a series' walk.
fn profile(series: SeriesName) -> (f64, f64) {
    match series {
        SeriesName::UserSatisfaction => (82.0, 2.5),
        SeriesName::AdoptionRate => (54.0, 3.0),
        SeriesName::TechUtilization => (67.0, 2.0),
        SeriesName::MarketCompetitiveness => (71.0, 1.5),
        SeriesName::InvestmentLevels => (48.0, 4.0),
        SeriesName::InnovationRates => (60.0, 2.5),
    }
}

/// Reset the store and generate `days` days of samples per series.
///
/// The RNG seed is fixed so repeated demo seeds produce the same shapes;
/// only the timestamps move with the clock.
#[instrument(skip(store))]
pub async fn seed(store: &SampleStore, days: u32) -> Result<u64> {
    let cleared = store.clear_samples().await?;

    let mut rng = StdRng::seed_from_u64(SEED_MAGIC);
    let now = Utc::now();
    let mut inserted = 0u64;

    for series in SeriesName::ALL {
        let (baseline, jitter) = profile(series);
        let mut value = baseline;

        for day in (0..days).rev() {
            value = (value + rng.gen_range(-jitter..jitter)).clamp(0.0, 100.0);
            store
                .insert_sample(NewSample {
                    series,
                    value: (value * 10.0).round() / 10.0,
                    observed_at: Some(now - Duration::days(day as i64)),
                    attributes: Default::default(),
                })
                .await?;
            inserted += 1;
        }
    }

    info!(cleared, inserted, "Seeded demo metric samples");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[tokio::test]
    async fn test_seed_inserts_one_sample_per_series_per_day() {
        let store = SampleStore::new_in_memory().await.unwrap();

        let inserted = seed(&store, 7).await.unwrap();
        assert_eq!(inserted, 7 * SeriesName::ALL.len() as u64);
        assert_eq!(store.sample_count().await.unwrap(), inserted as i64);
    }

    #[tokio::test]
    async fn test_seed_resets_instead_of_appending() {
        let store = SampleStore::new_in_memory().await.unwrap();

        seed(&store, 5).await.unwrap();
        seed(&store, 5).await.unwrap();

        assert_eq!(store.sample_count().await.unwrap(), 5 * SeriesName::ALL.len() as i64);
    }

    #[tokio::test]
    async fn test_seeded_values_stay_in_range() {
        let store = SampleStore::new_in_memory().await.unwrap();
        seed(&store, 30).await.unwrap();

        let start = Utc.timestamp_opt(0, 0).unwrap();
        for series in SeriesName::ALL {
            let samples = store.samples_since(series, start).await.unwrap();
            assert_eq!(samples.len(), 30);
            assert!(samples.iter().all(|s| (0.0..=100.0).contains(&s.value)));
        }
    }
}
