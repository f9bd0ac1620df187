//! End-to-end flow: seed demo data, then aggregate a dashboard payload.

use pulse_core::dashboard::{DashboardService, TimeRange};
use pulse_core::{seed, SampleStore, SeriesName};
use std::sync::Arc;

#[tokio::test]
async fn test_seed_then_aggregate() {
    let store = Arc::new(SampleStore::new_in_memory().await.unwrap());

    let inserted = seed::seed(&store, 30).await.unwrap();
    assert_eq!(inserted, 30 * SeriesName::ALL.len() as u64);

    let service = DashboardService::new(Arc::clone(&store));
    let data = service.dashboard_data(TimeRange::OneYear).await.unwrap();

    for name in SeriesName::ALL {
        let summary = &data.series[&name];
        assert_eq!(summary.history.len(), 30);
        assert!(summary.current_value > 0.0);
        // The most recent history entry is the current value.
        assert_eq!(summary.history.last().unwrap().value, summary.current_value);
    }

    // Daily samples across all series land on the same 30 calendar dates.
    assert_eq!(data.trends.len(), 30);
    let mut dates: Vec<&str> = data.trends.iter().map(|r| r.date.as_str()).collect();
    let sorted = {
        let mut d = dates.clone();
        d.sort_unstable();
        d
    };
    assert_eq!(dates, sorted);
    dates.dedup();
    assert_eq!(dates.len(), 30);

    // Every row carries a value for every series (the seeder is dense).
    for row in &data.trends {
        assert_eq!(row.values.len(), SeriesName::ALL.len());
    }
}

#[tokio::test]
async fn test_narrow_window_bounds_history() {
    let store = Arc::new(SampleStore::new_in_memory().await.unwrap());
    seed::seed(&store, 90).await.unwrap();

    let service = DashboardService::new(Arc::clone(&store));
    let data = service.dashboard_data(TimeRange::OneMonth).await.unwrap();

    for name in SeriesName::ALL {
        let len = data.series[&name].history.len();
        // A one-month window over 90 days of dailies keeps roughly a third.
        assert!(len < 90, "window did not restrict series {}: {} entries", name, len);
        assert!(len >= 28, "window too aggressive for series {}: {} entries", name, len);
    }
}

#[tokio::test]
async fn test_reseed_replaces_data() {
    let store = Arc::new(SampleStore::new_in_memory().await.unwrap());

    seed::seed(&store, 30).await.unwrap();
    seed::seed(&store, 10).await.unwrap();

    let service = DashboardService::new(Arc::clone(&store));
    let data = service.dashboard_data(TimeRange::OneYear).await.unwrap();

    for name in SeriesName::ALL {
        assert_eq!(data.series[&name].history.len(), 10);
    }
    assert_eq!(data.trends.len(), 10);
}
