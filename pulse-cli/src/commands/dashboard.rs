//! `pulse dashboard` command

use crate::client::PulseClient;
use anyhow::Result;
use pulse_core::{DashboardData, SeriesName};
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct SeriesRow {
    #[tabled(rename = "SERIES")]
    series: String,
    #[tabled(rename = "CURRENT")]
    current: String,
    #[tabled(rename = "TREND")]
    trend: String,
    #[tabled(rename = "SAMPLES")]
    samples: usize,
}

/// Fetch and print the dashboard for the given time range.
pub async fn show(client: &PulseClient, range: &str) -> Result<()> {
    let data: DashboardData =
        client.get_json(&format!("/api/dashboard?timeRange={}", range)).await?;

    if data.trends.is_empty() {
        println!("No samples recorded in this window");
        return Ok(());
    }

    let rows: Vec<SeriesRow> = SeriesName::ALL
        .iter()
        .filter_map(|name| {
            data.series.get(name).map(|summary| SeriesRow {
                series: name.to_string(),
                current: format!("{:.1}", summary.current_value),
                trend: format!("{:+.1}%", summary.trend_percent),
                samples: summary.history.len(),
            })
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());

    println!("{}", table);
    println!("{} dates in window", data.trends.len());

    Ok(())
}
