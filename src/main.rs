use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use tripsmith::{GooglePlacesClient, TripPlanRequest, TripPlanner, TripSmithConfig};

/// Demo entry point: `tripsmith <location> [days] [trip_type] [budget]`.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let location = args
        .first()
        .cloned()
        .context("usage: tripsmith <location> [days] [trip_type] [budget]")?;
    let days = match args.get(1) {
        Some(raw) => raw.parse::<u32>().context("days must be a positive integer")?,
        None => 3,
    };
    let trip_type = args.get(2).cloned().unwrap_or_else(|| "Leisure".to_string());
    let budget = match args.get(3) {
        Some(raw) => Some(raw.parse::<f64>().context("budget must be a number")?),
        None => None,
    };

    let config = TripSmithConfig::from_env()?;
    let provider = Arc::new(GooglePlacesClient::new(&config)?);
    let planner = TripPlanner::new(provider, &config);

    let suggestion = planner
        .plan(&TripPlanRequest {
            location,
            days,
            trip_type,
            budget,
            language: None,
            region: None,
        })
        .await;

    println!("{}", serde_json::to_string_pretty(&suggestion)?);
    Ok(())
}
