use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use nearbite_core::AppConfig;
use nearbite_places::{GooglePlacesClient, PlacesAggregator, TokioDelay};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "nearbite-cli")]
#[command(about = "Query nearby eateries from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a filtered two-page nearby search and print the result as JSON
    Search {
        /// Center point as "lat,lng"
        #[arg(long, allow_hyphen_values = true)]
        location: String,
        /// Price level 0-4
        #[arg(long)]
        price: String,
        /// Search radius in meters; omitted means rank by distance
        #[arg(long)]
        radius: Option<String>,
    },
    /// Resolve a postal code to coordinates
    Geocode {
        #[arg(long)]
        zipcode: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = nearbite_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = Arc::new(GooglePlacesClient::from_config(&config)?);
    match cli.command {
        Commands::Search {
            location,
            price,
            radius,
        } => run_search(&config, client, &location, &price, radius.as_deref()).await,
        Commands::Geocode { zipcode } => {
            let point = client.geocode_address(&zipcode).await?;
            println!("{}", serde_json::to_string_pretty(&point)?);
            Ok(())
        }
    }
}

async fn run_search(
    config: &AppConfig,
    client: Arc<GooglePlacesClient>,
    location: &str,
    price: &str,
    radius: Option<&str>,
) -> anyhow::Result<()> {
    let aggregator = PlacesAggregator::new(
        client,
        Arc::new(TokioDelay),
        Duration::from_millis(config.page_token_delay_ms),
    );
    let outcome = aggregator
        .search_params(Some(location), Some(price), radius)
        .await?;
    tracing::info!(
        fetched = outcome.total_fetched,
        kept = outcome.total_filtered,
        "search complete"
    );
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
