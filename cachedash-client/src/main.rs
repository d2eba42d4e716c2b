use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cachedash_client::{ApiClient, ClientConfig};

/// Smoke binary: probes backend liveness and prints collection stats.
#[tokio::main]
async fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("cachedash_client=info".parse().unwrap()),
        )
        .init();

    let config = ClientConfig::from_env();
    info!(base_url = %config.base_url, api_key_configured = config.api_key.is_some(), "Initializing Cache client...");

    let client = match ApiClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to construct client");
            std::process::exit(1);
        }
    };

    let healthy = client.check_health().await;
    info!(healthy, "backend health");
    if !healthy {
        std::process::exit(1);
    }

    match client.stats().await {
        Ok(stats) => info!(total_documents = stats.total_documents, "collection stats"),
        Err(e) => {
            error!(error = %e, "failed to fetch stats");
            std::process::exit(1);
        }
    }
}
