// Main entry point - Dependency injection and one fetch/render cycle
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use crate::application::chart_service::FlowChartService;
use crate::infrastructure::backend_repository::BackendRepository;
use crate::infrastructure::config::load_backend_config;
use crate::presentation::chart_payload::ChartPayload;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_backend_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(BackendRepository::new(config.backend.base_url));

    // Create service (application layer)
    let mut service = FlowChartService::new(repository);

    // One user-triggered fetch; a failure keeps the prior (here: empty)
    // series and is only surfaced as a diagnostic
    let params = config.query.to_parameters();
    if let Err(e) = service.refresh(&params).await {
        tracing::error!("Error fetching data from backend: {}", e);
    }

    // Hand the derived chart series to the renderer
    let payload = ChartPayload::new(service.chart_series());
    println!("{}", serde_json::to_string_pretty(&payload)?);

    Ok(())
}
