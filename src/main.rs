// Main entry point - Dependency injection, single render pass and server setup
use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use temperature_heatmap::application::dataset_repository::DatasetRepository;
use temperature_heatmap::application::heatmap_service::HeatmapService;
use temperature_heatmap::infrastructure::config::load_heatmap_config;
use temperature_heatmap::infrastructure::dataset_source::{
    FileDatasetRepository, HttpDatasetRepository,
};
use temperature_heatmap::infrastructure::svg_writer::{render_page, render_svg};
use temperature_heatmap::presentation::app_state::AppState;
use temperature_heatmap::presentation::handlers::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_heatmap_config()?;

    // Create repository (infrastructure layer)
    let repository: Arc<dyn DatasetRepository> = match &config.dataset.path {
        Some(path) => Arc::new(FileDatasetRepository::new(path.clone())),
        None => Arc::new(HttpDatasetRepository::new(config.dataset.url.clone())),
    };

    // Render once (application layer). A failed fetch leaves the page without a chart.
    let service = HeatmapService::new(repository, config.render.clone());
    let heatmap = match service.render().await {
        Ok(heatmap) => Some(heatmap),
        Err(e) => {
            tracing::error!("Heatmap not rendered: {:#}", e);
            None
        }
    };

    let svg = heatmap.as_ref().map(render_svg).transpose()?;
    let page = render_page(heatmap.as_ref(), config.render.baseline_temperature)?;

    if let (Some(path), Some(svg)) = (&config.render.svg_output, &svg) {
        tokio::fs::write(path, svg)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Wrote heatmap SVG to {}", path.display());
    }

    // Build router (presentation layer)
    let state = Arc::new(AppState { page, svg });
    let app = router(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind_address
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.server.bind_address))?;
    tracing::info!("Serving temperature heatmap on http://{}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
