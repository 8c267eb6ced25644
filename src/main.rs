// Main entry point - Dependency injection and server setup
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use spacex_dashboard::application::controller::DashboardController;
use spacex_dashboard::application::launch_repository::LaunchRepository;
use spacex_dashboard::application::layout_builder::build_layout;
use spacex_dashboard::domain::launch::Dataset;
use spacex_dashboard::infrastructure::config::load_dashboard_config;
use spacex_dashboard::infrastructure::csv_repository::CsvLaunchRepository;
use spacex_dashboard::infrastructure::page::render_index;
use spacex_dashboard::presentation::app_state::AppState;
use spacex_dashboard::presentation::router::build_router;

#[derive(Debug, Parser)]
#[command(about = "SpaceX launch records dashboard")]
struct Args {
    /// Verbose logging and per-request tracing
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut config = load_dashboard_config()?;
    config.debug |= args.debug;

    // Initialize tracing; RUST_LOG wins over the debug switch
    let default_level = if config.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load the dataset once (infrastructure layer); a missing file stops startup
    let repository = CsvLaunchRepository::new(&config.dataset.path);
    let dataset = Arc::new(Dataset::new(repository.load_records().await?));
    if dataset.is_empty() {
        tracing::warn!("Launch dataset {} has no rows", config.dataset.path);
    }
    tracing::info!(
        "{} launch sites, payload {}..{} kg",
        dataset.launch_sites().len(),
        dataset.min_payload(),
        dataset.max_payload()
    );

    // Build the page once, then the controller (application layer)
    let layout = build_layout(&dataset);
    let index_html: Arc<str> = render_index(&layout).into();
    let controller = DashboardController::new(dataset);

    let state = Arc::new(AppState {
        controller,
        layout: Arc::new(layout),
        index_html,
    });

    // Build router (presentation layer)
    let router = build_router(state, config.debug);

    let bind = (config.server.host.as_str(), config.server.port);
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {}:{}", bind.0, bind.1))?;
    tracing::info!("Serving launch dashboard on http://{}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
