use std::sync::Arc;

use dotenvy::dotenv;

mod api;
mod config;
mod setup;
mod view;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, seed, server::Server};
use view::renderer::MinijinjaRenderer;

/// Product catalog entry point
///
/// Loads configuration, wires the adapters into the use cases and serves the
/// HTML pages:
/// - config/: environment-driven settings (server, storage, CSRF, catalog)
/// - setup/: dependency injection, demo seeding and server setup
/// - api/: page handlers, form DTOs and error pages
/// - view/: template rendering
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables, so RUST_LOG may come from .env too
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Initialize storage
    let repository = database_config::init_repository(&config.storage).await?;
    if config.catalog.seed_demo_products {
        seed::seed_demo_products(repository.as_ref()).await?;
    }

    // 5. Wire dependencies
    let csrf = Arc::new(config.csrf.token_manager()?);
    let renderer = Arc::new(MinijinjaRenderer::new()?);
    let container = DependencyContainer::new(repository, csrf, renderer, &config.catalog);

    // 6. Run server
    Server::run(&config.server, container).await?;

    Ok(())
}
