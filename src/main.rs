use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rsmakes_site::catalog::Catalog;
use rsmakes_site::config::Config;
use rsmakes_site::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting RS Makes site server");
    tracing::info!("Site URL: {}", config.base_url);
    tracing::info!("Public dir: {:?}", config.public_dir);
    tracing::info!("Bind address: {}", config.bind_addr);

    if !config.public_dir.is_dir() {
        tracing::warn!(
            "Public directory {:?} does not exist, /public will return 404",
            config.public_dir
        );
    }

    let catalog = Arc::new(Catalog::seeded());
    tracing::info!(
        "Catalog ready: {} products, {} posts",
        catalog.products().len(),
        catalog.posts().len()
    );

    let state = AppState {
        catalog,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
