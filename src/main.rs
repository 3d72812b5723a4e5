//! ICASA-GEO - strategic organizational management dashboard

use anyhow::Result;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use icasa_geo::{
    client::ApiClient,
    config::Config,
    render::Renderer,
    web::{self, AppState},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "icasa_geo=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ICASA-GEO...");

    // Load configuration
    let config = Config::load_with_env(Path::new("config.yml"))?;
    tracing::info!("Configuration loaded");

    let client = ApiClient::new(&config.backend)?;
    tracing::info!("Knowledge base backend: {}", client.base_url());

    let renderer = Renderer::new(config.site.clone())?;
    tracing::info!("Page templates loaded");
    tracing::info!("Dashboard source: {:?}", config.dashboard.source);

    let state = AppState::new(client, renderer, config.dashboard.clone());
    let app = web::build_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
