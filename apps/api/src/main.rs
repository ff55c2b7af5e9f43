use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use psycheguide::assessment::scorer::KeywordScorer;
use psycheguide::config::Config;
use psycheguide::routes::build_router;
use psycheguide::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("psycheguide={0},psycheguide_api={0},tower_http={0}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PsycheGuide API v{}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.environment.as_str());

    let state = AppState {
        config: config.clone(),
        scorer: Arc::new(KeywordScorer),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    // 0.0.0.0 so the service is reachable from outside a container
    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
