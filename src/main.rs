use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activity_signup::config::ServerConfig;
use activity_signup::database::ActivityCatalog;
use activity_signup::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Seed the catalog
    let config = ServerConfig::from_env();
    let catalog = Arc::new(ActivityCatalog::seeded());
    info!(activities = catalog.len(), "activity catalog seeded");

    // 3. Build the application
    let app = web::router(catalog, &config);

    // 4. Start the server (with fallback port)
    let addr = config.addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!(%addr, error = %e, %fallback, "could not bind, trying fallback");
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("cannot bind fallback address {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!(
        build = env!("ACTIVITY_SIGNUP_BUILD_ID"),
        static_dir = %config.static_dir.display(),
        "server listening on http://{}",
        bound_addr
    );

    axum::serve(listener, app).await?;
    Ok(())
}
