use std::sync::Arc;

use anyhow::{Context, Result};
use pycon_sk_web::config::Config;
use pycon_sk_web::{build_router, Site};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pycon_sk_web=info".parse()?),
        )
        .init();

    info!("Starting PyCon SK website");

    // Load configuration from environment
    let config = Config::from_env()?;
    let addr = config.bind_addr();

    let site = Site::new(config).context("Invalid site configuration")?;

    // Refuse to start with routes the page registry does not know about
    let entries = site
        .sitemap_entries()
        .context("Sitemap preflight failed")?;
    info!("✓ Sitemap preflight passed ({} URLs)", entries.len());

    let router = build_router(Arc::new(site)).context("Failed to build router")?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router).await?;
    Ok(())
}
