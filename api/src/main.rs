use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use todo_api::{Config, InMemoryStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app = todo_api::app_with_config(&config, Arc::new(InMemoryStore::new()))?;
    let listener = TcpListener::bind(config.addr()).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        origins = ?config.allowed_origins,
        "listening"
    );
    todo_api::serve(listener, app).await?;
    Ok(())
}
