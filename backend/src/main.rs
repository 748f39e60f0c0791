use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod rest;

use config::Config;
use db::DbConnection;
use rest::{cors_layer, create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Setting up database at {}", config.database_url);
    let db = DbConnection::connect_lazy(&config.database_url)?;

    let cors = cors_layer(config.cors_origin.as_deref())?;
    let app = create_router(AppState::new(db), cors, config.frontend_dir.as_deref());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
