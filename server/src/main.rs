use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use todo_server::{app, cors_layer, AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("todo_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::parse();

    let state = AppState::open(&config.db_path)
        .with_context(|| format!("failed to open database {}", config.db_path.display()))?;
    let cors = cors_layer(&config.cors_origin)
        .with_context(|| format!("invalid CORS origin {:?}", config.cors_origin))?;
    let router = app(state).layer(cors);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, db_path = %config.db_path.display(), "todo server listening");

    todo_server::run(listener, router).await?;
    Ok(())
}
