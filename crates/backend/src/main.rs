pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    // Loads config.toml next to the executable or the embedded default
    let config = shared::config::load_config()?;

    domain::a001_llm_model::service::initialize(config.models.clone())
        .map_err(|e| anyhow::anyhow!("model catalog init failed: {e}"))?;

    let static_dir = shared::config::get_static_dir(&config);
    let app = routes::configure_routes(static_dir.as_deref());

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on http://{}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
