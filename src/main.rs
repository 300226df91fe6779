use dotenvy::dotenv;
use rollcall::config::server::ServerConfig;
use rollcall::logging::init_tracing;
use rollcall::metrics::{init_metrics, metrics_app};
use rollcall::router::init_router;
use rollcall::state::init_app_state;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing()?;

    let server_config = ServerConfig::from_env();

    if let Some(handle) = init_metrics()? {
        let metrics_listener = tokio::net::TcpListener::bind(&server_config.metrics_addr).await?;
        info!(addr = %server_config.metrics_addr, "Metrics server listening");
        tokio::spawn(async move {
            if let Err(e) = axum::serve(metrics_listener, metrics_app(handle)).await {
                error!(error = %e, "Metrics server stopped");
            }
        });
    }

    let state = init_app_state().await?;
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&server_config.bind_addr).await?;
    info!(addr = %server_config.bind_addr, "🚀 Server running");
    info!("📖 Scalar UI available at http://{}/scalar", server_config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
