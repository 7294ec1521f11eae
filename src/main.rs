use dotenvy::dotenv;
use tracing::{error, info};

use cookbook::cookbook_config::ServerConfig;
use cookbook::cookbook_db::run_migrations;
use cookbook::logging::init_tracing;
use cookbook::router::init_router;
use cookbook::state::init_app_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let state = init_app_state().await;
    if let Err(e) = run_migrations(&state.db).await {
        error!(error = %e, "Failed to run migrations");
        return Err(e.into());
    }

    let app = init_router(state);
    let server_config = ServerConfig::from_env();
    let addr = server_config.addr();

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "Server running");
    info!("Swagger UI available at http://{addr}/swagger-ui");
    info!("Scalar UI available at http://{addr}/scalar");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutting down");
}
