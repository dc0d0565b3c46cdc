mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::pass_expiry, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::apply_data_patches(&db).await;
    let jwt = startup::setup_jwt(&config);

    // Keep the handle alive for the lifetime of the server
    let _scheduler = match pass_expiry::start_scheduler(db.clone()).await {
        Ok(scheduler) => Some(scheduler),
        Err(e) => {
            tracing::error!("Pass expiry scheduler error: {}", e);
            None
        }
    };

    let state = AppState::new(db, jwt, config.defaults.clone());
    let app = router::router(state, &config);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| {
            AppError::InternalError(format!("Failed to bind {}: {}", config.bind_address, e))
        })?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}
