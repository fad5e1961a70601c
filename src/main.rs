use dotenvy::dotenv;
use mywallets::{
    api::{AppState, build_router},
    config,
    errors::Result,
};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load .env so DATABASE_URL / APP_API_KEY / RUST_LOG can come from it
    dotenv().ok();

    // 2. Load the application configuration
    let app_config = config::load_app_configuration()?;

    // 3. Initialize tracing; RUST_LOG wins over the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&app_config.log_level)),
        )
        .init();
    info!("Configuration loaded, starting MyWallets");

    // 4. Initialize database
    let db = config::database::init_database(&app_config)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Serve the HTTP API until Ctrl-C
    let state = AppState::new(db, &app_config.api_key);
    let app = build_router(state);

    let listener = TcpListener::bind(&app_config.bind_addr)
        .await
        .inspect_err(|e| error!("Failed to bind {}: {}", app_config.bind_addr, e))?;
    info!(addr = %app_config.bind_addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
