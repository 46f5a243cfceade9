use anyhow::Result;

use taskboard_backend::{app, config, db, logging, store::Store};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = config::Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        "Starting taskboard backend"
    );

    // Create database pool and apply the schema
    let pool = db::create_pool(&settings).await?;
    db::run_migrations(&pool).await?;

    // Create application state
    let state = app::AppState::new(Store::new(pool), settings.clone());

    // Build application
    let app = app::create_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
