use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;

use spell_trainer::{
    AppState, app,
    config::Config,
    data::{db, seed},
    spaced_repetition_system::SystemClock,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load();

    // Database configuration
    let pool = db::create_pool(&config.database_url).context("Failed to create DB pool")?;
    {
        let mut conn = pool.get().context("Failed to get DB connection")?;
        db::initialize(&mut conn).context("Failed to create tables")?;

        if config.seed_database {
            seed::seed_if_empty(&mut conn).context("Failed to seed database")?;
        }
    }

    let state = AppState::new(pool, Arc::new(SystemClock));
    let app = app(state, &config.static_dir);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    log::info!("Server running on http://{}", config.bind_addr);
    log::info!("Database path: {}", config.database_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}
