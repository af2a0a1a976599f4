use anyhow::Context;
use database::db::{create_connection, create_schema};
use log::info;
use server::{AppState, config::AppConfig, create_router, utils::shutdown::shutdown_signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = AppConfig::load().context("failed to load configuration")?;

    let db = create_connection(&config.database)
        .await
        .context("failed to connect to the database")?;

    if config.run_migrations {
        create_schema(&db)
            .await
            .context("failed to apply database migrations")?;
    }

    let app = create_router(AppState::new(db));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("Running axum on http://{}", config.bind_addr);
    info!("API docs at http://{}/swagger-ui", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("Server stopped");
    Ok(())
}
