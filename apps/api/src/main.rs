use axum::Router;
use axum_helpers::server::{create_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_notifications::NatsEventPublisher;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any
    // fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!(
        name = %config.app.name,
        version = %config.app.version,
        "Starting civic API"
    );

    // Connect to PostgreSQL and apply pending migrations
    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    database::postgres::run_migrations::<migration::Migrator>(&db)
        .await
        .map_err(|e| eyre::eyre!("Migration failed: {}", e))?;

    // Connect to NATS. Publish-time failures are tolerated downstream, but
    // a broker that is absent at boot is a deployment problem.
    let publisher = NatsEventPublisher::connect(&config.nats.url)
        .await
        .map_err(|e| eyre::eyre!("NATS connection failed: {}", e))?;

    let jwt = axum_helpers::JwtAuth::new(&config.jwt);

    let state = AppState {
        config: config.clone(),
        db,
        jwt,
        publisher: Arc::new(publisher),
    };

    let app = Router::new()
        .nest("/api", api::routes(&state))
        .merge(health_router(config.app))
        .merge(api::ready_router(state))
        .merge(openapi::router())
        .layer(TraceLayer::new_for_http());

    create_app(app, &config.server).await?;

    Ok(())
}
