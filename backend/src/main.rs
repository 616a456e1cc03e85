//! Service entry-point: loads settings, prepares the database and serves HTTP.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use user_directory::inbound::http::health::HealthState;
use user_directory::outbound::persistence::{DbPool, run_pending_migrations};

use server::{ServerConfig, ServiceSettings, create_server};

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let settings = ServiceSettings::load()
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let database_url = settings.database_url().map_err(std::io::Error::other)?;

    if settings.run_migrations() {
        run_pending_migrations(database_url)
            .await
            .map_err(std::io::Error::other)?;
    } else {
        info!("skipping database migrations");
    }

    let pool = DbPool::new(settings.pool_config(database_url))
        .await
        .map_err(std::io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state.clone(),
        ServerConfig::new(settings.bind_addr(), pool),
    )?;

    let result = server.await;
    health_state.mark_draining();
    result
}
