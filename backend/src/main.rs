//! Backend entry-point: loads settings, selects the store and serves `/v1`.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use library_api::inbound::http::health::HealthState;
use library_api::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use library_api::settings::AppSettings;
use std::ffi::OsString;

use server::{ServerConfig, create_server};

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = load_settings(std::env::args_os())?;
    let bind_addr = settings
        .bind_addr()
        .wrap_err("LIBRARY_BIND_ADDR is not a socket address")?;

    let mut config = ServerConfig::new(bind_addr);
    match settings.database_url() {
        Some(url) => {
            if settings.run_migrations {
                run_migrations(url).await?;
            }
            let pool = DbPool::new(
                PoolConfig::new(url).with_max_size(settings.pool_max_size()),
            )
            .await
            .wrap_err("failed to build database pool")?;
            info!(max_size = settings.pool_max_size(), "using PostgreSQL store");
            config = config.with_db_pool(pool);
        }
        None => warn!("LIBRARY_DATABASE_URL unset; data lives in memory only"),
    }

    info!(%bind_addr, "starting HTTP server");
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await?;
    Ok(())
}

/// Layer CLI arguments over `LIBRARY_*` environment variables.
fn load_settings<I>(args: I) -> Result<AppSettings>
where
    I: IntoIterator<Item = OsString>,
{
    AppSettings::load_from_iter(args).map_err(|err| eyre!("failed to load settings: {err}"))
}
