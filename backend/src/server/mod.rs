//! HTTP server assembly.
//!
//! Purpose: wire the persistence adapter, domain service, and HTTP handlers
//! together, run pending migrations, and start the Actix server.

pub mod config;

use std::io;
use std::sync::Arc;

use actix_web::middleware::NormalizePath;
use actix_web::{web, App, HttpServer};
use diesel::{Connection, PgConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::info;

use crate::domain::{EmployeeService, Error};
use crate::inbound::http::employees;
use crate::inbound::http::health::{self, HealthState};
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;
use crate::outbound::persistence::{DbPool, DieselEmployeeRepository, PoolConfig};

pub use config::{AppConfig, ConfigError};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending migrations against the configured database.
///
/// Uses a short-lived synchronous connection; the async pool is only built
/// once the schema is in place.
fn apply_migrations(database_url: &str) -> io::Result<()> {
    let mut conn = PgConnection::establish(database_url).map_err(io::Error::other)?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(io::Error::other)?;
    info!(count = applied.len(), "applied pending migrations");
    Ok(())
}

/// Register routes, shared state, and payload error handling.
///
/// Kept separate from [`run`] so integration tests can assemble the same
/// application over an in-memory repository.
pub fn configure_app(
    cfg: &mut web::ServiceConfig,
    state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("invalid request body: {err}")).into()
    });
    let path_config = web::PathConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("invalid path parameter: {err}")).into()
    });

    cfg.app_data(json_config)
        .app_data(path_config)
        .app_data(state)
        .app_data(health_state)
        .service(employees::scope())
        .service(health::ready)
        .service(health::live);

    #[cfg(debug_assertions)]
    {
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        cfg.service(
            SwaggerUi::new("/docs/{_:.*}").url("/api-doc/openapi.json", crate::ApiDoc::openapi()),
        );
    }
}

/// Start the HTTP server and serve until shutdown.
///
/// # Errors
///
/// Returns an error when migrations fail, the pool cannot be built, or the
/// listen address is unavailable.
pub async fn run(config: AppConfig) -> io::Result<()> {
    let database_url = config.database_url.clone();
    tokio::task::spawn_blocking(move || apply_migrations(&database_url))
        .await
        .map_err(io::Error::other)??;

    let pool = DbPool::new(
        PoolConfig::new(&config.database_url).with_max_size(config.pool_max_size),
    )
    .await
    .map_err(io::Error::other)?;

    let repository = Arc::new(DieselEmployeeRepository::new(pool));
    let service = Arc::new(EmployeeService::new(repository));
    let state = web::Data::new(HttpState::new(service.clone(), service));
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();

    info!(addr = %config.bind_addr, "starting employee registry server");
    HttpServer::new(move || {
        App::new()
            .wrap(Trace)
            .wrap(NormalizePath::trim())
            .configure(|cfg| configure_app(cfg, state.clone(), health_state.clone()))
    })
    .bind(config.bind_addr)?
    .run()
    .await
}
