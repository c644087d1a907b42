use crate::app::AppContext;
use crate::config::AppConfig;
use crate::db::{init_db, Database, KeyValueStorage, MemoryStorage};
use crate::domain::Catalog;
use crate::responses::error_to_response;
use crate::router::handle;
use anyhow::Context;
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

mod app;
mod auth;
mod config;
mod db;
mod domain;
mod errors;
mod forms;
mod notices;
mod responses;
mod router;
mod submissions;
mod telemetry;
mod templates;

#[cfg(test)]
mod tests;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("loading configuration")?;
    telemetry::init(&config.logging).context("initialising logging")?;

    // Storage for the persisted session
    let storage: Arc<dyn KeyValueStorage> = if config.storage.in_memory {
        info!("session storage kept in memory");
        Arc::new(MemoryStorage::new())
    } else {
        let db = Database::new(config.storage.path.clone());
        init_db(&db).context("initialising session storage")?;
        Arc::new(db)
    };

    let catalog = Catalog::load(config.catalog.seed_path.as_deref()).context("loading catalog")?;

    let addr: SocketAddr = config
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address {}", config.server.bind_addr))?;
    let max_workers = config.server.max_workers;

    let ctx = AppContext::new(config, catalog, storage).context("building app context")?;

    info!(%addr, max_workers, records = ctx.catalog.len(), "starting server");

    let server = Server::bind(&addr).max_workers(max_workers);

    let result = server.serve(move |req, _info| match handle(req, &ctx) {
        Ok(resp) => resp,
        Err(err) => {
            error!(error = %err, "response could not be built");
            error_to_response(err)
        }
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
        return Err(e).context("serving requests");
    }

    info!("server shut down cleanly");
    Ok(())
}
