use crate::config::Config;
use crate::db::{init_db, seed_demo_data, Database};
use crate::router::respond;
use crate::security::PeerAddr;
use crate::state::AppState;
use astra::{ConnectionInfo, Request, Server};
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod antispam;
mod api;
mod config;
mod db;
mod domain;
mod errors;
mod mailer;
mod request;
mod responses;
mod router;
mod security;
mod services;
mod site;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "configuration failed");
            return ExitCode::FAILURE;
        }
    };

    let db = Database::new(cfg.database_path.clone());
    if let Err(e) = init_db(&db) {
        error!(error = %e, "database initialization failed");
        return ExitCode::FAILURE;
    }
    if cfg.seed_demo_data {
        if let Err(e) = seed_demo_data(&db) {
            error!(error = %e, "seeding failed");
            return ExitCode::FAILURE;
        }
    }

    let state = match AppState::from_config(&cfg, db) {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "could not build application state");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %cfg.bind_addr, workers = cfg.max_workers, "starting server");

    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.max_workers);
    let result = server.serve(move |mut req: Request, info: ConnectionInfo| {
        if let Some(peer) = info.peer_addr() {
            req.extensions_mut().insert(PeerAddr(peer));
        }
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        let started = Instant::now();

        let resp = respond(req, &state);

        info!(
            %method,
            path = %path,
            status = resp.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request"
        );
        resp
    });

    match result {
        Ok(()) => {
            info!("server shut down cleanly");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "server ended with error");
            ExitCode::FAILURE
        }
    }
}
