//! Single binary web server: JSON REST API over the tournament service.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Set DATA_DIR to keep tournaments on disk; otherwise they live in memory.

use actix_web::{web::Data, App, HttpServer};
use std::sync::Arc;
use swiss_tournament_web::{api, AppConfig, JsonFileStore, TournamentService};
use tokio::sync::broadcast::error::RecvError;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    let service = match &config.data_dir {
        Some(dir) => {
            let store = Arc::new(JsonFileStore::open(dir).map_err(std::io::Error::other)?);
            TournamentService::new(store.clone(), store)
        }
        None => {
            log::info!("DATA_DIR not set; tournaments are kept in memory");
            TournamentService::in_memory()
        }
    };
    let host = service.current_host().map_err(std::io::Error::other)?;
    log::info!("Host profile: {}", host.name);

    let state = Data::new(service);

    // Background task: log every persisted tournament change
    let mut updates = state.subscribe();
    actix_web::rt::spawn(async move {
        loop {
            match updates.recv().await {
                Ok(t) => log::debug!(
                    "Tournament {} updated: round {}/{}, {} match(es), finished={}",
                    t.id,
                    t.current_round,
                    t.number_of_rounds,
                    t.matches.len(),
                    t.finished
                ),
                Err(RecvError::Lagged(skipped)) => {
                    log::warn!("Update log lagged, skipped {} snapshot(s)", skipped)
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::configure)
    })
    .bind(bind)?
    .run()
    .await
}
