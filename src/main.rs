use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use dotenv::dotenv;

use qubo_gateway::{configure, AnnealingEngine, ServerConfig, SolvingEngine};

// ---------- Server bootstrap ----------
fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env();

    // Keep the guard alive for the whole process so queued events get flushed.
    let _sentry = sentry::init((
        config.sentry_dsn.clone(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    actix_web::rt::System::new().block_on(run(config))
}

async fn run(config: ServerConfig) -> std::io::Result<()> {
    let engine: Arc<dyn SolvingEngine> = Arc::new(AnnealingEngine::new());
    let json_limit = config.json_payload_limit;

    log::info!(
        "Starting server on http://{}:{} with {} engine",
        config.host,
        config.port,
        engine.name()
    );
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(sentry_actix::Sentry::new())
            .configure(configure(engine.clone(), json_limit))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
