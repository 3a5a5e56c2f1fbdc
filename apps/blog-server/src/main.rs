//! # Blog Server
//!
//! The main entry point for the blog post RPC server.

use std::io;

use actix_web::{App, HttpServer, web};

use blog_shared::AppConfig;

mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use observability::{CallLogger, CorrelationMiddleware};
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // .env in the working directory, then the process environment
    let config = AppConfig::from_env().map_err(io::Error::other)?;

    telemetry::init_telemetry(&TelemetryConfig::from_config(&config));

    tracing::info!(
        "Starting blog server on {}:{}",
        config.server.host,
        config.server.port
    );

    // One store for the whole process, shared by every worker
    let state = AppState::new(CallLogger::new(config.log.enable_request_id));

    // HttpServer stops gracefully on SIGINT/SIGTERM
    HttpServer::new(move || {
        App::new()
            .wrap(CorrelationMiddleware)
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await?;

    tracing::info!("Blog server stopped");
    Ok(())
}
