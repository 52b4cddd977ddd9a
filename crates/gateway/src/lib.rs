//! API Gateway Library
//!
//! This crate provides the HTTP adapter in front of the registration
//! pipeline: `POST /register` plus a 405 fallback for everything else.

pub mod config;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
pub async fn run_server(
    host: &str,
    port: u16,
    config: GatewayConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Connect database and wire the pipeline
    let service = register_service_lib::build_service(&config.register).await?;

    // Create app state
    let state = AppState::new(Arc::new(service));

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Build address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Gateway listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
