//! Entry point for the `forexmentor-gateway` HTTP server.

use std::sync::Arc;

use forexmentor_backend::QueryClient;
use forexmentor_gateway::{config::GatewayConfig, routes::create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match GatewayConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let client = match QueryClient::new(&config.backend) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "failed to create backend client");
            std::process::exit(1);
        }
    };
    info!(
        endpoint = %client.query_url(),
        timeout = ?config.backend.timeout,
        "backend client ready"
    );

    let app = create_router(Arc::new(client));

    let listener = match tokio::net::TcpListener::bind(&config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %config.listen_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %config.listen_addr, "forexmentor-gateway listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
