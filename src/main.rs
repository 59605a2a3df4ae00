// src/main.rs
use std::net::{IpAddr, SocketAddr};

use dotenvy::dotenv;
use product_catalog::{build_app, config::Config, store, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    // Open the storage backend named by DATABASE_URI
    let product_store = match store::connect(&config).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Failed to open product store");
            std::process::exit(1);
        }
    };

    let app = build_app(AppState::new(product_store));

    // Try port..port+20 to avoid crash when address is in use
    let Some((listener, addr)) = bind_first_free(config.host, config.port).await else {
        tracing::error!("Failed to bind to any port starting at {} on {}", config.port, config.host);
        std::process::exit(1);
    };
    tracing::info!("Server running on {}", addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
    }
}

async fn bind_first_free(host: IpAddr, base_port: u16) -> Option<(TcpListener, SocketAddr)> {
    for offset in 0u16..=20 {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::from((host, port));
        match TcpListener::bind(addr).await {
            Ok(l) => return Some((l, addr)),
            Err(e) => {
                if offset == 0 {
                    tracing::warn!(%addr, error = %e, "Port in use, trying next");
                }
            }
        }
    }
    None
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
