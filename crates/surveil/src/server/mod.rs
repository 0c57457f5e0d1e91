mod cli;
mod handlers;

pub use cli::ServeOptions;

use crate::prelude::{eprintln, *};
use crate::scryfall::{ScryfallClient, ScryfallConfig};
use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// State shared by every request: the pooled Scryfall client
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: ScryfallClient,
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let config = ScryfallConfig::try_from(options.scryfall)?;
    let client = ScryfallClient::new(&config)?;

    if global.verbose {
        eprintln!(
            "Scryfall: {} (max {} connections, {} idle, keep-alive {:?})",
            config.base_url,
            config.max_connections,
            config.max_idle_connections,
            config.keep_alive
        );
    }

    let addr = format!("{}:{}", options.host, options.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Server running at http://{addr}");
    if global.verbose {
        eprintln!("Import endpoint: http://{}/api/moxfield-import", addr);
    }

    axum::serve(listener, router(client))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

pub fn router(client: ScryfallClient) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/moxfield-import", post(handlers::import_handler))
        .route("/api/moxfield", post(handlers::import_handler))
        .route("/api/health", get(handlers::health_handler))
        .layer(middleware::from_fn(log_request))
        .layer(cors)
        .with_state(Arc::new(AppState { client }))
}

async fn log_request(request: Request, next: Next) -> Response {
    log::info!(
        "Route hit: {} {} at {}",
        request.method(),
        request.uri(),
        chrono::Utc::now().to_rfc3339()
    );
    next.run(request).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Shutting down"),
        Err(e) => {
            log::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    }
}
