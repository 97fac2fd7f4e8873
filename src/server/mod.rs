//! HTTP transport for the encryption engine.
//!
//! A thin axum layer: multipart in, raw bytes plus metadata headers (or a
//! JSON envelope) out. All cipher state lives in the [`Engine`]; the
//! server adds CORS (the metadata headers must be readable by browser
//! clients), request tracing, and an upload size cap.

pub mod error;
pub mod routes;
pub mod token;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderName;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{
    APP_NAME, HEADER_ALGORITHM, HEADER_IV_BASE64, HEADER_ORIGINAL_FILENAME, ServiceConfig,
};
use crate::crypto::{Engine, EngineConfig};
use crate::secret::Secret;

/// Shared per-request state.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
    pub jwt_secret: Option<Arc<Secret>>,
}

/// Builds the full application router from a service configuration.
///
/// Separated from [`serve`] so tests can drive the router directly.
pub fn app(config: ServiceConfig) -> Router {
    let state = AppState {
        engine: Arc::new(Engine::new(EngineConfig::new(config.master_secret))),
        jwt_secret: config.jwt_secret.map(Arc::new),
    };

    Router::new()
        .route("/api/health", get(routes::health))
        .route("/api/encrypt", post(routes::encrypt))
        .route("/api/decrypt", post(routes::decrypt))
        .route("/api/verify-token", post(token::verify_token))
        .layer(DefaultBodyLimit::max(config.max_upload))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the listener and serves until a shutdown signal arrives.
pub async fn serve(config: ServiceConfig) -> Result<()> {
    let bind = config.bind;
    let router = app(config);

    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;

    tracing::info!(addr = %bind, service = APP_NAME, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")
}

/// Allow-all CORS with the metadata headers exposed, so browser clients
/// can read the IV and filename off encrypt responses.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([
            HeaderName::from_static(HEADER_ALGORITHM),
            HeaderName::from_static(HEADER_IV_BASE64),
            HeaderName::from_static(HEADER_ORIGINAL_FILENAME),
        ])
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
