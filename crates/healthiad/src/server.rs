//! HTTP server for healthiad

use crate::config::Config;
use crate::error::unexpected_error;
use crate::routes;
use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use healthia_shared::{DiseaseCatalog, InferenceEngine, ModelInfo};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Application state shared across handlers. Nothing in it changes after
/// startup, so handlers read it without locking.
pub struct AppState {
    pub config: Config,
    /// `None` when the service started without a usable model bundle
    pub engine: Option<Arc<InferenceEngine>>,
    pub catalog: &'static DiseaseCatalog,
}

impl AppState {
    pub fn new(config: Config, engine: Option<InferenceEngine>) -> Self {
        Self::with_catalog(config, engine, DiseaseCatalog::builtin())
    }

    pub fn with_catalog(
        config: Config,
        engine: Option<InferenceEngine>,
        catalog: &'static DiseaseCatalog,
    ) -> Self {
        Self {
            config,
            engine: engine.map(Arc::new),
            catalog,
        }
    }

    pub fn model_info(&self) -> ModelInfo {
        match &self.engine {
            Some(engine) => engine.info(),
            None => ModelInfo::unloaded(self.catalog),
        }
    }
}

/// Assemble routes and middleware
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server.allowed_origins);
    let max_body = state.config.server.max_body_bytes;
    let prefix = state.config.app.api_prefix.clone();
    let state = Arc::new(state);

    Router::new()
        .merge(routes::api_routes(&prefix))
        .merge(routes::docs_routes())
        .fallback(routes::not_found)
        .with_state(state)
        // Replaces axum's 2 MiB default; overruns reach handlers as 413 rejections
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(catch_panic_layer())
}

/// CORS policy for the configured origins. Credentials are allowed only
/// with an explicit origin list.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(cors::Any)
            .allow_methods(cors::Any)
            .allow_headers(cors::Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    info!("CORS configured for: {:?}", allowed_origins);

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Turns a panicking handler into a generic 500 instead of a dropped
/// connection
pub fn catch_panic_layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let reason = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    error!("Unhandled error: {}", reason);

    (StatusCode::INTERNAL_SERVER_ERROR, Json(unexpected_error())).into_response()
}

/// Run the HTTP server until Ctrl-C or SIGTERM
pub async fn run(state: AppState) -> Result<()> {
    let addr = state.config.bind_addr();
    let base_url = state.config.api_base_url();
    let name = state.config.app.name.clone();
    let version = state.config.app.version.clone();
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("======================================================================");
    info!("  {} v{} starting", name, version);
    info!("  Docs available at: http://{}{}", addr, routes::DOCS_PATH);
    info!("  API available at:  {}", base_url);
    info!("======================================================================");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    info!("Shutdown signal received, draining connections");
}
