//! HTTP service for the licensing validator

mod handlers;

use crate::config::LicensingConfig;
use crate::error::{ErrorExt, Result};
use crate::licensing::LicenseSource;
use crate::validation::UploadPolicy;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared, read-only state of the service
pub struct AppState {
    pub config: LicensingConfig,
    pub source: Arc<dyn LicenseSource>,
    pub policy: UploadPolicy,
}

impl AppState {
    pub fn new(config: LicensingConfig, source: Arc<dyn LicenseSource>) -> Self {
        let policy = config.upload_policy();
        Self {
            config,
            source,
            policy,
        }
    }

    /// State using the source configured in `config`
    pub fn from_config(config: LicensingConfig) -> Self {
        let source = config.license_source();
        Self::new(config, source)
    }
}

/// API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Build the API router
pub fn build_router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/api/health", get(handlers::health_check))
        .route("/api/licensing/validate", post(handlers::validate_upload))
        .route("/api/licensing/export", post(handlers::export_results))
        .route("/api/licenses", get(handlers::list_licenses))
        .route("/api/licenses/expiring", get(handlers::expiring_licenses))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve until ctrl-c
pub async fn serve(state: AppState) -> Result<()> {
    let addr = state.config.bind.clone();
    let source = state.source.describe();
    let app = build_router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .to_licensing(format!("failed to bind {}", addr))?;

    info!("Starting licensing service on {} with reference data from {}", addr, source);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .to_licensing("server error")
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
