#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use cellatlas_catalog::NetworkCatalog;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

mod config;
mod handlers;
mod middleware;
mod telemetry;

pub use config::ApiConfig;
pub use telemetry::RequestMetrics;

pub const CRATE_NAME: &str = "cellatlas-server";

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<NetworkCatalog>,
    pub api: ApiConfig,
    pub(crate) metrics: Arc<RequestMetrics>,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Arc<NetworkCatalog>) -> Self {
        Self::with_config(catalog, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(catalog: Arc<NetworkCatalog>, api: ApiConfig) -> Self {
        Self {
            catalog,
            api,
            metrics: Arc::new(RequestMetrics::default()),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/healthz", get(handlers::healthz_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .route("/network/sites", get(handlers::sites_handler))
        .route("/network/incidents", get(handlers::incidents_handler))
        .route("/network/maintenance", get(handlers::maintenance_handler))
        .route("/solutions/products", get(handlers::products_handler))
        .route("/solutions/cases", get(handlers::cases_handler))
        .route("/diagnostics/analyze", post(handlers::diagnostics_handler))
        .layer(axum::middleware::from_fn(middleware::cors_middleware))
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .with_state(state)
}
