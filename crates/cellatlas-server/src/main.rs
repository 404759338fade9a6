#![forbid(unsafe_code)]

use cellatlas_catalog::NetworkCatalog;
use cellatlas_server::{build_router, ApiConfig, AppState};
use chrono::Utc;
use std::env;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("CELLATLAS_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let bind_addr = env::var("CELLATLAS_BIND").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let api_cfg = ApiConfig {
        bind_addr: bind_addr.clone(),
        max_body_bytes: env_usize("CELLATLAS_MAX_BODY_BYTES", 16 * 1024),
        log_requests: env_bool("CELLATLAS_LOG_REQUESTS", true),
    };

    // The catalog loads exactly once; every request afterwards is a pure
    // read over this shared snapshot.
    let catalog = NetworkCatalog::builtin(Utc::now())
        .map_err(|e| format!("catalog load failed: {e}"))?;
    catalog
        .validate()
        .map_err(|e| format!("catalog validation failed: {e}"))?;
    info!(
        buckets = catalog.buckets().len(),
        incidents = catalog.incidents().len(),
        maintenance = catalog.maintenance().len(),
        products = catalog.products().len(),
        cases = catalog.cases().len(),
        "network catalog loaded"
    );

    let state = AppState::with_config(Arc::new(catalog), api_cfg);
    let app = build_router(state);

    let addr: std::net::SocketAddr = bind_addr
        .parse()
        .map_err(|e| format!("invalid bind addr {bind_addr}: {e}"))?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("bind failed: {e}"))?;
    info!("cellatlas-server listening on {bind_addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|e| format!("server failed: {e}"))
}
