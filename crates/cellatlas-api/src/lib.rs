#![forbid(unsafe_code)]
//! Boundary types shared between the HTTP server and its tests: parameter
//! parsing, the diagnostics request DTO, and the wire error envelope.

mod dto;
mod errors;
pub mod params;

pub use dto::DiagnosticRequestDto;
pub use errors::{ApiError, ApiErrorCode};

use serde_json::{json, Value};

pub const CRATE_NAME: &str = "cellatlas-api";
pub const SERVICE_NAME: &str = "Cellatlas Knowledge Base API";

/// The root/health document: service identity plus the public endpoint list.
#[must_use]
pub fn service_info(version: &str) -> Value {
    json!({
        "service": SERVICE_NAME,
        "status": "online",
        "version": version,
        "endpoints": [
            "/network/sites",
            "/network/incidents",
            "/network/maintenance",
            "/solutions/products",
            "/solutions/cases",
            "/diagnostics/analyze"
        ]
    })
}
