#![forbid(unsafe_code)]
//! Query layer over the read-only catalog. Every function here is pure:
//! wall-clock time is always an explicit parameter, and nothing performs
//! I/O, so every contract is testable with a fixed instant.

mod diagnostics;
mod filters;

pub use diagnostics::{
    analyze, build_context, classify_location_type, recommend_products, DiagnosticReport,
    DiagnosticRequest, INCIDENT_PREVIEW_CHARS, MAX_SIMILAR_CASES, NO_CONTEXT_SENTINEL,
};
pub use filters::{
    filter_cases, filter_incidents, filter_maintenance, filter_products, lookup_sites,
    IncidentFilter, SiteLookupError,
};

pub const CRATE_NAME: &str = "cellatlas-query";
