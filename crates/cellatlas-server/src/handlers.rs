#![deny(clippy::redundant_clone)]

use crate::AppState;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use cellatlas_api::params::{
    parse_cases_params, parse_incidents_params, parse_maintenance_params, parse_products_params,
    parse_sites_params,
};
use cellatlas_api::{service_info, ApiError, DiagnosticRequestDto};
use cellatlas_model::{CellSite, Incident, MaintenanceWindow, Product, ResolvedCase};
use cellatlas_query::{
    analyze, filter_cases, filter_incidents, filter_maintenance, filter_products, lookup_sites,
    IncidentFilter, SiteLookupError,
};
use chrono::Utc;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::atomic::Ordering;
use std::time::Instant;
use tracing::info;

pub(crate) fn api_error_response(status: StatusCode, err: ApiError) -> Response {
    (status, Json(json!({"error": err}))).into_response()
}

pub(crate) fn make_request_id(state: &AppState) -> String {
    let id = state.request_id_seed.fetch_add(1, Ordering::Relaxed);
    format!("req-{id:016x}")
}

pub(crate) fn propagated_request_id(headers: &HeaderMap, state: &AppState) -> String {
    if let Some(raw) = headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    make_request_id(state)
}

pub(crate) fn with_request_id(mut response: Response, request_id: &str) -> Response {
    if let Ok(v) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert("x-request-id", v);
    }
    response
}

pub(crate) async fn root_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let resp = Json(service_info(env!("CARGO_PKG_VERSION"))).into_response();
    state
        .metrics
        .observe_request("/", StatusCode::OK, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn healthz_handler(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();
    let request_id = make_request_id(&state);
    let resp = (StatusCode::OK, "ok").into_response();
    state
        .metrics
        .observe_request("/healthz", StatusCode::OK, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let body = state.metrics.render_prometheus().await;
    let mut resp = (StatusCode::OK, body).into_response();
    resp.headers_mut().insert(
        "content-type",
        HeaderValue::from_static("text/plain; version=0.0.4"),
    );
    resp
}

pub(crate) async fn sites_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<BTreeMap<String, String>>,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let parsed = match parse_sites_params(&params) {
        Ok(v) => v,
        Err(err) => {
            let resp = api_error_response(StatusCode::BAD_REQUEST, err);
            state
                .metrics
                .observe_request("/network/sites", StatusCode::BAD_REQUEST, started.elapsed())
                .await;
            return with_request_id(resp, &request_id);
        }
    };
    if state.api.log_requests {
        info!(request_id = %request_id, location = %parsed.location, "site lookup");
    }
    match lookup_sites(&state.catalog, &parsed.location) {
        Ok(sites) => {
            let rows: Vec<CellSite> = sites.to_vec();
            let resp = Json(rows).into_response();
            state
                .metrics
                .observe_request("/network/sites", StatusCode::OK, started.elapsed())
                .await;
            with_request_id(resp, &request_id)
        }
        Err(SiteLookupError::UnknownLocation {
            location,
            known_keys,
        }) => {
            let resp = api_error_response(
                StatusCode::NOT_FOUND,
                ApiError::unknown_location(&location, &known_keys),
            );
            state
                .metrics
                .observe_request("/network/sites", StatusCode::NOT_FOUND, started.elapsed())
                .await;
            with_request_id(resp, &request_id)
        }
    }
}

pub(crate) async fn incidents_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<BTreeMap<String, String>>,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let parsed = match parse_incidents_params(&params) {
        Ok(v) => v,
        Err(err) => {
            let resp = api_error_response(StatusCode::BAD_REQUEST, err);
            state
                .metrics
                .observe_request(
                    "/network/incidents",
                    StatusCode::BAD_REQUEST,
                    started.elapsed(),
                )
                .await;
            return with_request_id(resp, &request_id);
        }
    };
    let filter = IncidentFilter {
        location: parsed.location,
        severity: parsed.severity,
    };
    let rows: Vec<Incident> = filter_incidents(&state.catalog, &filter)
        .into_iter()
        .cloned()
        .collect();
    let resp = Json(rows).into_response();
    state
        .metrics
        .observe_request("/network/incidents", StatusCode::OK, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn maintenance_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<BTreeMap<String, String>>,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let parsed = match parse_maintenance_params(&params) {
        Ok(v) => v,
        Err(err) => {
            let resp = api_error_response(StatusCode::BAD_REQUEST, err);
            state
                .metrics
                .observe_request(
                    "/network/maintenance",
                    StatusCode::BAD_REQUEST,
                    started.elapsed(),
                )
                .await;
            return with_request_id(resp, &request_id);
        }
    };
    // One wall-clock read per request; the active-window test must not see
    // two different nows.
    let now = Utc::now();
    let rows: Vec<MaintenanceWindow> = filter_maintenance(&state.catalog, parsed.active_only, now)
        .into_iter()
        .cloned()
        .collect();
    let resp = Json(rows).into_response();
    state
        .metrics
        .observe_request("/network/maintenance", StatusCode::OK, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn products_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<BTreeMap<String, String>>,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let parsed = match parse_products_params(&params) {
        Ok(v) => v,
        Err(err) => {
            let resp = api_error_response(StatusCode::BAD_REQUEST, err);
            state
                .metrics
                .observe_request(
                    "/solutions/products",
                    StatusCode::BAD_REQUEST,
                    started.elapsed(),
                )
                .await;
            return with_request_id(resp, &request_id);
        }
    };
    let rows: Vec<Product> = filter_products(&state.catalog, parsed.category.as_deref())
        .into_iter()
        .cloned()
        .collect();
    let resp = Json(rows).into_response();
    state
        .metrics
        .observe_request("/solutions/products", StatusCode::OK, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn cases_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<BTreeMap<String, String>>,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let parsed = match parse_cases_params(&params) {
        Ok(v) => v,
        Err(err) => {
            let resp = api_error_response(StatusCode::BAD_REQUEST, err);
            state
                .metrics
                .observe_request(
                    "/solutions/cases",
                    StatusCode::BAD_REQUEST,
                    started.elapsed(),
                )
                .await;
            return with_request_id(resp, &request_id);
        }
    };
    let rows: Vec<ResolvedCase> = filter_cases(&state.catalog, parsed.location_type)
        .into_iter()
        .cloned()
        .collect();
    let resp = Json(rows).into_response();
    state
        .metrics
        .observe_request("/solutions/cases", StatusCode::OK, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn diagnostics_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<DiagnosticRequestDto>,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let request = match dto.validate() {
        Ok(v) => v,
        Err(err) => {
            let resp = api_error_response(StatusCode::UNPROCESSABLE_ENTITY, err);
            state
                .metrics
                .observe_request(
                    "/diagnostics/analyze",
                    StatusCode::UNPROCESSABLE_ENTITY,
                    started.elapsed(),
                )
                .await;
            return with_request_id(resp, &request_id);
        }
    };
    if state.api.log_requests {
        info!(request_id = %request_id, location = %request.location, issue_type = %request.issue_type, "diagnostic analysis");
    }
    let now = Utc::now();
    let report = analyze(&state.catalog, &request, now);
    let resp = Json(report).into_response();
    state
        .metrics
        .observe_request("/diagnostics/analyze", StatusCode::OK, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}
