// SPDX-License-Identifier: Apache-2.0

//! The diagnostic aggregator: one free-text request fanned out across every
//! catalog table, classified with a keyword heuristic, and summarized into a
//! human-readable narrative.

use crate::filters::{filter_cases, filter_maintenance};
use cellatlas_catalog::{
    NetworkCatalog, PRODUCT_ANOMALY_DETECTION, PRODUCT_GEOLOCATION, PRODUCT_INTERFERENCE_DETECTION,
};
use cellatlas_model::{CellSite, Incident, LocationType, MaintenanceWindow, Product, ResolvedCase};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Narrative fallback when no rule produced a line.
pub const NO_CONTEXT_SENTINEL: &str = "No hay contexto adicional disponible";

/// Incident descriptions are previewed at this many characters in the
/// narrative, always followed by an ellipsis.
pub const INCIDENT_PREVIEW_CHARS: usize = 150;

/// Similar cases carried in the response; the full sorted list feeds the
/// narrative before truncation.
pub const MAX_SIMILAR_CASES: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticRequest {
    pub location: String,
    pub issue_type: String,
    pub symptoms: Vec<String>,
    pub network_technology: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    pub context_found: bool,
    pub cell_sites_nearby: Vec<CellSite>,
    pub active_incidents: Vec<Incident>,
    pub scheduled_maintenance: Vec<MaintenanceWindow>,
    pub similar_cases: Vec<ResolvedCase>,
    pub recommended_products: Vec<Product>,
    pub additional_context: String,
}

/// Keyword classification of a free-text location, first match wins. The
/// rule order is fixed: industrial before highway before underground, urban
/// as the default.
#[must_use]
pub fn classify_location_type(location: &str) -> LocationType {
    let key = location.to_lowercase();
    if key.contains("poligono") || key.contains("industrial") {
        LocationType::Industrial
    } else if key.contains("autovia") || key.contains("carretera") {
        LocationType::Highway
    } else if key.contains("metro") || key.contains("tunel") {
        LocationType::Underground
    } else {
        LocationType::Urban
    }
}

/// Rule-based product recommendation. Rules append in a fixed order and are
/// never deduplicated; the anomaly-detection product is always appended
/// last.
#[must_use]
pub fn recommend_products(
    catalog: &NetworkCatalog,
    issue_type: &str,
    symptoms: &[String],
) -> Vec<Product> {
    let issue = issue_type.to_lowercase();
    let joined_symptoms = symptoms.join(" ").to_lowercase();
    let mut recommended = Vec::new();
    if issue.contains("interference") || joined_symptoms.contains("signal") {
        if let Some(p) = catalog.product(PRODUCT_INTERFERENCE_DETECTION) {
            recommended.push(p.clone());
        }
    }
    if issue.contains("coverage") || issue.contains("cobertura") {
        if let Some(p) = catalog.product(PRODUCT_GEOLOCATION) {
            recommended.push(p.clone());
        }
    }
    if let Some(p) = catalog.product(PRODUCT_ANOMALY_DETECTION) {
        recommended.push(p.clone());
    }
    recommended
}

/// Builds the narrative from an ordered list of optional rules, one line set
/// per source, joined with newlines. Falls back to the fixed sentinel when
/// nothing qualified. Case count reflects the full matched list, not the
/// truncated response slice.
#[must_use]
pub fn build_context(
    sites: &[CellSite],
    incidents: &[Incident],
    maintenance: &[MaintenanceWindow],
    cases: &[ResolvedCase],
) -> String {
    let mut parts: Vec<String> = Vec::new();
    if !sites.is_empty() {
        let ids: Vec<&str> = sites.iter().map(|s| s.site_id.as_str()).collect();
        parts.push(format!(
            "Hay {} sites en el área: {}",
            sites.len(),
            ids.join(", ")
        ));
    }
    if !incidents.is_empty() {
        parts.push(format!(
            "⚠️ ALERTA: Hay {} incidencias activas en la zona",
            incidents.len()
        ));
        for inc in incidents {
            let preview: String = inc.description.chars().take(INCIDENT_PREVIEW_CHARS).collect();
            parts.push(format!("  - {}: {}...", inc.incident_id.as_str(), preview));
        }
    }
    if !maintenance.is_empty() {
        parts.push("🔧 Hay mantenimiento programado activo que puede estar afectando".to_string());
    }
    if !cases.is_empty() {
        parts.push(format!(
            "📚 Se encontraron {} casos similares resueltos con éxito",
            cases.len()
        ));
    }
    if parts.is_empty() {
        NO_CONTEXT_SENTINEL.to_string()
    } else {
        parts.join("\n")
    }
}

/// Runs the whole aggregation for one request. `now` is read once by the
/// caller so the maintenance test and any future time-dependent rule observe
/// the same instant.
#[must_use]
pub fn analyze(
    catalog: &NetworkCatalog,
    request: &DiagnosticRequest,
    now: DateTime<Utc>,
) -> DiagnosticReport {
    let location_key = request.location.to_lowercase();

    // Looser rule than the sites endpoint: bucket key and request location
    // match on containment in either direction, so one request can union
    // several buckets.
    let mut cell_sites: Vec<CellSite> = Vec::new();
    for bucket in catalog.buckets() {
        if bucket.key.contains(&location_key) || location_key.contains(&bucket.key) {
            cell_sites.extend(bucket.sites.iter().cloned());
        }
    }

    let active_incidents: Vec<Incident> = catalog
        .incidents()
        .iter()
        .filter(|inc| inc.affected_area.to_lowercase().contains(&location_key))
        .cloned()
        .collect();

    let scheduled_maintenance: Vec<MaintenanceWindow> = filter_maintenance(catalog, true, now)
        .into_iter()
        .cloned()
        .collect();

    let location_type = classify_location_type(&location_key);
    let similar_cases: Vec<ResolvedCase> = filter_cases(catalog, Some(location_type))
        .into_iter()
        .cloned()
        .collect();

    let recommended_products = recommend_products(catalog, &request.issue_type, &request.symptoms);

    let additional_context = build_context(
        &cell_sites,
        &active_incidents,
        &scheduled_maintenance,
        &similar_cases,
    );

    // Sites or incidents only; maintenance and case hits deliberately do not
    // flip this flag.
    let context_found = !cell_sites.is_empty() || !active_incidents.is_empty();

    DiagnosticReport {
        context_found,
        cell_sites_nearby: cell_sites,
        active_incidents,
        scheduled_maintenance,
        similar_cases: similar_cases
            .into_iter()
            .take(MAX_SIMILAR_CASES)
            .collect(),
        recommended_products,
        additional_context,
    }
}
