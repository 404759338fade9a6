use cellatlas_catalog::NetworkCatalog;
use cellatlas_model::LocationType;
use cellatlas_query::{
    analyze, build_context, classify_location_type, recommend_products, DiagnosticRequest,
    INCIDENT_PREVIEW_CHARS, NO_CONTEXT_SENTINEL,
};
use chrono::{DateTime, TimeZone, Utc};

fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 4, 12, 0, 0).single().expect("anchor")
}

fn now() -> DateTime<Utc> {
    anchor()
}

fn catalog() -> NetworkCatalog {
    NetworkCatalog::builtin(anchor()).expect("builtin catalog")
}

fn request(location: &str, issue_type: &str, symptoms: &[&str]) -> DiagnosticRequest {
    DiagnosticRequest {
        location: location.to_string(),
        issue_type: issue_type.to_string(),
        symptoms: symptoms.iter().map(|s| (*s).to_string()).collect(),
        network_technology: None,
    }
}

#[test]
fn classification_is_first_match_wins_in_fixed_order() {
    assert_eq!(
        classify_location_type("poligono near metro"),
        LocationType::Industrial
    );
    assert_eq!(
        classify_location_type("autovia junto al tunel"),
        LocationType::Highway
    );
    assert_eq!(classify_location_type("Metro L1"), LocationType::Underground);
    assert_eq!(classify_location_type("Valencia Centro"), LocationType::Urban);
    assert_eq!(
        classify_location_type("zona industrial"),
        LocationType::Industrial
    );
    assert_eq!(classify_location_type("carretera N-332"), LocationType::Highway);
    assert_eq!(classify_location_type(""), LocationType::Urban);
}

#[test]
fn bucket_matching_is_bidirectional_containment() {
    let catalog = catalog();
    let now = anchor();

    // Request location contains the bucket key.
    let report = analyze(&catalog, &request("downtown valencia", "speed", &[]), now);
    let ids: Vec<&str> = report
        .cell_sites_nearby
        .iter()
        .map(|s| s.site_id.as_str())
        .collect();
    assert_eq!(ids, vec!["VLC-001", "VLC-002", "VLC-003"]);

    // Bucket key contains the request location.
    let report = analyze(&catalog, &request("valen", "speed", &[]), now);
    assert_eq!(report.cell_sites_nearby.len(), 3);
    assert!(report.context_found);
}

#[test]
fn incident_resolution_uses_location_substring_only() {
    let catalog = catalog();
    let report = analyze(&catalog, &request("paterna", "coverage", &[]), now());
    let ids: Vec<&str> = report
        .active_incidents
        .iter()
        .map(|i| i.incident_id.as_str())
        .collect();
    assert_eq!(ids, vec!["INC-2024-1138"]);
}

#[test]
fn valencia_centro_interference_composes_all_sources() {
    let catalog = catalog();
    let report = analyze(
        &catalog,
        &request("Valencia Centro", "interference", &["signal drop"]),
        now(),
    );
    assert!(report.context_found);
    let site_ids: Vec<&str> = report
        .cell_sites_nearby
        .iter()
        .map(|s| s.site_id.as_str())
        .collect();
    assert_eq!(site_ids, vec!["VLC-001", "VLC-002", "VLC-003"]);
    let incident_ids: Vec<&str> = report
        .active_incidents
        .iter()
        .map(|i| i.incident_id.as_str())
        .collect();
    assert_eq!(incident_ids, vec!["INC-2024-1142"]);
    let product_names: Vec<&str> = report
        .recommended_products
        .iter()
        .map(|p| p.product_name.as_str())
        .collect();
    assert_eq!(
        product_names,
        vec![
            "Cellatlas Interference Detection",
            "Cellatlas AI Agents - Anomaly Detection"
        ]
    );
    assert_eq!(report.similar_cases.len(), 1);
    assert_eq!(report.similar_cases[0].location_type, LocationType::Urban);
    assert_eq!(report.scheduled_maintenance.len(), 1);
}

#[test]
fn anomaly_detection_is_always_recommended_last() {
    let catalog = catalog();

    let none = recommend_products(&catalog, "latency", &[]);
    let names: Vec<&str> = none.iter().map(|p| p.product_name.as_str()).collect();
    assert_eq!(names, vec!["Cellatlas AI Agents - Anomaly Detection"]);

    let coverage = recommend_products(&catalog, "coverage", &[]);
    let names: Vec<&str> = coverage.iter().map(|p| p.product_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Cellatlas Geolocation - Virtual Drive Testing",
            "Cellatlas AI Agents - Anomaly Detection"
        ]
    );

    // Spanish alias triggers the same rule.
    let cobertura = recommend_products(&catalog, "problema de cobertura", &[]);
    assert_eq!(cobertura.len(), 2);

    // Both optional rules fire; order is interference, geolocation, anomaly.
    let both = recommend_products(
        &catalog,
        "interference and coverage",
        &["signal flapping".to_string()],
    );
    let names: Vec<&str> = both.iter().map(|p| p.product_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Cellatlas Interference Detection",
            "Cellatlas Geolocation - Virtual Drive Testing",
            "Cellatlas AI Agents - Anomaly Detection"
        ]
    );
}

#[test]
fn symptom_join_matches_signal_across_any_symptom() {
    let catalog = catalog();
    let products = recommend_products(
        &catalog,
        "speed",
        &["slow data".to_string(), "weak SIGNAL indoors".to_string()],
    );
    assert_eq!(
        products[0].product_name,
        "Cellatlas Interference Detection"
    );
}

#[test]
fn narrative_lines_are_conditional_and_ordered() {
    let catalog = catalog();
    let report = analyze(
        &catalog,
        &request("Valencia Centro", "interference", &[]),
        now(),
    );
    let lines: Vec<&str> = report.additional_context.lines().collect();
    assert_eq!(lines[0], "Hay 3 sites en el área: VLC-001, VLC-002, VLC-003");
    assert_eq!(lines[1], "⚠️ ALERTA: Hay 1 incidencias activas en la zona");
    assert!(lines[2].starts_with("  - INC-2024-1142: "));
    assert!(lines[2].ends_with("..."));
    assert_eq!(
        lines[3],
        "🔧 Hay mantenimiento programado activo que puede estar afectando"
    );
    assert_eq!(
        lines[4],
        "📚 Se encontraron 1 casos similares resueltos con éxito"
    );
    assert_eq!(lines.len(), 5);
}

#[test]
fn incident_description_preview_is_150_chars_plus_ellipsis() {
    let catalog = catalog();
    let incident = &catalog.incidents()[0];
    let context = build_context(&[], std::slice::from_ref(incident), &[], &[]);
    let preview_line = context.lines().nth(1).expect("incident line");
    let expected_preview: String = incident
        .description
        .chars()
        .take(INCIDENT_PREVIEW_CHARS)
        .collect();
    assert_eq!(
        preview_line,
        format!("  - INC-2024-1142: {expected_preview}...")
    );
}

#[test]
fn narrative_falls_back_to_the_sentinel() {
    assert_eq!(build_context(&[], &[], &[], &[]), NO_CONTEXT_SENTINEL);
}

#[test]
fn context_found_ignores_maintenance_and_cases() {
    let catalog = catalog();
    // No bucket or incident matches "sevilla", but active maintenance and
    // urban cases still resolve.
    let report = analyze(&catalog, &request("sevilla", "latency", &[]), now());
    assert!(!report.context_found);
    assert_eq!(report.scheduled_maintenance.len(), 1);
    assert!(!report.similar_cases.is_empty());
    assert_ne!(report.additional_context, NO_CONTEXT_SENTINEL);
}

#[test]
fn similar_cases_truncate_to_top_three_after_sorting() {
    use cellatlas_model::{CaseId, ResolvedCase};
    let base = catalog();
    let case = |id: &str, rate: f64| {
        ResolvedCase::new(
            CaseId::parse(id).expect("id"),
            "desc",
            "cause",
            "fix",
            1.0,
            rate,
            LocationType::Urban,
        )
    };
    let catalog = NetworkCatalog::new(
        base.buckets().to_vec(),
        base.incidents().to_vec(),
        base.maintenance().to_vec(),
        base.products().to_vec(),
        vec![
            case("CASE-A", 0.7),
            case("CASE-B", 0.99),
            case("CASE-C", 0.8),
            case("CASE-D", 0.9),
        ],
    );
    let report = analyze(&catalog, &request("valencia", "speed", &[]), now());
    let ids: Vec<&str> = report
        .similar_cases
        .iter()
        .map(|c| c.case_id.as_str())
        .collect();
    assert_eq!(ids, vec!["CASE-B", "CASE-D", "CASE-C"]);
    // The narrative counts the full matched list, not the truncated slice.
    assert!(report
        .additional_context
        .contains("4 casos similares resueltos con éxito"));
}
