use cellatlas_catalog::{
    CatalogError, NetworkCatalog, SiteBucket, PRODUCT_ANOMALY_DETECTION, PRODUCT_GEOLOCATION,
    PRODUCT_INTERFERENCE_DETECTION, PRODUCT_TELCO_FABRIC,
};
use cellatlas_model::{
    CellSite, Coordinates, NetworkTechnology, Severity, SiteId, SiteStatus,
};
use chrono::{TimeZone, Utc};

fn anchor() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 4, 12, 0, 0).single().expect("anchor")
}

#[test]
fn builtin_catalog_passes_validation() {
    let catalog = NetworkCatalog::builtin(anchor()).expect("builtin");
    catalog.validate().expect("catalog invariants");
}

#[test]
fn bucket_keys_preserve_fixture_order() {
    let catalog = NetworkCatalog::builtin(anchor()).expect("builtin");
    assert_eq!(
        catalog.bucket_keys(),
        vec!["valencia", "paterna", "madrid", "barcelona"]
    );
}

#[test]
fn valencia_bucket_holds_three_sites_in_order() {
    let catalog = NetworkCatalog::builtin(anchor()).expect("builtin");
    let sites = catalog.sites_for_key("valencia").expect("valencia bucket");
    let ids: Vec<&str> = sites.iter().map(|s| s.site_id.as_str()).collect();
    assert_eq!(ids, vec!["VLC-001", "VLC-002", "VLC-003"]);
    assert_eq!(sites[0].status, SiteStatus::Active);
    assert_eq!(sites[1].status, SiteStatus::Degraded);
    assert_eq!(sites[2].status, SiteStatus::Active);
}

#[test]
fn bucket_lookup_ignores_ascii_case() {
    let catalog = NetworkCatalog::builtin(anchor()).expect("builtin");
    assert!(catalog.sites_for_key("Valencia").is_some());
    assert!(catalog.sites_for_key("BARCELONA").is_some());
    assert!(catalog.sites_for_key("sevilla").is_none());
}

#[test]
fn incident_fixture_offsets_anchor_on_now() {
    let now = anchor();
    let catalog = NetworkCatalog::builtin(now).expect("builtin");
    let incidents = catalog.incidents();
    assert_eq!(incidents.len(), 2);
    assert_eq!(incidents[0].incident_id.as_str(), "INC-2024-1142");
    assert_eq!(incidents[0].severity, Severity::High);
    assert_eq!(incidents[0].start_time, now - chrono::Duration::hours(18));
    assert_eq!(incidents[1].incident_id.as_str(), "INC-2024-1138");
    assert_eq!(incidents[1].severity, Severity::Medium);
}

#[test]
fn maintenance_fixture_window_contains_the_anchor() {
    let now = anchor();
    let catalog = NetworkCatalog::builtin(now).expect("builtin");
    let windows = catalog.maintenance();
    assert_eq!(windows.len(), 1);
    assert!(windows[0].is_active_at(now));
    assert!(windows[0].notification_sent);
}

#[test]
fn product_indices_match_the_recommendation_rules() {
    let catalog = NetworkCatalog::builtin(anchor()).expect("builtin");
    let name_at = |idx: usize| {
        catalog
            .product(idx)
            .map(|p| p.product_name.as_str())
            .expect("product index")
    };
    assert_eq!(
        name_at(PRODUCT_ANOMALY_DETECTION),
        "Cellatlas AI Agents - Anomaly Detection"
    );
    assert_eq!(
        name_at(PRODUCT_GEOLOCATION),
        "Cellatlas Geolocation - Virtual Drive Testing"
    );
    assert_eq!(name_at(PRODUCT_TELCO_FABRIC), "Cellatlas Telco Fabric");
    assert_eq!(
        name_at(PRODUCT_INTERFERENCE_DETECTION),
        "Cellatlas Interference Detection"
    );
}

#[test]
fn case_fixtures_cover_every_location_type() {
    let catalog = NetworkCatalog::builtin(anchor()).expect("builtin");
    let types: Vec<&str> = catalog
        .cases()
        .iter()
        .map(|c| c.location_type.as_str())
        .collect();
    assert_eq!(types, vec!["urban", "industrial", "highway", "underground"]);
}

#[test]
fn validation_rejects_a_site_in_two_buckets() {
    let site = |id: &str| {
        CellSite::new(
            SiteId::parse(id).expect("id"),
            "name",
            "location",
            vec![NetworkTechnology::Lte],
            1,
            SiteStatus::Active,
            1.0,
            Coordinates { lat: 0.0, lon: 0.0 },
        )
    };
    let base = NetworkCatalog::builtin(anchor()).expect("builtin");
    let catalog = NetworkCatalog::new(
        vec![
            SiteBucket::new("alpha", vec![site("DUP-1")]),
            SiteBucket::new("beta", vec![site("DUP-1")]),
        ],
        base.incidents().to_vec(),
        base.maintenance().to_vec(),
        base.products().to_vec(),
        base.cases().to_vec(),
    );
    match catalog.validate() {
        Err(CatalogError::DuplicateSiteId(id)) => assert_eq!(id, "DUP-1"),
        other => panic!("expected duplicate site id error, got {other:?}"),
    }
}

#[test]
fn validation_rejects_uppercase_bucket_keys() {
    let base = NetworkCatalog::builtin(anchor()).expect("builtin");
    let mut buckets = base.buckets().to_vec();
    buckets[0].key = "Valencia".to_string();
    let catalog = NetworkCatalog::new(
        buckets,
        base.incidents().to_vec(),
        base.maintenance().to_vec(),
        base.products().to_vec(),
        base.cases().to_vec(),
    );
    assert!(matches!(
        catalog.validate(),
        Err(CatalogError::NonLowercaseBucketKey(_))
    ));
}
