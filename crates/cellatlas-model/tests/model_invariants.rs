use cellatlas_model::{
    CaseId, IncidentId, IssueType, LocationType, MaintenanceId, MaintenanceWindow,
    NetworkTechnology, ResolvedCase, Severity, SiteId, SiteStatus, ID_MAX_LEN,
};
use chrono::{Duration, TimeZone, Utc};

#[test]
fn ids_reject_hidden_trimming() {
    assert!(SiteId::parse("VLC-001").is_ok());
    assert!(SiteId::parse(" VLC-001").is_err());
    assert!(SiteId::parse("VLC-001 ").is_err());
    assert!(IncidentId::parse("").is_err());
    assert!(MaintenanceId::parse("MAINT-2024-0891").is_ok());
    assert!(CaseId::parse("CASE-5G-0782").is_ok());
}

#[test]
fn ids_enforce_max_length() {
    let too_long = "x".repeat(ID_MAX_LEN + 1);
    assert!(SiteId::parse(&too_long).is_err());
    assert!(CaseId::parse(&too_long).is_err());
}

#[test]
fn severity_parse_is_case_insensitive() {
    assert_eq!(Severity::parse("high").expect("high"), Severity::High);
    assert_eq!(Severity::parse("HIGH").expect("HIGH"), Severity::High);
    assert_eq!(Severity::parse("Critical").expect("mixed"), Severity::Critical);
    assert!(Severity::parse("urgent").is_err());
}

#[test]
fn location_type_parse_is_case_insensitive() {
    assert_eq!(
        LocationType::parse("Urban").expect("urban"),
        LocationType::Urban
    );
    assert_eq!(
        LocationType::parse("UNDERGROUND").expect("underground"),
        LocationType::Underground
    );
    assert!(LocationType::parse("suburban").is_err());
}

#[test]
fn issue_type_and_statuses_parse_exact_labels_only() {
    assert_eq!(
        IssueType::parse("call_drop").expect("call_drop"),
        IssueType::CallDrop
    );
    assert!(IssueType::parse("CALL_DROP").is_err());
    assert!(SiteStatus::parse("degraded").is_ok());
    assert!(SiteStatus::parse("offline").is_err());
}

#[test]
fn network_technology_uses_commercial_labels() {
    assert_eq!(
        NetworkTechnology::parse("5G NSA").expect("nsa"),
        NetworkTechnology::FiveGNsa
    );
    assert_eq!(NetworkTechnology::FiveGSa.as_label(), "5G SA");
    assert!(NetworkTechnology::parse("5g nsa").is_err());
    assert!(NetworkTechnology::parse("3G").is_err());
}

#[test]
fn maintenance_window_rejects_inverted_interval() {
    let start = Utc.with_ymd_and_hms(2024, 11, 4, 2, 0, 0).single().expect("start");
    let window = MaintenanceWindow::new(
        MaintenanceId::parse("MAINT-1").expect("id"),
        vec![SiteId::parse("VLC-002").expect("site")],
        start,
        start - Duration::hours(1),
        "fiber splice",
        "brief outage",
        vec!["5G NSA".to_string()],
        false,
    );
    assert!(window.validate().is_err());

    let ok = MaintenanceWindow::new(
        MaintenanceId::parse("MAINT-2").expect("id"),
        vec![SiteId::parse("VLC-002").expect("site")],
        start,
        start + Duration::hours(4),
        "fiber splice",
        "brief outage",
        vec!["5G NSA".to_string()],
        false,
    );
    assert!(ok.validate().is_ok());
    assert!(ok.is_active_at(start));
    assert!(ok.is_active_at(start + Duration::hours(4)));
    assert!(!ok.is_active_at(start + Duration::hours(5)));
}

#[test]
fn resolved_case_bounds_success_rate() {
    let case = |rate: f64| {
        ResolvedCase::new(
            CaseId::parse("CASE-1").expect("id"),
            "desc",
            "cause",
            "fix",
            4.0,
            rate,
            LocationType::Urban,
        )
    };
    assert!(case(0.0).validate().is_ok());
    assert!(case(1.0).validate().is_ok());
    assert!(case(1.01).validate().is_err());
    assert!(case(-0.1).validate().is_err());
}
