use super::*;

// =============================================================
// Severity boundaries
// =============================================================

#[test]
fn severity_low_below_twenty() {
    assert_eq!(Severity::from_percentage(0.0), Severity::Low);
    assert_eq!(Severity::from_percentage(19.99), Severity::Low);
}

#[test]
fn severity_medium_from_twenty() {
    assert_eq!(Severity::from_percentage(20.0), Severity::Medium);
    assert_eq!(Severity::from_percentage(49.9), Severity::Medium);
}

#[test]
fn severity_high_from_fifty() {
    assert_eq!(Severity::from_percentage(50.0), Severity::High);
    assert_eq!(Severity::from_percentage(74.9), Severity::High);
}

#[test]
fn severity_critical_from_seventy_five() {
    assert_eq!(Severity::from_percentage(75.0), Severity::Critical);
    assert_eq!(Severity::from_percentage(100.0), Severity::Critical);
}

#[test]
fn severity_labels() {
    assert_eq!(Severity::Low.label(), "Low Risk");
    assert_eq!(Severity::Critical.label(), "Critical");
    assert_eq!(Severity::High.css_modifier(), "high");
}

// =============================================================
// Request payloads
// =============================================================

#[test]
fn local_request_omits_provider() {
    let body = serde_json::to_value(PlagiarismCheckRequest::local(9)).expect("encode");
    assert_eq!(body, serde_json::json!({ "project_id": 9, "check_type": "local" }));
}

#[test]
fn premium_request_includes_provider() {
    let body = serde_json::to_value(PlagiarismCheckRequest::premium(9, PremiumProvider::Turnitin)).expect("encode");
    assert_eq!(
        body,
        serde_json::json!({ "project_id": 9, "check_type": "premium", "premium_provider": "turnitin" })
    );
}

#[test]
fn check_severity_uses_percentage() {
    let check: PlagiarismCheck =
        serde_json::from_str(r#"{"id":3,"similarity_percentage":62.5}"#).expect("check");
    assert_eq!(check.severity(), Severity::High);
}

#[test]
fn check_reads_either_percentage_field() {
    let check: PlagiarismCheck =
        serde_json::from_str(r#"{"id":4,"plagiarism_percentage":18.0,"check_type":"local"}"#).expect("check");
    assert_eq!(check.percentage(), 18.0);
    assert_eq!(check.severity(), Severity::Low);
    let bare: PlagiarismCheck = serde_json::from_str(r#"{"id":5}"#).expect("check");
    assert_eq!(bare.percentage(), 0.0);
}

#[test]
fn failure_only_reported_for_failed_checks() {
    let failed: PlagiarismCheck =
        serde_json::from_str(r#"{"id":1,"status":"failed","error_message":"provider timeout"}"#).expect("check");
    assert_eq!(failed.failure(), Some("provider timeout"));
    let pending: PlagiarismCheck =
        serde_json::from_str(r#"{"id":2,"status":"pending","error_message":"stale"}"#).expect("check");
    assert_eq!(pending.failure(), None);
}

#[test]
fn source_label_prefers_url_then_title() {
    assert_eq!(source_label(&serde_json::json!("https://a.test")), "https://a.test");
    assert_eq!(
        source_label(&serde_json::json!({ "title": "Paper", "url": "https://b.test" })),
        "https://b.test"
    );
    assert_eq!(source_label(&serde_json::json!({ "title": "Paper" })), "Paper");
    assert_eq!(source_label(&serde_json::json!({ "score": 3 })), r#"{"score":3}"#);
}

#[test]
fn checks_query_clamps_to_first_page() {
    assert_eq!(checks_query(0, 10), "page=1&page_size=10");
    assert_eq!(checks_query(3, 25), "page=3&page_size=25");
}
