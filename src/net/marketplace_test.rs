use super::*;

// =============================================================
// Amount
// =============================================================

#[test]
fn amount_accepts_number_string_and_null() {
    let project: Project = serde_json::from_str(r#"{"id":1,"price":"1500.50"}"#).expect("string price");
    assert_eq!(project.price, Amount(1500.5));
    let project: Project = serde_json::from_str(r#"{"id":1,"price":250}"#).expect("number price");
    assert_eq!(project.price, Amount(250.0));
    let project: Project = serde_json::from_str(r#"{"id":1,"price":null}"#).expect("null price");
    assert_eq!(project.price, Amount(0.0));
}

#[test]
fn amount_rejects_non_numeric_text() {
    assert!(serde_json::from_str::<Project>(r#"{"id":1,"price":"free"}"#).is_err());
}

#[test]
fn amount_label_groups_thousands() {
    assert_eq!(Amount(0.0).label(), "$0.00");
    assert_eq!(Amount(999.5).label(), "$999.50");
    assert_eq!(Amount(1500.0).label(), "$1,500.00");
    assert_eq!(Amount(1_234_567.891).label(), "$1,234,567.89");
    assert_eq!(Amount(-42.0).label(), "-$42.00");
}

// =============================================================
// Project
// =============================================================

fn project(title: &str, author: Option<&str>, level: Option<&str>) -> Project {
    Project {
        id: 1,
        title: title.to_owned(),
        author_name: author.map(str::to_owned),
        level: level.map(str::to_owned),
        ..Project::default()
    }
}

#[test]
fn search_matches_title_or_author_case_insensitively() {
    let p = project("Solar Grid Design", Some("Amaka Obi"), None);
    assert!(p.matches_search("grid"));
    assert!(p.matches_search("  OBI "));
    assert!(p.matches_search(""));
    assert!(!p.matches_search("wind"));
}

#[test]
fn search_without_author_only_checks_title() {
    assert!(!project("Solar", None, None).matches_search("amaka"));
}

#[test]
fn level_filter_is_exact_and_empty_matches_all() {
    let p = project("x", None, Some("HND"));
    assert!(p.matches_level(""));
    assert!(p.matches_level("HND"));
    assert!(!p.matches_level("ND"));
    assert!(!project("x", None, None).matches_level("ND"));
}

#[test]
fn category_label_handles_each_shape() {
    let mut p = project("x", None, None);
    assert_eq!(p.category_label(), None);
    p.category = Some(serde_json::json!("Engineering"));
    assert_eq!(p.category_label().as_deref(), Some("Engineering"));
    p.category = Some(serde_json::json!(3));
    assert_eq!(p.category_label().as_deref(), Some("Category #3"));
    p.category = Some(serde_json::json!({ "id": 3, "name": "Law" }));
    assert_eq!(p.category_label().as_deref(), Some("Law"));
}

#[test]
fn project_listing_tolerates_sparse_records() {
    let raw = r#"{"count":2,"results":[{"id":4,"title":"A"},{"id":5,"title":"B","author_name":null}]}"#;
    let projects = serde_json::from_str::<crate::net::types::Listing<Project>>(raw)
        .expect("listing")
        .into_items();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[1].author_name, None);
}

#[test]
fn new_project_form_fields_cover_text_parts() {
    let upload = NewProject {
        title: "T".to_owned(),
        category: 2,
        level: "BSc".to_owned(),
        description: "D".to_owned(),
        price: 1500.0,
        keywords: "k1, k2".to_owned(),
        co_authors: String::new(),
    };
    let fields = upload.form_fields();
    let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        ["title", "category", "level", "description", "price", "keywords", "co_authors"]
    );
    assert!(fields.contains(&("category", "2".to_owned())));
    assert!(fields.contains(&("price", "1500".to_owned())));
}

// =============================================================
// Payments
// =============================================================

#[test]
fn payment_response_exposes_nested_authorization_url() {
    let reply: PaymentResponse =
        serde_json::from_str(r#"{"status":true,"data":{"authorization_url":"https://pay.test/x"}}"#).expect("reply");
    assert_eq!(reply.authorization_url().as_deref(), Some("https://pay.test/x"));
}

#[test]
fn payment_response_without_url_is_none() {
    let reply: PaymentResponse = serde_json::from_str(r#"{"data":{"authorization_url":" "}}"#).expect("reply");
    assert_eq!(reply.authorization_url(), None);
    let reply: PaymentResponse = serde_json::from_str("{}").expect("reply");
    assert_eq!(reply.authorization_url(), None);
}

// =============================================================
// Account
// =============================================================

#[test]
fn wallet_reads_balance_and_null_bank_details() {
    let wallet: Wallet =
        serde_json::from_str(r#"{"balance":"320.00","account_name":null,"account_number":"0123","bank":"GTB"}"#)
            .expect("wallet");
    assert_eq!(wallet.balance, Amount(320.0));
    assert_eq!(wallet.account.account_name, "");
    assert_eq!(wallet.account.account_number, "0123");
}

#[test]
fn profile_update_omits_blank_password() {
    let update = ProfileUpdate {
        name: "Ada".to_owned(),
        specialization: "CS".to_owned(),
        contact: "080".to_owned(),
        password: None,
    };
    assert_eq!(
        serde_json::to_value(&update).expect("encode"),
        serde_json::json!({ "name": "Ada", "specialization": "CS", "contact": "080" })
    );
}

#[test]
fn cashout_and_transaction_dates_fall_back() {
    let cashout: Cashout = serde_json::from_str(r#"{"amount":5,"date":"2024-01-02"}"#).expect("cashout");
    assert_eq!(cashout.when(), Some("2024-01-02"));
    let tx: Transaction = serde_json::from_str(r#"{"amount":"7.5","created_at":"2024-03-04"}"#).expect("tx");
    assert_eq!(tx.when(), Some("2024-03-04"));
    assert_eq!(tx.amount, Amount(7.5));
}

#[test]
fn status_modifier_buckets_known_states() {
    assert_eq!(status_modifier(Some("Pending")), "pending");
    assert_eq!(status_modifier(Some("approved")), "ok");
    assert_eq!(status_modifier(Some("FAILED")), "failed");
    assert_eq!(status_modifier(Some("queued")), "unknown");
    assert_eq!(status_modifier(None), "unknown");
}

#[test]
fn project_levels_start_with_nce_and_end_with_others() {
    assert_eq!(PROJECT_LEVELS.first(), Some(&"NCE"));
    assert_eq!(PROJECT_LEVELS.last(), Some(&"Others"));
}
