use super::*;

#[test]
fn with_base_url_appends_single_trailing_slash() {
    assert_eq!(ApiConfig::with_base_url("http://api.test/v1").base_url(), "http://api.test/v1/");
    assert_eq!(ApiConfig::with_base_url("http://api.test/v1///").base_url(), "http://api.test/v1/");
}

#[test]
fn endpoint_joins_relative_path() {
    let config = ApiConfig::with_base_url("http://api.test/v1/");
    assert_eq!(config.endpoint("user/me"), "http://api.test/v1/user/me");
    assert_eq!(config.endpoint("/user/token/"), "http://api.test/v1/user/token/");
}

#[test]
fn default_api_base_url_is_normalized() {
    assert!(ApiConfig::default().base_url().ends_with('/'));
}

#[test]
fn route_paths_match_router() {
    assert_eq!(SIGN_IN_PATH, "/sign-in");
    assert_eq!(DASHBOARD_PATH, "/dashboard/");
}

#[test]
fn marketplace_paths_embed_ids() {
    assert_eq!(project_path(14), "/projects/14");
    assert_eq!(category_path(2), "/categories/2");
    assert_eq!(ABOUT_PATH, "/about-us/");
}

#[test]
fn dashboard_sections_live_under_dashboard() {
    for path in [
        DASHBOARD_PROFILE_PATH,
        DASHBOARD_PROJECTS_PATH,
        DASHBOARD_WALLET_PATH,
        DASHBOARD_TRANSACTIONS_PATH,
    ] {
        assert!(path.starts_with(DASHBOARD_PATH), "{path}");
    }
}
