use super::*;
use crate::net::marketplace::Amount;

fn listing() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Solar Grid Design".to_owned(),
            author_name: Some("Amaka Obi".to_owned()),
            level: Some("HND".to_owned()),
            price: Amount(1500.0),
            ..Project::default()
        },
        Project {
            id: 2,
            title: "Wind Turbine Survey".to_owned(),
            author_name: None,
            level: Some("BSc".to_owned()),
            ..Project::default()
        },
        Project {
            id: 3,
            title: "Grid Load Forecasting".to_owned(),
            author_name: Some("Tunde".to_owned()),
            level: Some("BSc".to_owned()),
            ..Project::default()
        },
    ]
}

fn ids(projects: &[Project]) -> Vec<u64> {
    projects.iter().map(|p| p.id).collect()
}

// =============================================================
// filter_projects
// =============================================================

#[test]
fn empty_filters_keep_everything() {
    assert_eq!(ids(&filter_projects(&listing(), "", "")), vec![1, 2, 3]);
}

#[test]
fn search_and_level_combine() {
    assert_eq!(ids(&filter_projects(&listing(), "grid", "")), vec![1, 3]);
    assert_eq!(ids(&filter_projects(&listing(), "grid", "BSc")), vec![3]);
    assert_eq!(ids(&filter_projects(&listing(), "tunde", "HND")), Vec::<u64>::new());
}

// =============================================================
// Routing and paging
// =============================================================

#[test]
fn parse_route_id_requires_number() {
    assert_eq!(parse_route_id(Some("4")), Some(4));
    assert_eq!(parse_route_id(Some("law")), None);
    assert_eq!(parse_route_id(None), None);
}

#[test]
fn twenty_projects_fit_on_one_page() {
    assert_eq!(page_count(20, PROJECTS_PAGE_SIZE), 1);
    assert_eq!(page_count(21, PROJECTS_PAGE_SIZE), 2);
}
