//! Integration tests for the dashboard page.
//!
//! Run with: cargo test -p bluebox-integration-tests

use axum::http::StatusCode;

use bluebox_integration_tests::{TestApp, modal_open, row_count};

#[tokio::test]
async fn test_health() {
    let mut app = TestApp::seeded();
    let response = app.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn test_dashboard_lists_seed_users_in_order() {
    let mut app = TestApp::seeded();
    let html = app.dashboard().await;

    assert_eq!(row_count(&html), 5);
    let positions: Vec<usize> = [
        "Max Brand",
        "Andrew Simon",
        "Ron Kiperman",
        "Mike Hardy",
        "Kevin Peterson",
    ]
    .iter()
    .map(|name| html.find(name).unwrap())
    .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(html.contains("25 Apr 2024"));
}

#[tokio::test]
async fn test_dashboard_static_content() {
    let mut app = TestApp::seeded();
    let html = app.dashboard().await;

    for text in [
        "blueBox",
        "Dashboard",
        "Sample Page",
        "Search Project...",
        "Add Project",
        "$150000",
        "Stock Total",
        "+60%",
        "$25000",
        "250000",
        "Unique Visitors",
        "Growth Overview",
        "Monthly Growth",
        "Standard Table Design",
    ] {
        assert!(html.contains(text), "missing {text}");
    }
    assert!(html.contains("<polyline"));
}

#[tokio::test]
async fn test_status_badges_use_status_colours() {
    let mut app = TestApp::seeded();
    let html = app.dashboard().await;

    assert_eq!(html.matches("badge--pending").count(), 2);
    assert_eq!(html.matches("badge--approved").count(), 2);
    assert_eq!(html.matches("badge--denied").count(), 1);
}

#[tokio::test]
async fn test_modal_closed_by_default() {
    let mut app = TestApp::seeded();
    let html = app.dashboard().await;
    assert!(!modal_open(&html));
}

#[tokio::test]
async fn test_empty_registry_shows_empty_state() {
    let mut app = TestApp::empty();
    let html = app.dashboard().await;

    assert_eq!(row_count(&html), 0);
    assert!(html.contains("No users yet"));
}
