use axum_test::TestServer;
use release_stage_badge::AppState;
use release_stage_badge::config::AppConfig;
use release_stage_badge::server::router;
use std::sync::Arc;

fn test_server() -> TestServer {
    let config = AppConfig::load_from_args(["release-stage-badge", "--port", "0"])
        .expect("Failed to load config");
    let state = AppState::from_config(Arc::new(config)).expect("Failed to build state");
    TestServer::new(router(state)).expect("Failed to start test server")
}

#[tokio::test]
async fn test_health() {
    let server = test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("ok");
}

#[tokio::test]
async fn test_gallery_page() {
    let server = test_server();
    let response = server.get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Connector release stages"));
    for stage in ["alpha", "beta", "generally_available", "custom"] {
        assert!(html.contains(stage), "missing row for {stage}");
    }
}

#[tokio::test]
async fn test_badge_defaults_to_tooltip() {
    let server = test_server();
    let response = server.get("/badge").add_query_param("stage", "beta").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("role=\"tooltip\""));
    assert!(html.contains("cursor: help;"));
    assert!(html.contains("font-size: 10px;"));
    assert!(html.contains("Beta connectors are in development"));
}

#[tokio::test]
async fn test_badge_without_tooltip() {
    let server = test_server();
    let response = server
        .get("/badge")
        .add_query_param("stage", "alpha")
        .add_query_param("small", "true")
        .add_query_param("tooltip", "false")
        .await;
    response.assert_status_ok();

    let html = response.text();
    assert!(!html.contains("role=\"tooltip\""));
    assert!(html.contains("font-size: 8px;"));
    assert!(html.contains("alpha"));
}

#[tokio::test]
async fn test_badge_empty_for_custom_missing_and_blank_stage() {
    let server = test_server();

    let custom = server.get("/badge").add_query_param("stage", "custom").await;
    custom.assert_status_ok();
    assert!(!custom.text().contains("release-stage"));

    let missing = server.get("/badge").await;
    missing.assert_status_ok();
    assert!(!missing.text().contains("release-stage"));

    let empty = server.get("/badge").add_query_param("stage", "").await;
    empty.assert_status_ok();
    assert!(!empty.text().contains("release-stage"));
    assert!(!empty.text().contains("connector.releaseStage"));
}
