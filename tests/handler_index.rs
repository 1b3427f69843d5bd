mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use link_tracker::api::handlers::index_handler;

#[tokio::test]
async fn test_index_returns_service_metadata() {
    let (state, _rx, _store) = common::create_test_state();
    let app = Router::new()
        .route("/", get(index_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["name"], "link-tracker");
    assert!(json.get("version").is_some());
    assert_eq!(json["endpoints"]["track"], "/track/{token}");
    assert_eq!(json["endpoints"]["stats"], "/stats/{token}");
    assert_eq!(json["endpoints"]["generate"], "/generate-token");
    assert_eq!(json["endpoints"]["health"], "/health");
}
