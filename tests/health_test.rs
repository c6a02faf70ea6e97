use axum::http::StatusCode;
use axum::Router;
use axum_test::TestServer;
use ethiolex_api::modules;
use serde_json::json;

fn setup_test_server() -> TestServer {
    let app = Router::new().merge(modules::health::routes::routes());

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_root_liveness() {
    let server = setup_test_server();

    let response = server.get("/").await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body, json!({ "message": "Test works" }));
}

#[tokio::test]
async fn test_root_ignores_query_params() {
    let server = setup_test_server();

    let response = server.get("/").add_query_param("probe", "1").await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body, json!({ "message": "Test works" }));
}
