use super::test_server;

use serde_json::Value;

#[tokio::test]
async fn given_running_server_when_health_checked_then_healthy_with_zero_connections() {
    let server = test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["connections"], 0);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn given_running_server_when_liveness_probed_then_ok() {
    let server = test_server();

    let response = server.get("/live").await;
    response.assert_status_ok();
    response.assert_text("OK");
}

#[tokio::test]
async fn given_running_server_when_readiness_probed_then_ready() {
    let server = test_server();

    let response = server.get("/ready").await;
    response.assert_status_ok();
    response.assert_text("Ready");
}
