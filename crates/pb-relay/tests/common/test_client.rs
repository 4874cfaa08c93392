#![allow(dead_code)]

use axum_test::{TestServer, TestWebSocket};
use serde_json::{Value, json};
use tokio::time::{Duration, timeout};

/// WebSocket test client speaking the relay's JSON envelope
pub struct WsTestClient {
    ws: TestWebSocket,
}

impl WsTestClient {
    /// Connect to the relay endpoint
    pub async fn connect(server: &TestServer) -> Self {
        let ws = server.get_websocket("/ws").await.into_websocket().await;
        Self { ws }
    }

    /// Send a raw text frame (for malformed-input tests)
    pub async fn send_raw(&mut self, text: impl std::fmt::Display) {
        self.ws.send_text(text).await;
    }

    /// Send an enveloped event
    pub async fn send_event(&mut self, event: &str, data: Value) {
        self.send_raw(json!({ "event": event, "data": data })).await;
    }

    /// Send a whiteboard stroke with explicit color and width
    pub async fn send_stroke(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        self.send_event(
            "whiteboardEvent",
            json!({ "x0": x0, "y0": y0, "x1": x1, "y1": y1 }),
        )
        .await;
    }

    /// Send a whiteboard clear command
    pub async fn send_clear(&mut self) {
        self.send_event("whiteboardEvent", json!({ "type": "clear" }))
            .await;
    }

    /// Receive the next envelope as (event name, data)
    pub async fn receive_event(&mut self) -> (String, Value) {
        let text = self.ws.receive_text().await;
        let value: Value = serde_json::from_str(&text).expect("valid JSON envelope");
        (
            value["event"].as_str().expect("event name").to_string(),
            value["data"].clone(),
        )
    }

    /// Assert that nothing arrives within the given window
    pub async fn expect_silence(&mut self, millis: u64) {
        let result = timeout(Duration::from_millis(millis), self.ws.receive_text()).await;
        assert!(result.is_err(), "expected no event, got {:?}", result);
    }

    /// Close the connection
    pub async fn close(self) {
        self.ws.close().await;
    }
}
