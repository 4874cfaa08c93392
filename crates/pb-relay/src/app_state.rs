use crate::{BroadcastRelay, ConnectionConfig, Metrics, ShutdownCoordinator, WebSocketConnection};

use axum::{
    extract::{
        State,
        ws::{WebSocket, WebSocketUpgrade},
    },
    response::Response,
};
use log::{debug, error};

/// Shared application state for the relay endpoint
#[derive(Clone)]
pub struct AppState {
    pub relay: BroadcastRelay,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
    pub config: ConnectionConfig,
}

/// WebSocket upgrade handler
pub async fn handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    debug!("WebSocket upgrade request");
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Drive one connection from admission to close
async fn handle_socket(socket: WebSocket, state: AppState) {
    let shutdown_guard = state.shutdown.subscribe_guard();

    let connection =
        WebSocketConnection::new(state.relay.clone(), state.config.clone(), state.metrics);

    if let Err(e) = connection.handle(socket, shutdown_guard).await {
        error!("Connection error: {e}");
    }
}
