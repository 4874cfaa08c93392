mod health;

use pb_relay::{
    AppState, BroadcastRelay, ConnectionConfig, ConnectionLimits, ConnectionRegistry, EventRouter,
    Metrics, ShutdownCoordinator,
};

use axum_test::TestServer;

/// Build a test server around a fresh relay with default settings
pub(crate) fn test_server() -> TestServer {
    let registry = ConnectionRegistry::new(ConnectionLimits::default());
    let state = AppState {
        relay: BroadcastRelay::new(registry, EventRouter::new(), Metrics::new()),
        metrics: Metrics::new(),
        shutdown: ShutdownCoordinator::new(),
        config: ConnectionConfig::default(),
    };

    TestServer::builder()
        .http_transport()
        .build(crate::build_router(state))
        .unwrap()
}
