#![allow(dead_code)]

use pb_relay::{
    AppState, BroadcastRelay, ConnectionConfig, ConnectionLimits, ConnectionRegistry, EventRouter,
    Metrics, ShutdownCoordinator,
};

use axum::{Router, routing::get};
use axum_test::TestServer;

/// Configuration for test server instances
#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub max_connections_total: usize,
    pub send_buffer_size: usize,
    pub idle_timeout_secs: u64,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            max_connections_total: 100,
            send_buffer_size: 100,
            idle_timeout_secs: 0,
        }
    }
}

impl TestServerConfig {
    /// Create config with strict connection limits (for limit tests)
    pub fn with_strict_limits() -> Self {
        Self {
            max_connections_total: 2,
            ..Default::default()
        }
    }

    /// Create config with a short idle timeout (for idle-disconnect tests)
    pub fn with_idle_timeout(secs: u64) -> Self {
        Self {
            idle_timeout_secs: secs,
            ..Default::default()
        }
    }
}

/// Test server with access to AppState for testing
pub struct TestServerWithState {
    pub server: TestServer,
    pub app_state: AppState,
}

/// Create a TestServer with default configuration
pub fn create_test_server() -> TestServerWithState {
    create_test_server_with_config(TestServerConfig::default())
}

/// Create a TestServer with custom configuration
pub fn create_test_server_with_config(config: TestServerConfig) -> TestServerWithState {
    let (app, app_state) = create_app(config);
    let server = TestServer::builder()
        .http_transport()
        .build(app)
        .expect("Failed to create test server");

    TestServerWithState { server, app_state }
}

/// Build the Axum Router with AppState
fn create_app(config: TestServerConfig) -> (Router, AppState) {
    let registry = ConnectionRegistry::new(ConnectionLimits {
        max_total: config.max_connections_total,
    });

    let metrics = Metrics::default();
    let relay = BroadcastRelay::new(registry, EventRouter::new(), metrics.clone());
    let shutdown = ShutdownCoordinator::new();

    let connection_config = ConnectionConfig {
        send_buffer_size: config.send_buffer_size,
        idle_timeout_secs: config.idle_timeout_secs,
    };

    let app_state = AppState {
        relay,
        metrics,
        shutdown,
        config: connection_config,
    };

    let router = Router::new()
        .route("/ws", get(pb_relay::handler))
        .with_state(app_state.clone());

    (router, app_state)
}
