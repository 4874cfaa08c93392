pub mod app_state;
pub mod broadcast_relay;
pub mod channel;
pub mod connection_config;
pub mod connection_id;
pub mod connection_info;
pub mod connection_limits;
pub mod connection_registry;
pub mod error;
pub mod event;
pub mod event_router;
pub mod fan_out;
pub mod metrics;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod stroke;
pub mod web_socket_connection;
pub mod whiteboard_event;

pub use app_state::{AppState, handler};
pub use broadcast_relay::BroadcastRelay;
pub use channel::Channel;
pub use connection_config::ConnectionConfig;
pub use connection_id::ConnectionId;
pub use connection_info::ConnectionInfo;
pub use connection_limits::ConnectionLimits;
pub use connection_registry::ConnectionRegistry;
pub use error::{RelayError, Result};
pub use event::Event;
pub use event_router::EventRouter;
pub use fan_out::FanOut;
pub use metrics::Metrics;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use stroke::{DEFAULT_LINE_WIDTH, DEFAULT_STROKE_COLOR, Stroke};
pub use web_socket_connection::WebSocketConnection;
pub use whiteboard_event::WhiteboardEvent;

#[cfg(test)]
mod tests;
