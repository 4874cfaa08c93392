use crate::ConnectionId;

use axum::extract::ws::Message;
use chrono::DateTime;
use tokio::sync::mpsc;

/// Information about an active connection
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    pub connection_id: ConnectionId,
    pub connected_at: DateTime<chrono::Utc>,
    /// Outbound channel used to push broadcasts to this client
    pub sender: mpsc::Sender<Message>,
}
