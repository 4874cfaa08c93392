use crate::{ConnectionId, ConnectionInfo, ConnectionLimits, RelayError, Result};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use axum::extract::ws::Message;
use error_location::ErrorLocation;
use log::{debug, info, warn};
use tokio::sync::{RwLock, mpsc};

/// Registry for tracking active client connections
pub struct ConnectionRegistry {
    inner: Arc<RwLock<RegistryInner>>,
    limits: ConnectionLimits,
}

struct RegistryInner {
    /// All active connections by connection_id
    connections: HashMap<ConnectionId, ConnectionInfo>,
}

impl ConnectionRegistry {
    pub fn new(limits: ConnectionLimits) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryInner {
                connections: HashMap::new(),
            })),
            limits,
        }
    }

    /// Admit a new connection, returning its assigned id
    pub async fn register(&self, sender: mpsc::Sender<Message>) -> Result<ConnectionId> {
        let mut inner = self.inner.write().await;

        if inner.connections.len() >= self.limits.max_total {
            warn!(
                "Total connection limit reached: {}/{}",
                inner.connections.len(),
                self.limits.max_total
            );
            return Err(RelayError::ConnectionLimitExceeded {
                current: inner.connections.len(),
                max: self.limits.max_total,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let connection_id = ConnectionId::new();
        let info = ConnectionInfo {
            connection_id,
            connected_at: chrono::Utc::now(),
            sender,
        };

        inner.connections.insert(connection_id, info);
        info!(
            "Registered connection {connection_id} ({} total)",
            inner.connections.len()
        );

        Ok(connection_id)
    }

    /// Remove a connection. Removing an already-removed id is a no-op.
    pub async fn unregister(&self, connection_id: ConnectionId) {
        let mut inner = self.inner.write().await;

        if inner.connections.remove(&connection_id).is_some() {
            info!(
                "Unregistered connection {connection_id} ({} remaining)",
                inner.connections.len()
            );
        }
    }

    /// Deliver `message` to every connection except `sender_id`, returning
    /// the number of successful deliveries.
    ///
    /// Operates on a point-in-time snapshot of membership: connections
    /// admitted or removed concurrently either fully receive or fully miss
    /// this broadcast. A recipient whose outbound buffer is full or closed
    /// counts as failed and is unregistered; delivery to the remaining
    /// recipients continues.
    pub async fn broadcast_except(&self, sender_id: ConnectionId, message: Message) -> usize {
        let recipients: Vec<(ConnectionId, mpsc::Sender<Message>)> = {
            let inner = self.inner.read().await;
            inner
                .connections
                .values()
                .filter(|info| info.connection_id != sender_id)
                .map(|info| (info.connection_id, info.sender.clone()))
                .collect()
        };

        let mut delivered = 0;
        let mut failed: Vec<ConnectionId> = Vec::new();

        for (connection_id, tx) in recipients {
            match tx.try_send(message.clone()) {
                Ok(()) => delivered += 1,
                Err(mpsc::error::TrySendError::Full(_)) => {
                    warn!("Send buffer full for connection {connection_id}, dropping it");
                    failed.push(connection_id);
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    debug!("Connection {connection_id} closed mid-broadcast");
                    failed.push(connection_id);
                }
            }
        }

        for connection_id in failed {
            self.unregister(connection_id).await;
        }

        delivered
    }

    /// Get information about a specific connection
    pub async fn get(&self, connection_id: ConnectionId) -> Option<ConnectionInfo> {
        let inner = self.inner.read().await;
        inner.connections.get(&connection_id).cloned()
    }

    /// Get total connection count
    pub async fn total_count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.connections.len()
    }
}

impl Clone for ConnectionRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            limits: self.limits.clone(),
        }
    }
}
