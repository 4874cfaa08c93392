use crate::{
    BroadcastRelay, ConnectionConfig, ConnectionId, Metrics, RelayError, Result, ShutdownGuard,
};

use std::panic::Location;

use axum::extract::ws::{Message, WebSocket};
use error_location::ErrorLocation;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};

/// Manages a single client connection from admission to close
pub struct WebSocketConnection {
    relay: BroadcastRelay,
    config: ConnectionConfig,
    metrics: Metrics,
}

impl WebSocketConnection {
    pub fn new(relay: BroadcastRelay, config: ConnectionConfig, metrics: Metrics) -> Self {
        Self {
            relay,
            config,
            metrics,
        }
    }

    /// Handle the connection lifecycle: Connecting -> Admitted -> Active* ->
    /// Closed. `Closed` is terminal; the handle is never reused.
    ///
    /// One receive loop per connection; loops for different connections run
    /// independently. Frames from this connection are dispatched in arrival
    /// order, which is the only ordering the relay guarantees.
    pub async fn handle(self, socket: WebSocket, mut shutdown_guard: ShutdownGuard) -> Result<()> {
        let (mut ws_sender, mut ws_receiver) = socket.split();

        // Bounded channel for outgoing messages; a full buffer marks this
        // client as stalled during fan-out.
        let (tx, mut rx) = mpsc::channel::<Message>(self.config.send_buffer_size);

        let connection_id = match self.relay.admit(tx.clone()).await {
            Ok(connection_id) => connection_id,
            Err(e) => {
                log::warn!("Connection refused: {e}");
                let _ = ws_sender.close().await;
                return Err(e);
            }
        };

        log::info!("WebSocket connection {connection_id} established");

        // Send task drains the outbound channel into the socket
        let send_task = tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                if ws_sender.send(msg).await.is_err() {
                    break;
                }
            }
        });

        let idle_enabled = self.config.idle_timeout_secs > 0;
        let idle_timeout = Duration::from_secs(self.config.idle_timeout_secs);
        let mut idle_deadline = Instant::now() + idle_timeout;

        let result = loop {
            tokio::select! {
                // Inbound frames from this client
                msg = ws_receiver.next() => {
                    idle_deadline = Instant::now() + idle_timeout;
                    match msg {
                        Some(Ok(msg)) => {
                            if let Err(e) = self.handle_frame(connection_id, msg, &tx).await {
                                log::error!(
                                    "Error handling frame from connection {connection_id}: {e}"
                                );
                                break Err(e);
                            }
                        }
                        Some(Err(e)) => {
                            log::error!("WebSocket error on connection {connection_id}: {e}");
                            break Err(RelayError::ConnectionClosed {
                                reason: format!("WebSocket error: {e}"),
                                location: ErrorLocation::from(Location::caller()),
                            });
                        }
                        None => {
                            log::info!("Connection {connection_id} closed by client");
                            break Ok(());
                        }
                    }
                }

                // Idle timeout (when configured)
                _ = tokio::time::sleep_until(idle_deadline), if idle_enabled => {
                    log::info!(
                        "Connection {connection_id} idle for {}s, closing",
                        self.config.idle_timeout_secs
                    );
                    break Err(RelayError::IdleTimeout {
                        timeout_secs: self.config.idle_timeout_secs,
                        location: ErrorLocation::from(Location::caller()),
                    });
                }

                // Graceful shutdown
                _ = shutdown_guard.wait() => {
                    log::info!("Shutting down connection {connection_id} gracefully");
                    break Ok(());
                }
            }
        };

        // Cleanup: removal is idempotent and isolated to this connection
        self.relay.remove(connection_id).await;
        drop(tx); // Close channel to terminate send task
        let _ = send_task.await;

        self.metrics.connection_closed(match &result {
            Ok(()) => "normal",
            Err(RelayError::IdleTimeout { .. }) => "idle_timeout",
            Err(_) => "error",
        });

        log::info!("WebSocket connection {connection_id} closed");

        result
    }

    /// Handle one frame from the client
    async fn handle_frame(
        &self,
        connection_id: ConnectionId,
        msg: Message,
        tx: &mpsc::Sender<Message>,
    ) -> Result<()> {
        match msg {
            Message::Text(text) => {
                match self.relay.dispatch(connection_id, text.as_str()).await {
                    Ok(delivered) => {
                        log::debug!(
                            "Connection {connection_id} event forwarded to {delivered} clients"
                        );
                    }
                    Err(RelayError::InvalidMessage { .. }) => {
                        // Malformed payloads are dropped without disturbing
                        // the session and never surfaced to the sender.
                        log::debug!("Dropping malformed frame from connection {connection_id}");
                    }
                    Err(e) => return Err(e),
                }
                Ok(())
            }
            Message::Binary(data) => {
                log::debug!(
                    "Ignoring binary frame ({} bytes) from connection {connection_id}",
                    data.len()
                );
                Ok(())
            }
            Message::Ping(data) => {
                tx.send(Message::Pong(data))
                    .await
                    .map_err(|_| RelayError::SendBufferFull {
                        location: ErrorLocation::from(Location::caller()),
                    })?;
                Ok(())
            }
            Message::Pong(_) => Ok(()),
            Message::Close(_) => {
                log::info!("Received close frame from connection {connection_id}");
                Ok(())
            }
        }
    }
}
