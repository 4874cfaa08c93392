use crate::{ConnectionId, ConnectionRegistry, EventRouter, FanOut, Metrics, Result};

use axum::extract::ws::Message;
use tokio::sync::mpsc;

/// Composition root tying the registry and router together.
///
/// Constructed explicitly with injected dependencies so tests can run
/// multiple independent relay instances in one process.
#[derive(Clone)]
pub struct BroadcastRelay {
    registry: ConnectionRegistry,
    router: EventRouter,
    metrics: Metrics,
}

impl BroadcastRelay {
    pub fn new(registry: ConnectionRegistry, router: EventRouter, metrics: Metrics) -> Self {
        Self {
            registry,
            router,
            metrics,
        }
    }

    /// Admit a new connection with its outbound channel
    pub async fn admit(&self, sender: mpsc::Sender<Message>) -> Result<ConnectionId> {
        let connection_id = self.registry.register(sender).await?;
        self.metrics.connection_established();
        Ok(connection_id)
    }

    /// Release a connection. Idempotent.
    pub async fn remove(&self, connection_id: ConnectionId) {
        self.registry.unregister(connection_id).await;
    }

    /// Classify one raw inbound frame and fan it out to all other live
    /// connections, returning the number of deliveries.
    pub async fn dispatch(&self, sender_id: ConnectionId, raw: &str) -> Result<usize> {
        let event = self.router.classify(raw).inspect_err(|_| {
            self.metrics.event_rejected();
        })?;

        let channel = event.channel();
        self.metrics.event_received(channel.label());

        let wire = event.to_wire()?;
        let delivered = match self.router.route(&event) {
            FanOut::Others => {
                self.registry
                    .broadcast_except(sender_id, Message::Text(wire.into()))
                    .await
            }
        };

        self.metrics.event_forwarded(channel.label(), delivered);
        Ok(delivered)
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }
}
