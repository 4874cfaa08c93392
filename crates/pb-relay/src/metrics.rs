use metrics::{counter, gauge};

/// Metrics collector for relay operations
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "pb_relay" }
    }

    /// Record new connection admitted
    pub fn connection_established(&self) {
        counter!(format!("{}.connections.established", self.prefix)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).increment(1.0);
    }

    /// Record connection closed
    pub fn connection_closed(&self, reason: &str) {
        counter!(format!("{}.connections.closed", self.prefix)).increment(1);
        counter!(format!("{}.connections.closed.{}", self.prefix, reason)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).decrement(1.0);
    }

    /// Record a classified inbound event
    pub fn event_received(&self, channel: &str) {
        counter!(format!("{}.events.received", self.prefix)).increment(1);
        counter!(format!("{}.events.received.{}", self.prefix, channel)).increment(1);
    }

    /// Record a rejected (malformed) inbound frame
    pub fn event_rejected(&self) {
        counter!(format!("{}.events.rejected", self.prefix)).increment(1);
    }

    /// Record one fan-out pass
    pub fn event_forwarded(&self, channel: &str, delivered: usize) {
        counter!(format!("{}.events.forwarded.{}", self.prefix, channel))
            .increment(delivered as u64);
        gauge!(format!("{}.broadcast.fan_out", self.prefix)).set(delivered as f64);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
