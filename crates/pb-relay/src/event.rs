use crate::{Channel, Result, WhiteboardEvent};

use serde::Serialize;
use serde_json::Value;

/// A classified inbound message. Events are transient: they exist only for
/// the duration of one fan-out pass and are never stored or replayed.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Opaque task snapshot, forwarded verbatim. Clients own the task
    /// schema; the relay only requires a JSON object.
    Task(Value),
    /// Whiteboard drawing instruction
    Whiteboard(WhiteboardEvent),
}

/// Outbound wire envelope, identical in shape to the inbound one
#[derive(Debug, Serialize)]
struct Envelope<'a> {
    event: &'static str,
    data: &'a Value,
}

impl Event {
    pub fn channel(&self) -> Channel {
        match self {
            Self::Task(_) => Channel::Task,
            Self::Whiteboard(_) => Channel::Whiteboard,
        }
    }

    /// Serialize to the outbound wire envelope
    pub fn to_wire(&self) -> Result<String> {
        let data = match self {
            Self::Task(value) => value.clone(),
            Self::Whiteboard(event) => event.to_value()?,
        };

        let envelope = Envelope {
            event: self.channel().event_name(),
            data: &data,
        };

        Ok(serde_json::to_string(&envelope)?)
    }
}
