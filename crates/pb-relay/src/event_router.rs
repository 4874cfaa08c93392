use crate::{Channel, Event, FanOut, RelayError, Result, Stroke, WhiteboardEvent};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;
use serde_json::Value;

/// Raw inbound envelope before classification
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    event: String,
    #[serde(default)]
    data: Value,
}

/// Interprets raw inbound frames as typed events and maps each channel to
/// its fan-out policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventRouter;

impl EventRouter {
    pub fn new() -> Self {
        Self
    }

    /// Classify a raw text frame into a typed event.
    ///
    /// Every rejection is an `InvalidMessage`; callers drop rejected frames
    /// silently so a malformed event from one client never disrupts the
    /// shared session for others.
    #[track_caller]
    pub fn classify(&self, raw: &str) -> Result<Event> {
        let envelope: RawEnvelope =
            serde_json::from_str(raw).map_err(|e| RelayError::InvalidMessage {
                message: format!("malformed envelope: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        match envelope.event.as_str() {
            "taskUpdated" => Self::classify_task(envelope.data),
            "whiteboardEvent" => Self::classify_whiteboard(envelope.data),
            other => Err(RelayError::InvalidMessage {
                message: format!("unknown event: {other}"),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Map a classified event to its delivery policy. Deterministic: both
    /// channels broadcast to all other connections.
    pub fn route(&self, event: &Event) -> FanOut {
        match event.channel() {
            Channel::Task | Channel::Whiteboard => FanOut::Others,
        }
    }

    /// Task snapshots pass through opaque; no field-level validation
    #[track_caller]
    fn classify_task(data: Value) -> Result<Event> {
        if !data.is_object() {
            return Err(RelayError::InvalidMessage {
                message: "task payload must be an object".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Event::Task(data))
    }

    #[track_caller]
    fn classify_whiteboard(data: Value) -> Result<Event> {
        if data.get("type").and_then(Value::as_str) == Some("clear") {
            return Ok(Event::Whiteboard(WhiteboardEvent::Clear));
        }

        let stroke: Stroke =
            serde_json::from_value(data).map_err(|e| RelayError::InvalidMessage {
                message: format!("malformed stroke: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if !stroke.coordinates_finite() {
            return Err(RelayError::InvalidMessage {
                message: "stroke coordinates must be finite".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Event::Whiteboard(WhiteboardEvent::Stroke(stroke)))
    }
}
