use crate::{Result, Stroke};

use serde_json::{Value, json};

/// Payload variants carried on the whiteboard channel
#[derive(Debug, Clone, PartialEq)]
pub enum WhiteboardEvent {
    /// One line segment to draw
    Stroke(Stroke),
    /// Instruct all clients to erase their local canvas
    Clear,
}

impl WhiteboardEvent {
    /// Outbound payload for the wire envelope
    pub fn to_value(&self) -> Result<Value> {
        match self {
            Self::Stroke(stroke) => Ok(serde_json::to_value(stroke)?),
            Self::Clear => Ok(json!({ "type": "clear" })),
        }
    }
}
