use serde::{Deserialize, Serialize};

/// Ink color applied when a stroke omits one
pub const DEFAULT_STROKE_COLOR: &str = "#334155";

/// Line width in pixels applied when a stroke omits one
pub const DEFAULT_LINE_WIDTH: f64 = 3.0;

/// A single line-segment drawing instruction on the shared whiteboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
}

fn default_color() -> String {
    DEFAULT_STROKE_COLOR.to_string()
}

fn default_line_width() -> f64 {
    DEFAULT_LINE_WIDTH
}

impl Stroke {
    /// A stroke is only forwarded when all four coordinates are finite
    pub fn coordinates_finite(&self) -> bool {
        [self.x0, self.y0, self.x1, self.y1]
            .iter()
            .all(|c| c.is_finite())
    }
}
