/// Logical event category. Both channels share one fan-out policy today but
/// stay separate so per-channel policy can diverge without touching the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Task,
    Whiteboard,
}

impl Channel {
    /// Wire event name, identical inbound and outbound
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::Task => "taskUpdated",
            Self::Whiteboard => "whiteboardEvent",
        }
    }

    /// Short label for logging and metrics
    pub fn label(&self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Whiteboard => "whiteboard",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
