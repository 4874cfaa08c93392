/// Delivery policy for a classified event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanOut {
    /// Deliver to every connection except the originator
    Others,
}
