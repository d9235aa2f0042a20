use crate::bridge::Event;
use crate::bridge::Failure;

/// Answer to a question the loop cannot settle on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Stop,
}

/// Whoever supervises the arbitration loop.
///
/// Implementations may block on a terminal, answer automatically, or relay
/// to some other surface; the loop only sees decisions and pushes events.
#[async_trait::async_trait]
pub trait Operator: Send {
    /// Whether to keep going after a failed cycle.
    async fn decide(&mut self, failure: &Failure) -> Decision;
    /// Wait until the human is ready for the bridge to continue.
    async fn acknowledge(&mut self) -> Decision;
    /// Progress report. Not required for any decision.
    async fn notify(&mut self, event: &Event);
}
