use super::*;
use crate::board::*;

/// Query/command interface of a running game.
///
/// The bridge never computes rules itself: side to move, legality, move
/// application and game end all come from here. Every method is a single
/// round-trip to wherever the game actually lives.
#[async_trait::async_trait]
pub trait Engine: Send + Sync {
    /// Whether the script API is reachable at all. Checked once at startup.
    async fn probe(&self) -> Result<bool, EngineError>;
    /// Current position and side to move.
    async fn state(&self) -> Result<Snapshot, EngineError>;
    /// Legal moves for the side to move, in engine order.
    async fn legal(&self) -> Result<Vec<Move>, EngineError>;
    /// Best-effort position evaluation.
    async fn analysis(&self) -> Result<Analysis, EngineError>;
    /// Apply a move given by notation.
    async fn execute(&self, notation: &str) -> Result<Execution, EngineError>;
    /// Whether the game has ended.
    async fn finished(&self) -> Result<bool, EngineError>;
    /// Tear down the underlying connection. Safe to call more than once.
    async fn release(&self);
}
