use super::*;

/// Synchronous remote-execution channel into the game page.
///
/// Evaluates a script body (which must `return` its value) and yields the
/// JSON-serialised result. Browser automation, a devtools socket or an
/// embedded JS runtime can all sit behind this.
#[async_trait::async_trait]
pub trait Script: Send + Sync {
    async fn execute(&self, script: &str) -> Result<serde_json::Value, EngineError>;
    async fn close(&self);
}
