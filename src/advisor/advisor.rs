use super::*;

/// Anything that can answer a position description with a proposed move.
///
/// The answer is raw text; nothing here promises it is a legal notation.
#[async_trait::async_trait]
pub trait Advisor: Send + Sync {
    async fn propose(&self, prompt: &str, preamble: &str) -> Result<String, AdvisoryError>;
}
