/// Failures reaching or understanding the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The channel to the page failed or the page threw.
    Transport(String),
    /// The engine answered, but not with the shape we expect.
    Malformed(String),
    /// The channel was already released.
    Closed,
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(s) => write!(f, "transport failure: {}", s),
            Self::Malformed(s) => write!(f, "malformed engine response: {}", s),
            Self::Closed => write!(f, "engine connection already released"),
        }
    }
}

impl std::error::Error for EngineError {}
