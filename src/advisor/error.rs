/// Failures obtaining a proposal from the advisor.
#[derive(Debug, Clone, PartialEq)]
pub enum AdvisoryError {
    Transport(String),
    Status(u16, String),
    Malformed(String),
    Empty,
}

impl std::fmt::Display for AdvisoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(s) => write!(f, "advisor unreachable: {}", s),
            Self::Status(code, body) => write!(f, "advisor returned {}: {}", code, body),
            Self::Malformed(s) => write!(f, "malformed advisor response: {}", s),
            Self::Empty => write!(f, "advisor returned no answer"),
        }
    }
}

impl std::error::Error for AdvisoryError {}
