use super::*;

/// Where the arbitration loop is between steps.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    WaitTurn,
    WaitHumanAck,
    Act,
    GameOver,
    ErrorRetry(Failure),
    Stopped,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::GameOver | Self::Stopped)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WaitTurn => write!(f, "waiting for turn"),
            Self::WaitHumanAck => write!(f, "waiting for acknowledgment"),
            Self::Act => write!(f, "acting"),
            Self::GameOver => write!(f, "game over"),
            Self::ErrorRetry(failure) => write!(f, "retrying after {}", failure),
            Self::Stopped => write!(f, "stopped"),
        }
    }
}
