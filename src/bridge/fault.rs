use crate::advisor::AdvisoryError;
use crate::remote::EngineError;
use std::time::Duration;

/// Step of the acting cycle a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Poll,
    Extract,
    Advise,
    Submit,
}

/// Why a stage did not complete.
#[derive(Debug, Clone, PartialEq)]
pub enum Fault {
    EngineUnavailable(EngineError),
    NoLegalMoves,
    AdvisoryUnavailable(AdvisoryError),
    /// The engine refused the submitted move.
    Rejected(String),
    Timeout(Duration),
    Interrupted,
}

/// A fault tagged with where it happened.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub stage: Stage,
    pub fault: Fault,
}

impl Failure {
    pub fn new(stage: Stage, fault: Fault) -> Self {
        Self { stage, fault }
    }
}

impl From<EngineError> for Fault {
    fn from(e: EngineError) -> Self {
        Self::EngineUnavailable(e)
    }
}

impl From<AdvisoryError> for Fault {
    fn from(e: AdvisoryError) -> Self {
        Self::AdvisoryUnavailable(e)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Poll => write!(f, "poll"),
            Self::Extract => write!(f, "extract"),
            Self::Advise => write!(f, "advise"),
            Self::Submit => write!(f, "submit"),
        }
    }
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EngineUnavailable(e) => write!(f, "engine unavailable: {}", e),
            Self::NoLegalMoves => write!(f, "no legal moves"),
            Self::AdvisoryUnavailable(e) => write!(f, "{}", e),
            Self::Rejected(msg) => write!(f, "move rejected: {}", msg),
            Self::Timeout(limit) => write!(f, "timed out after {:?}", limit),
            Self::Interrupted => write!(f, "interrupted"),
        }
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.stage, self.fault)
    }
}

impl std::error::Error for Fault {}
impl std::error::Error for Failure {}
