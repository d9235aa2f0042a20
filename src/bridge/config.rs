use crate::ADVISOR_TIMEOUT_SECS;
use crate::ENGINE_TIMEOUT_SECS;
use crate::MAX_CONSECUTIVE_FAULTS;
use crate::POLL_INTERVAL_MS;
use crate::advisor::STRATEGY;
use crate::board::Color;
use std::time::Duration;

/// What happens to a resolved move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Submit it to the engine.
    Execute,
    /// Report it for the human to play by hand.
    Advise,
}

/// When the loop pauses for the human after acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledge {
    Never,
    EachMove,
}

/// Arbitration loop settings.
#[derive(Debug, Clone)]
pub struct ArbiterConfig {
    pub side: Color,
    pub poll: Duration,
    pub engine_timeout: Duration,
    pub advisor_timeout: Duration,
    pub max_faults: usize,
    pub analysis: bool,
    pub submission: Submission,
    pub acknowledge: Acknowledge,
    /// Bound on a single acknowledgment wait; unbounded when `None`.
    pub ack_timeout: Option<Duration>,
    pub preamble: String,
}

impl Default for ArbiterConfig {
    fn default() -> Self {
        Self {
            side: Color::Black,
            poll: Duration::from_millis(POLL_INTERVAL_MS),
            engine_timeout: Duration::from_secs(ENGINE_TIMEOUT_SECS),
            advisor_timeout: Duration::from_secs(ADVISOR_TIMEOUT_SECS),
            max_faults: MAX_CONSECUTIVE_FAULTS,
            analysis: true,
            submission: Submission::Execute,
            acknowledge: Acknowledge::Never,
            ack_timeout: None,
            preamble: String::from(STRATEGY),
        }
    }
}
