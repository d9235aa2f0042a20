use super::*;
use crate::board::Color;
use colored::Colorize;

/// Progress reported to the operator as the loop runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Started { side: Color },
    Waiting { turn: u32, player: Color },
    Thinking { turn: u32, legal: usize },
    Proposed(String),
    Fallback { proposed: String, chosen: String },
    Moved { number: usize, notation: String },
    Suggested { number: usize, notation: String },
    Faulted(Failure),
    GameOver { moves: usize },
    Stopped { moves: usize },
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Started { side } => write!(
                f,
                "bridge plays {}, you play {}",
                side.to_string().bold(),
                side.opponent()
            ),
            Self::Waiting { turn, player } => {
                write!(f, "{}", format!("turn {} · waiting for {} to move", turn, player).dimmed())
            }
            Self::Thinking { turn, legal } => {
                write!(f, "turn {} · thinking over {} legal moves", turn, legal)
            }
            Self::Proposed(text) => write!(f, "advisor proposed {}", text.cyan()),
            Self::Fallback { proposed, chosen } => write!(
                f,
                "{} {:?} is not legal, playing {}",
                "fallback".yellow(),
                proposed,
                chosen.bold()
            ),
            Self::Moved { number, notation } => {
                write!(f, "move {} · {}", number, notation.green().bold())
            }
            Self::Suggested { number, notation } => write!(
                f,
                "move {} · play {} on the board",
                number,
                notation.green().bold()
            ),
            Self::Faulted(failure) => write!(f, "{}", failure.to_string().red()),
            Self::GameOver { moves } => write!(f, "{} after {} moves", "game over".bold(), moves),
            Self::Stopped { moves } => write!(f, "{} after {} moves", "stopped".bold(), moves),
        }
    }
}
