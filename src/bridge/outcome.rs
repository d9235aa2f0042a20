/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    GameOver,
    Stopped,
}

/// Summary returned once the loop has released the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub ending: Ending,
    pub moves: usize,
    pub fallbacks: usize,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ending = match self.ending {
            Ending::GameOver => "game over",
            Ending::Stopped => "stopped",
        };
        write!(
            f,
            "{} after {} moves ({} fallbacks)",
            ending, self.moves, self.fallbacks
        )
    }
}
