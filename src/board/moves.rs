use super::*;

/// A legal move as enumerated by the engine.
///
/// `notation` is the only identity a move has: two moves are the same move
/// iff their notations are byte-identical. The descriptor fields are present
/// only when the engine chose to send them and are used for prompt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    notation: String,
    piece: Option<String>,
    from: Option<Coordinate>,
    to: Option<Coordinate>,
}

impl Move {
    pub fn new<S>(notation: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            notation: notation.into(),
            piece: None,
            from: None,
            to: None,
        }
    }
    pub fn described(
        mut self,
        piece: Option<String>,
        from: Option<Coordinate>,
        to: Option<Coordinate>,
    ) -> Self {
        self.piece = piece;
        self.from = from;
        self.to = to;
        self
    }
    pub fn notation(&self) -> &str {
        &self.notation
    }
    /// Notation, followed by the descriptor when all three fields are known.
    pub fn describe(&self) -> String {
        match (&self.piece, &self.from, &self.to) {
            (Some(piece), Some(from), Some(to)) => {
                format!("{} ({} from {} to {})", self.notation, piece, from, to)
            }
            _ => self.notation.clone(),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.notation)
    }
}
