use super::*;

/// Position as read from the engine at the start of a cycle.
/// Rebuilt from scratch every cycle and dropped once the move is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    turn: u32,
    player: Color,
    pieces: Vec<Piece>,
}

impl Snapshot {
    pub fn new(turn: u32, player: Color, pieces: Vec<Piece>) -> Self {
        Self {
            turn,
            player,
            pieces,
        }
    }
    pub fn turn(&self) -> u32 {
        self.turn
    }
    /// Side to move.
    pub fn player(&self) -> Color {
        self.player
    }
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
    /// Pieces of one colour, in snapshot order.
    pub fn side(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.color() == color)
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "turn {} · {} to move · {} pieces",
            self.turn,
            self.player,
            self.pieces.len()
        )
    }
}
