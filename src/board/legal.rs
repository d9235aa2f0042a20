use super::*;
use std::collections::HashSet;

/// The engine's legal moves for the side to move, in engine order.
/// Unique by notation: repeated notations keep their first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Legal(Vec<Move>);

impl Legal {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// The move the engine listed first; the fallback choice.
    pub fn first(&self) -> Option<&Move> {
        self.0.first()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.0.iter()
    }
    /// Exact, byte-for-byte membership.
    pub fn contains(&self, notation: &str) -> bool {
        self.0.iter().any(|m| m.notation() == notation)
    }
    /// At most `n` leading moves.
    pub fn samples(&self, n: usize) -> &[Move] {
        &self.0[..n.min(self.0.len())]
    }
    pub fn notations(&self) -> Vec<&str> {
        self.0.iter().map(Move::notation).collect()
    }
}

impl From<Vec<Move>> for Legal {
    fn from(moves: Vec<Move>) -> Self {
        let ref mut seen = HashSet::new();
        Self(
            moves
                .into_iter()
                .filter(|m| seen.insert(m.notation().to_string()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Legal {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
