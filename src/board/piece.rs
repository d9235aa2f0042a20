use super::*;

/// A piece as it stood when the snapshot was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    shape: Shape,
    color: Color,
    position: Coordinate,
}

impl Piece {
    pub fn new(shape: Shape, color: Color, position: Coordinate) -> Self {
        Self {
            shape,
            color,
            position,
        }
    }
    pub fn shape(&self) -> Shape {
        self.shape
    }
    pub fn color(&self) -> Color {
        self.color
    }
    pub fn position(&self) -> &Coordinate {
        &self.position
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} at {}", self.shape, self.position)
    }
}
