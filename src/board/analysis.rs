use super::*;

/// A value held once per colour.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PerSide<T> {
    pub white: T,
    pub black: T,
}

impl<T: Copy> PerSide<T> {
    pub fn get(&self, color: Color) -> T {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}

/// Engine's own read of the position. Context for the prompt only;
/// it never takes part in move validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    material: PerSide<i64>,
    evaluation: f64,
    distance: PerSide<Option<u32>>,
}

impl Analysis {
    pub fn new(
        material: PerSide<i64>,
        evaluation: f64,
        distance: PerSide<Option<u32>>,
    ) -> Self {
        Self {
            material,
            evaluation,
            distance,
        }
    }
    pub fn material(&self) -> PerSide<i64> {
        self.material
    }
    /// Positive favours White.
    pub fn evaluation(&self) -> f64 {
        self.evaluation
    }
    /// Steps from each rhombus to its goal, when that rhombus is on the board.
    pub fn distance(&self) -> PerSide<Option<u32>> {
        self.distance
    }
}
