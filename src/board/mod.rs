mod analysis;
mod color;
mod coordinate;
mod legal;
mod moves;
mod piece;
mod shape;
mod snapshot;

pub use analysis::*;
pub use color::*;
pub use coordinate::*;
pub use legal::*;
pub use moves::*;
pub use piece::*;
pub use shape::*;
pub use snapshot::*;
