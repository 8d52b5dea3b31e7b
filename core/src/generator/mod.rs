use rand::Rng;

use crate::*;
pub use backtracker::*;
pub use placement::*;

mod backtracker;
mod placement;

pub trait MazeGenerator {
    /// Carves a grid holding only [`Cell::Wall`] and [`Cell::Path`], with a sealed outer ring.
    fn generate<R: Rng + ?Sized>(&self, size: Coord2, rng: &mut R) -> Grid;
}
