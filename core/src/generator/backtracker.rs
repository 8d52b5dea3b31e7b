use alloc::vec;
use smallvec::SmallVec;

use super::*;

/// Randomized depth-first backtracker carving on odd coordinates, two cells per step.
///
/// The walk keeps its own stack instead of recursing, so the largest tiers never get near the
/// call stack limit.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BacktrackerGenerator;

impl BacktrackerGenerator {
    /// Random odd coordinate on each axis, always inside the outer ring.
    fn pick_start<R: Rng + ?Sized>((width, height): Coord2, rng: &mut R) -> Coord2 {
        let odd_slots = |len: Coord| (len - 1) / 2;
        let x = rng.random_range(0..odd_slots(width)) * 2 + 1;
        let y = rng.random_range(0..odd_slots(height)) * 2 + 1;
        (x, y)
    }
}

impl MazeGenerator for BacktrackerGenerator {
    fn generate<R: Rng + ?Sized>(&self, size: Coord2, rng: &mut R) -> Grid {
        let mut grid = Grid::filled(size, Cell::Wall);

        if size.0 < 3 || size.1 < 3 {
            log::warn!(
                "Maze of {}x{} has no interior, generated walls only",
                size.0,
                size.1
            );
            return grid;
        }

        let start = Self::pick_start(size, rng);
        grid.set(start, Cell::Path);
        let mut stack = vec![start];

        while let Some(&current) = stack.last() {
            let mut candidates: SmallVec<[(Coord2, Coord2); 4]> = SmallVec::new();
            for direction in Direction::ALL {
                let Some(next) = direction.step_by(current, 2, size) else {
                    continue;
                };
                if !grid.is_interior(next) || !grid.cell_at(next).is_wall() {
                    continue;
                }
                if let Some(between) = direction.step(current, size) {
                    candidates.push((next, between));
                }
            }

            if candidates.is_empty() {
                stack.pop();
                continue;
            }

            let (next, between) = candidates[rng.random_range(0..candidates.len())];
            grid.set(between, Cell::Path);
            grid.set(next, Cell::Path);
            stack.push(next);
        }

        grid.seal_border();
        log::debug!(
            "Carved {}x{} maze from {:?} with {} path cells",
            size.0,
            size.1,
            start,
            grid.count_cells(Cell::is_path)
        );
        grid
    }
}
