use core::fmt;
use core::ops::Index;

use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular board of [`Cell`]s, indexed by `(x, y)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    pub fn filled(size: Coord2, cell: Cell) -> Self {
        Self {
            cells: Array2::from_elem(size.to_nd_index(), cell),
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (
            dim.0.try_into().unwrap_or(Coord::MAX),
            dim.1.try_into().unwrap_or(Coord::MAX),
        )
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        let (width, height) = self.size();
        mult(width, height)
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    pub(crate) fn set(&mut self, coords: Coord2, cell: Cell) {
        self.cells[coords.to_nd_index()] = cell;
    }

    /// Whether `coords` lies strictly inside the outer ring.
    pub fn is_interior(&self, coords: Coord2) -> bool {
        let (width, height) = self.size();
        coords.0 > 0 && coords.1 > 0 && coords.0 + 1 < width && coords.1 + 1 < height
    }

    /// Every position, column by column.
    pub fn positions(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (width, height) = self.size();
        (0..width).flat_map(move |x| (0..height).map(move |y| (x, y)))
    }

    pub fn count_cells(&self, predicate: impl Fn(Cell) -> bool) -> usize {
        self.cells.iter().filter(|&&cell| predicate(cell)).count()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Uniformly random interior position, whatever the cell holds.
    pub(crate) fn random_interior<R: Rng + ?Sized>(&self, rng: &mut R) -> Coord2 {
        let (width, height) = self.size();
        (rng.random_range(1..width - 1), rng.random_range(1..height - 1))
    }

    pub(crate) fn seal_border(&mut self) {
        let (width, height) = self.size();
        for y in 0..height {
            self.set((0, y), Cell::Wall);
            self.set((width - 1, y), Cell::Wall);
        }
        for x in 0..width {
            self.set((x, 0), Cell::Wall);
            self.set((x, height - 1), Cell::Wall);
        }
    }

    pub fn border_is_sealed(&self) -> bool {
        self.positions()
            .filter(|&coords| !self.is_interior(coords))
            .all(|coords| self.cell_at(coords).is_wall())
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.cells[(x as usize, y as usize)]
    }
}

/// Plain-text dump: `#` wall, `.` path, the letter itself, `+` closed door, `/` open door.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.size();
        for y in 0..height {
            for x in 0..width {
                let symbol = match self.cell_at((x, y)) {
                    Cell::Wall => '#',
                    Cell::Path => '.',
                    Cell::Letter(letter) => letter,
                    Cell::Door(_) => '+',
                    Cell::OpenDoor(_) => '/',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
