#![no_std]

extern crate alloc;

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use analysis::*;
pub use builder::*;
pub use difficulty::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use scores::*;
pub use session::*;
pub use tile::*;
pub use timer::*;
pub use types::*;

mod analysis;
mod builder;
mod difficulty;
mod engine;
mod error;
mod generator;
mod grid;
mod scores;
mod session;
mod tile;
mod timer;
mod types;

/// A door guarding one target word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    pub id: DoorId,
    pub position: Coord2,
    pub word: String,
    pub is_open: bool,
}

impl Door {
    pub fn new(id: DoorId, position: Coord2, word: &str) -> Self {
        Self {
            id,
            position,
            word: word.into(),
            is_open: false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterTile {
    pub position: Coord2,
    pub letter: char,
}

/// Verified level: maze, start, doors and letters. Only the builder creates one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    grid: Grid,
    player_start: Coord2,
    doors: Vec<Door>,
    letters: Vec<LetterTile>,
    target_words: TargetWords,
}

impl Level {
    pub(crate) fn new(
        grid: Grid,
        player_start: Coord2,
        doors: Vec<Door>,
        letters: Vec<LetterTile>,
        target_words: TargetWords,
    ) -> Self {
        Self {
            grid,
            player_start,
            doors,
            letters,
            target_words,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn player_start(&self) -> Coord2 {
        self.player_start
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn letters(&self) -> &[LetterTile] {
        &self.letters
    }

    pub fn target_words(&self) -> &TargetWords {
        &self.target_words
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub position: Coord2,
    pub collected: BTreeSet<char>,
}

impl PlayerState {
    pub fn new(position: Coord2) -> Self {
        Self {
            position,
            collected: BTreeSet::new(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    NoChange,
    Moved,
    Collected(char),
    DoorChallenge(DoorId),
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Moved => true,
            Collected(_) => true,
            DoorChallenge(_) => false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WordOutcome {
    NoChange,
    Empty,
    Rejected,
    Opened(DoorId),
    Won,
}

impl WordOutcome {
    pub const fn has_update(self) -> bool {
        use WordOutcome::*;
        match self {
            NoChange => false,
            Empty => false,
            Rejected => false,
            Opened(_) => true,
            Won => true,
        }
    }
}

/// Builds a level from a plain-text picture for tests.
///
/// `#` wall, `.` path, `@` player start, digits are doors for the word at that index, anything
/// else is a letter tile.
#[cfg(test)]
pub(crate) fn parse_level(rows: &[&str], words: &[&str]) -> Level {
    let target_words = TargetWords::new(words.iter().copied()).unwrap();
    let size = (rows[0].len() as Coord, rows.len() as Coord);
    let mut grid = Grid::filled(size, Cell::Wall);
    let mut player_start = (0, 0);
    let mut doors = Vec::new();
    let mut letters = Vec::new();

    for (y, row) in rows.iter().enumerate() {
        for (x, symbol) in row.chars().enumerate() {
            let coords = (x as Coord, y as Coord);
            let cell = match symbol {
                '#' => Cell::Wall,
                '.' => Cell::Path,
                '@' => {
                    player_start = coords;
                    Cell::Path
                }
                '0'..='9' => {
                    let id = DoorId(symbol.to_digit(10).unwrap() as u8);
                    doors.push(Door::new(id, coords, target_words.get(id.index()).unwrap()));
                    Cell::Door(id)
                }
                letter => {
                    letters.push(LetterTile {
                        position: coords,
                        letter,
                    });
                    Cell::Letter(letter)
                }
            };
            grid.set(coords, cell);
        }
    }

    doors.sort_by_key(|door| door.id);
    Level::new(grid, player_start, doors, letters, target_words)
}
