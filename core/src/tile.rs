use core::fmt;

use serde::{Deserialize, Serialize};

/// Index of a door inside its level, one per target word.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DoorId(pub u8);

impl DoorId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for DoorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "door-{}", self.0)
    }
}

/// Content of a single grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Path,
    Letter(char),
    Door(DoorId),
    OpenDoor(DoorId),
}

impl Cell {
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }

    pub const fn is_path(self) -> bool {
        matches!(self, Self::Path)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Wall
    }
}
