use thiserror::Error;

use crate::DoorId;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid dimensions must be between 3 and 255 on both axes")]
    InvalidDimensions,
    #[error("Invalid word length bounds")]
    InvalidWordLengths,
    #[error("Target words must not be empty")]
    EmptyWord,
    #[error("Too many target words, at most {max} fit in a level")]
    TooManyWords { max: usize },
    #[error("Too many distinct letters, at most {max} fit in a level")]
    TooManyLetters { max: usize },
    #[error("No door {0} in the current level")]
    UnknownDoor(DoorId),
    #[error("Unknown difficulty tier")]
    UnknownTier,
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Every build attempt was spent without producing a solvable level.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error(
    "Failed to generate a solvable level after {attempts} attempts \
     ({placement_failures} placement failures, {unsolvable} unsolvable)"
)]
pub struct GenerationFailure {
    pub attempts: u32,
    pub placement_failures: u32,
    pub unsolvable: u32,
}
