use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;
pub use relaxed::*;
pub use strict::*;

mod relaxed;
mod strict;

/// One bit per distinct letter of a level, in [`TargetWords::unique_letters`] order.
pub type LetterMask = u64;

/// One bit per door, indexed by [`DoorId`].
pub type DoorMask = u64;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verifier {
    /// Exhaustive search over position, collected letters and opened doors.
    Strict,
    /// Letter collection and door reachability checked separately.
    Relaxed,
}

/// Whether every door of `level` can be opened, as far as `verifier` can tell.
///
/// Both verifiers give up after a fixed number of expansions and report `false`, so a rejected
/// level is not proven unsolvable.
pub fn is_solvable(level: &Level, verifier: Verifier) -> bool {
    let door_count = level.doors().len();
    let word_count = level.target_words().len();

    if door_count < word_count {
        log::warn!("Level has {door_count} doors for {word_count} words, unsolvable");
        return false;
    }
    if door_count == 0 {
        log::debug!("Level has no doors, trivially solvable");
        return true;
    }

    match verifier {
        Verifier::Strict => is_solvable_strict(level),
        Verifier::Relaxed => is_solvable_relaxed(level),
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Alphabet {
    letters: SmallVec<[char; 32]>,
}

impl Alphabet {
    pub(crate) fn new(words: &TargetWords) -> Self {
        Self {
            letters: words.unique_letters().into_iter().collect(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.letters.len()
    }

    /// Bit of `letter`, or an empty mask for characters outside the alphabet.
    pub(crate) fn bit(&self, letter: char) -> LetterMask {
        self.letters
            .iter()
            .position(|&known| known == letter)
            .and_then(|index| u32::try_from(index).ok())
            .and_then(|index| LetterMask::checked_shl(1, index))
            .unwrap_or(0)
    }

    pub(crate) fn mask(&self, word: &str) -> LetterMask {
        word.chars().fold(0, |mask, letter| mask | self.bit(letter))
    }

    pub(crate) fn full(&self) -> LetterMask {
        self.letters
            .iter()
            .fold(0, |mask, &letter| mask | self.bit(letter))
    }
}

pub(crate) fn door_bit(id: DoorId) -> DoorMask {
    DoorMask::checked_shl(1, u32::from(id.0)).unwrap_or(0)
}
