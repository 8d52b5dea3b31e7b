use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Upper bound on words per level, one door each.
pub const MAX_WORDS: usize = 64;

/// Upper bound on distinct characters across a level's words.
pub const MAX_UNIQUE_LETTERS: usize = 64;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Only the smallest tier can afford the exhaustive search.
    pub const fn verifier(self) -> Verifier {
        match self {
            Self::Easy => Verifier::Strict,
            Self::Medium | Self::Hard => Verifier::Relaxed,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl Default for Tier {
    fn default() -> Self {
        Self::Easy
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(GameError::UnknownTier)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyParams {
    pub width: Coord,
    pub height: Coord,
    pub word_count: u8,
    pub word_len_min: u8,
    pub word_len_max: u8,
}

impl DifficultyParams {
    pub fn new(
        (width, height): Coord2,
        word_count: u8,
        (word_len_min, word_len_max): (u8, u8),
    ) -> Result<Self> {
        if width < 3 || height < 3 {
            return Err(GameError::InvalidDimensions);
        }
        if word_len_min == 0 || word_len_min > word_len_max {
            return Err(GameError::InvalidWordLengths);
        }
        if usize::from(word_count) > MAX_WORDS {
            return Err(GameError::TooManyWords { max: MAX_WORDS });
        }
        Ok(Self {
            width,
            height,
            word_count,
            word_len_min,
            word_len_max,
        })
    }

    pub const fn easy() -> Self {
        Self {
            width: 15,
            height: 15,
            word_count: 3,
            word_len_min: 3,
            word_len_max: 3,
        }
    }

    pub const fn medium() -> Self {
        Self {
            width: 35,
            height: 30,
            word_count: 5,
            word_len_min: 4,
            word_len_max: 5,
        }
    }

    pub const fn hard() -> Self {
        Self {
            width: 65,
            height: 50,
            word_count: 3,
            word_len_min: 6,
            word_len_max: 9,
        }
    }

    pub const fn preset(tier: Tier) -> Self {
        match tier {
            Tier::Easy => Self::easy(),
            Tier::Medium => Self::medium(),
            Tier::Hard => Self::hard(),
        }
    }

    pub const fn size(&self) -> Coord2 {
        (self.width, self.height)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub fn accepts_word(&self, word: &str) -> bool {
        let len = word.chars().count();
        len >= usize::from(self.word_len_min) && len <= usize::from(self.word_len_max)
    }
}

/// Normalized, ordered words for one level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetWords(Vec<String>);

impl TargetWords {
    /// Trims and upper-cases every word, rejecting sets the verifier cannot index.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_uppercase())
            .collect();

        if words.iter().any(String::is_empty) {
            return Err(GameError::EmptyWord);
        }
        if words.len() > MAX_WORDS {
            return Err(GameError::TooManyWords { max: MAX_WORDS });
        }

        let target = Self(words);
        if target.unique_letters().len() > MAX_UNIQUE_LETTERS {
            return Err(GameError::TooManyLetters {
                max: MAX_UNIQUE_LETTERS,
            });
        }
        Ok(target)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Distinct characters across all words, in order of first occurrence.
    pub fn unique_letters(&self) -> Vec<char> {
        let mut letters = Vec::new();
        for letter in self.0.iter().flat_map(|word| word.chars()) {
            if !letters.contains(&letter) {
                letters.push(letter);
            }
        }
        letters
    }
}

/// Supplies grid dimensions and word choices per tier; the word pool lives outside the core.
pub trait DifficultyConfig {
    fn params(&self, tier: Tier) -> DifficultyParams;

    fn select_words<R: Rng + ?Sized>(&self, tier: Tier, rng: &mut R) -> TargetWords;
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn target_words_are_normalized() {
        let words = TargetWords::new([" cat", "Dog "]).unwrap();

        assert_eq!(words.iter().collect::<Vec<_>>(), vec!["CAT", "DOG"]);
        assert_eq!(words.unique_letters(), vec!['C', 'A', 'T', 'D', 'O', 'G']);
    }

    #[test]
    fn target_words_reject_blank_entries() {
        assert_eq!(TargetWords::new(["CAT", "  "]), Err(GameError::EmptyWord));
    }

    #[test]
    fn params_reject_degenerate_grids() {
        assert_eq!(
            DifficultyParams::new((2, 9), 1, (3, 3)),
            Err(GameError::InvalidDimensions)
        );
        assert_eq!(
            DifficultyParams::new((9, 9), 1, (4, 3)),
            Err(GameError::InvalidWordLengths)
        );
        assert!(DifficultyParams::new((3, 3), 0, (1, 1)).is_ok());
    }

    #[test]
    fn tier_parses_case_insensitively() {
        assert_eq!("Medium".parse::<Tier>(), Ok(Tier::Medium));
        assert_eq!("extreme".parse::<Tier>(), Err(GameError::UnknownTier));
        assert_eq!(Tier::Easy.verifier(), Verifier::Strict);
        assert_eq!(Tier::Hard.verifier(), Verifier::Relaxed);
    }
}
