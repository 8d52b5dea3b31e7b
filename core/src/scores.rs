use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Times kept per tier.
pub const BOARD_SIZE: usize = 10;

/// Receives the elapsed time of every won level. The core never reads scores back.
pub trait ScoreStore {
    fn save(&mut self, tier: Tier, elapsed_secs: u64);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Score {
    pub elapsed_secs: u64,
}

/// Fastest times per tier, in memory only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    boards: BTreeMap<Tier, Vec<Score>>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts after any equal time and returns the 1-based rank, or `None` when the time did not
    /// make the board.
    pub fn add_score(&mut self, tier: Tier, elapsed_secs: u64) -> Option<usize> {
        let score = Score { elapsed_secs };
        let board = self.boards.entry(tier).or_default();
        let index = board.partition_point(|kept| *kept <= score);

        if index >= BOARD_SIZE {
            return None;
        }

        board.insert(index, score);
        board.truncate(BOARD_SIZE);
        Some(index + 1)
    }

    pub fn scores(&self, tier: Tier) -> &[Score] {
        self.boards.get(&tier).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn best(&self, tier: Tier) -> Option<Score> {
        self.scores(tier).first().copied()
    }
}

impl ScoreStore for Leaderboard {
    fn save(&mut self, tier: Tier, elapsed_secs: u64) {
        match self.add_score(tier, elapsed_secs) {
            Some(rank) => log::info!("New {tier} score {elapsed_secs}s ranked #{rank}"),
            None => log::debug!("{tier} score {elapsed_secs}s did not make the board"),
        }
    }
}
