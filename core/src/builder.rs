use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::*;

/// Full generate, place and verify rounds before a build gives up.
pub const MAX_BUILD_ATTEMPTS: u32 = 20;

/// Why a single attempt was thrown away before verification.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
enum PlacementFailure {
    #[error("no path cell for the player")]
    NoPathCell,
    #[error("only {placed} of {required} doors placed")]
    Doors { placed: usize, required: usize },
    #[error("letters could not all be placed")]
    Letters,
}

/// Counters of a successful build.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    pub attempts: u32,
    pub placement_failures: u32,
    pub unsolvable: u32,
}

/// Generates mazes, places objects and verifies them until a level is accepted.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelBuilder<G = BacktrackerGenerator> {
    generator: G,
}

impl Default for LevelBuilder<BacktrackerGenerator> {
    fn default() -> Self {
        Self::new(BacktrackerGenerator)
    }
}

impl<G: MazeGenerator> LevelBuilder<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Picks the tier's words once, then retries generation up to [`MAX_BUILD_ATTEMPTS`] times.
    pub fn build<C, R>(
        &self,
        tier: Tier,
        config: &C,
        rng: &mut R,
    ) -> core::result::Result<Level, GenerationFailure>
    where
        C: DifficultyConfig,
        R: Rng + ?Sized,
    {
        self.build_with_report(tier, config, rng)
            .map(|(level, _)| level)
    }

    pub fn build_with_report<C, R>(
        &self,
        tier: Tier,
        config: &C,
        rng: &mut R,
    ) -> core::result::Result<(Level, BuildReport), GenerationFailure>
    where
        C: DifficultyConfig,
        R: Rng + ?Sized,
    {
        let params = config.params(tier);
        let words = config.select_words(tier, rng);
        log::debug!(
            "Building {tier} level of {}x{} for {} words",
            params.width,
            params.height,
            words.len()
        );
        self.build_words(&params, words, tier.verifier(), rng)
    }

    /// Retry loop over fixed words. Every failed attempt discards the whole grid.
    pub fn build_words<R: Rng + ?Sized>(
        &self,
        params: &DifficultyParams,
        words: TargetWords,
        verifier: Verifier,
        rng: &mut R,
    ) -> core::result::Result<(Level, BuildReport), GenerationFailure> {
        let mut report = BuildReport::default();

        while report.attempts < MAX_BUILD_ATTEMPTS {
            report.attempts += 1;
            log::debug!("Level generation attempt {}", report.attempts);

            let level = match self.attempt(params, &words, rng) {
                Ok(level) => level,
                Err(failure) => {
                    log::warn!("Placement failed, {failure}, regenerating");
                    report.placement_failures += 1;
                    continue;
                }
            };

            if is_solvable(&level, verifier) {
                log::info!(
                    "Accepted {}x{} level after {} attempts",
                    params.width,
                    params.height,
                    report.attempts
                );
                return Ok((level, report));
            }

            log::warn!("Generated level is not solvable, regenerating");
            report.unsolvable += 1;
        }

        let failure = GenerationFailure {
            attempts: report.attempts,
            placement_failures: report.placement_failures,
            unsolvable: report.unsolvable,
        };
        log::error!("{failure}");
        Err(failure)
    }

    fn attempt<R: Rng + ?Sized>(
        &self,
        params: &DifficultyParams,
        words: &TargetWords,
        rng: &mut R,
    ) -> core::result::Result<Level, PlacementFailure> {
        let mut grid = self.generator.generate(params.size(), rng);
        let player = place_player(&grid, rng).ok_or(PlacementFailure::NoPathCell)?;

        let doors = place_doors(&mut grid, words, player, rng);
        if doors.len() < words.len() {
            return Err(PlacementFailure::Doors {
                placed: doors.len(),
                required: words.len(),
            });
        }

        let letters =
            place_letters(&mut grid, words, &doors, player, rng).ok_or(PlacementFailure::Letters)?;

        Ok(Level::new(grid, player, doors, letters, words.clone()))
    }
}
