use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Idle,
    Active,
    Won,
}

impl GameStatus {
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Idle
    }
}

/// Progress shown for one target word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordHint {
    pub door: DoorId,
    /// Space separated characters, `*` for every letter not collected yet.
    pub masked: String,
    pub unlocked: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub player: Coord2,
    pub collected_letters: Vec<char>,
    pub doors: Vec<Door>,
    pub hints: Vec<WordHint>,
}

/// Live play over an accepted [`Level`]. The level itself is never touched; collected letters and
/// opened doors are written to a separate board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleEngine {
    level: Level,
    board: Grid,
    doors: Vec<Door>,
    player: PlayerState,
    state: GameStatus,
}

impl PuzzleEngine {
    pub fn new(level: Level) -> Self {
        let board = level.grid().clone();
        let doors = level.doors().to_vec();
        let player = PlayerState::new(level.player_start());
        Self {
            level,
            board,
            doors,
            player,
            state: GameStatus::Active,
        }
    }

    pub fn state(&self) -> GameStatus {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn board(&self) -> &Grid {
        &self.board
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn door(&self, id: DoorId) -> Result<&Door> {
        self.doors
            .get(id.index())
            .ok_or(GameError::UnknownDoor(id))
    }

    pub fn open_door_count(&self) -> usize {
        self.doors.iter().filter(|door| door.is_open).count()
    }

    pub fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        use MoveOutcome::*;

        if !self.state.is_active() {
            return NoChange;
        }

        let Some(target) = direction.step(self.player.position, self.board.size()) else {
            return NoChange;
        };

        match self.board[target] {
            Cell::Wall => NoChange,
            Cell::Door(id) => {
                log::debug!("Player blocked by {id} at {target:?}");
                DoorChallenge(id)
            }
            Cell::Letter(letter) => {
                self.player.position = target;
                self.player.collected.insert(letter);
                self.board.set(target, Cell::Path);
                log::debug!("Collected '{letter}' at {target:?}");
                Collected(letter)
            }
            Cell::Path | Cell::OpenDoor(_) => {
                self.player.position = target;
                Moved
            }
        }
    }

    /// Checks a guess for `id`. Collected letters play no part in unlocking.
    pub fn submit_word(&mut self, id: DoorId, candidate: &str) -> Result<WordOutcome> {
        use WordOutcome::*;

        let door = self
            .doors
            .get_mut(id.index())
            .ok_or(GameError::UnknownDoor(id))?;

        if !self.state.is_active() || door.is_open {
            return Ok(NoChange);
        }

        let guess = candidate.trim().to_uppercase();
        if guess.is_empty() {
            return Ok(Empty);
        }
        if guess != door.word {
            log::debug!("Wrong guess for {id}");
            return Ok(Rejected);
        }

        door.is_open = true;
        let position = door.position;
        self.board.set(position, Cell::OpenDoor(id));

        if self.doors.iter().all(|door| door.is_open) {
            self.state = GameStatus::Won;
            log::info!("All {} doors open, level won", self.doors.len());
            Ok(Won)
        } else {
            log::info!("Opened {id} at {position:?}");
            Ok(Opened(id))
        }
    }

    pub fn hints(&self) -> Vec<WordHint> {
        self.doors
            .iter()
            .map(|door| {
                let masked = door
                    .word
                    .chars()
                    .map(|letter| {
                        if door.is_open || self.player.collected.contains(&letter) {
                            letter
                        } else {
                            '*'
                        }
                    })
                    .fold(String::new(), |mut masked, letter| {
                        if !masked.is_empty() {
                            masked.push(' ');
                        }
                        masked.push(letter);
                        masked
                    });

                WordHint {
                    door: door.id,
                    masked,
                    unlocked: door.is_open,
                }
            })
            .collect()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            status: self.state,
            player: self.player.position,
            collected_letters: self.player.collected.iter().copied().collect(),
            doors: self.doors.clone(),
            hints: self.hints(),
        }
    }
}
