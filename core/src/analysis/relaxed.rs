use alloc::collections::VecDeque;
use hashbrown::HashSet;

use super::*;

/// Expansions allowed per cell and per distinct letter while collecting letters.
const LETTER_EXPANSIONS_FACTOR: usize = 50;

/// Expansions allowed per cell while looking for a single door.
const DOOR_EXPANSIONS_FACTOR: usize = 2;

/// Two independent necessary conditions, used where the strict search is too expensive.
///
/// Passing both does not prove the level solvable: a door may be reachable yet only after walking
/// through another door whose word is not spelled yet.
pub fn is_solvable_relaxed(level: &Level) -> bool {
    if !letters_collectable(level) {
        log::warn!("Relaxed solvability: not every letter can be collected");
        return false;
    }

    for door in level.doors() {
        if !door_reachable(level.grid(), level.player_start(), door.position) {
            log::warn!(
                "Relaxed solvability: {} at {:?} is not reachable",
                door.id,
                door.position
            );
            return false;
        }
    }

    log::debug!("Relaxed solvability: every letter and door is reachable");
    true
}

/// Searches `(position, collected letters)` without ever stepping on a door, succeeding once every
/// distinct letter of the level is collected.
pub fn letters_collectable(level: &Level) -> bool {
    let letter_count = Alphabet::new(level.target_words()).len();
    let max_expansions =
        usize::from(level.grid().total_cells()) * letter_count * LETTER_EXPANSIONS_FACTOR;
    collect_letters(level, max_expansions)
}

fn collect_letters(level: &Level, max_expansions: usize) -> bool {
    let grid = level.grid();
    let alphabet = Alphabet::new(level.target_words());
    let required = alphabet.full();

    if required == 0 {
        return level.doors().is_empty();
    }

    let start = (level.player_start(), 0);
    let mut visited: HashSet<(Coord2, LetterMask)> = HashSet::from_iter([start]);
    let mut queue = VecDeque::from([start]);
    let mut expansions = 0;

    while let Some((position, letters)) = queue.pop_front() {
        expansions += 1;
        if expansions > max_expansions {
            log::warn!("Letter collection: gave up after {max_expansions} expansions");
            return false;
        }

        if letters & required == required {
            return true;
        }

        for next in grid.iter_neighbors(position) {
            let letters = match grid.cell_at(next) {
                Cell::Wall | Cell::Door(_) => continue,
                Cell::Letter(letter) => letters | alphabet.bit(letter),
                Cell::Path | Cell::OpenDoor(_) => letters,
            };

            if visited.insert((next, letters)) {
                queue.push_back((next, letters));
            }
        }
    }

    false
}

/// Plain breadth-first search from `start` to `target` where every non-wall cell is walkable.
pub fn door_reachable(grid: &Grid, start: Coord2, target: Coord2) -> bool {
    let max_expansions = usize::from(grid.total_cells()) * DOOR_EXPANSIONS_FACTOR;
    reach(grid, start, target, max_expansions)
}

fn reach(grid: &Grid, start: Coord2, target: Coord2, max_expansions: usize) -> bool {
    let mut visited: HashSet<Coord2> = HashSet::from_iter([start]);
    let mut queue = VecDeque::from([start]);
    let mut expansions = 0;

    while let Some(position) = queue.pop_front() {
        expansions += 1;
        if expansions > max_expansions {
            log::warn!("Door reachability: gave up after {max_expansions} expansions");
            return false;
        }

        if position == target {
            return true;
        }

        for next in grid.iter_neighbors(position) {
            if !grid.cell_at(next).is_wall() && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    false
}
