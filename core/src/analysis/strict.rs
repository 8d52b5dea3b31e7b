use alloc::collections::VecDeque;
use alloc::vec::Vec;
use hashbrown::HashSet;

use super::*;

/// Expansions allowed per cell and per door (plus one).
const STRICT_EXPANSIONS_FACTOR: usize = 250;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct SearchState {
    position: Coord2,
    letters: LetterMask,
    doors: DoorMask,
}

/// Breadth-first search over `(position, collected letters, opened doors)`.
///
/// Letters are collected by walking over them and never consumed. A closed door can only be
/// entered once every letter of its word has been collected, which opens it for the rest of the
/// search. Succeeds as soon as a dequeued state has every door open.
pub fn is_solvable_strict(level: &Level) -> bool {
    let max_expansions = usize::from(level.grid().total_cells())
        * (level.doors().len() + 1)
        * STRICT_EXPANSIONS_FACTOR;
    search(level, max_expansions)
}

fn search(level: &Level, max_expansions: usize) -> bool {
    let grid = level.grid();
    let alphabet = Alphabet::new(level.target_words());
    let door_masks: Vec<LetterMask> = level
        .doors()
        .iter()
        .map(|door| alphabet.mask(&door.word))
        .collect();
    let door_count = door_masks.len();

    let start = SearchState {
        position: level.player_start(),
        letters: 0,
        doors: 0,
    };
    let mut visited: HashSet<SearchState> = HashSet::from_iter([start]);
    let mut queue = VecDeque::from([start]);
    let mut expansions = 0;

    while let Some(state) = queue.pop_front() {
        expansions += 1;
        if expansions > max_expansions {
            log::warn!("Strict solvability: gave up after {max_expansions} expansions");
            return false;
        }

        if state.doors.count_ones() as usize == door_count {
            log::debug!("Strict solvability: all doors open after {expansions} expansions");
            return true;
        }

        for next in grid.iter_neighbors(state.position) {
            let mut letters = state.letters;
            let mut doors = state.doors;

            match grid.cell_at(next) {
                Cell::Wall => continue,
                Cell::Letter(letter) => letters |= alphabet.bit(letter),
                Cell::Door(id) => {
                    let bit = door_bit(id);
                    if doors & bit == 0 {
                        let Some(&required) = door_masks.get(id.index()) else {
                            continue;
                        };
                        if required & !letters != 0 {
                            continue;
                        }
                        doors |= bit;
                    }
                }
                Cell::Path | Cell::OpenDoor(_) => {}
            }

            let candidate = SearchState {
                position: next,
                letters,
                doors,
            };
            if visited.insert(candidate) {
                queue.push_back(candidate);
            }
        }
    }

    log::warn!("Strict solvability: not every door can be opened");
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_doors_is_solvable() {
        let level = parse_level(&["#####", "#@..#", "#.#.#", "#...#", "#####"], &[]);

        assert!(is_solvable_strict(&level));
    }

    #[test]
    fn door_opens_once_letters_are_collected() {
        let level = parse_level(&["#######", "#T@CA0#", "#######"], &["CAT"]);

        assert!(is_solvable_strict(&level));
    }

    #[test]
    fn absent_letter_blocks_the_door() {
        let level = parse_level(&["######", "#@CA0#", "######"], &["CAT"]);

        assert!(!is_solvable_strict(&level));
    }

    #[test]
    fn letter_behind_its_own_door_is_unreachable() {
        let level = parse_level(&["######", "#@C0T#", "######"], &["CT"]);

        assert!(!is_solvable_strict(&level));
    }

    #[test]
    fn opening_one_door_can_lead_to_the_letters_of_the_next() {
        let level = parse_level(
            &[
                "#########",
                "#@AB0D.1#",
                "#########",
            ],
            &["AB", "DAB"],
        );

        assert!(is_solvable_strict(&level));
    }

    #[test]
    fn running_out_of_expansions_rejects() {
        let level = parse_level(&["#######", "#T@CA0#", "#######"], &["CAT"]);

        // two expansions only reach the tile next to the start
        assert!(!search(&level, 2));
        assert!(!search(&level, 0));
        assert!(search(&level, 100));
    }

    #[test]
    fn collecting_does_not_consume_letters() {
        // both doors spell with the single A tile
        let level = parse_level(&["#######", "#0A@.1#", "#######"], &["A", "A"]);

        assert!(is_solvable_strict(&level));
    }
}
