use alloc::vec::Vec;
use rand::seq::SliceRandom;

use super::*;

/// Samples interior cells until one is a path.
///
/// Returns `None` when the grid has no interior path cell at all, which is a generation defect
/// for the caller to discard.
pub fn place_player<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Option<Coord2> {
    let has_floor = grid
        .positions()
        .any(|coords| grid.is_interior(coords) && grid.cell_at(coords).is_path());
    if !has_floor {
        log::warn!("No path cell to place the player on");
        return None;
    }

    loop {
        let coords = grid.random_interior(rng);
        if grid.cell_at(coords).is_path() {
            log::debug!("Player placed at {coords:?}");
            return Some(coords);
        }
    }
}

fn is_free(grid: &Grid, coords: Coord2, player: Coord2, doors: &[Door]) -> bool {
    grid.cell_at(coords).is_path()
        && coords != player
        && !doors.iter().any(|door| door.position == coords)
}

/// Turns one random path cell into a door per target word, in word order.
///
/// The attempt budget is `width * height` for the whole call. Running out returns the doors placed
/// so far; a list shorter than `words` means the grid is unusable.
pub fn place_doors<R: Rng + ?Sized>(
    grid: &mut Grid,
    words: &TargetWords,
    player: Coord2,
    rng: &mut R,
) -> Vec<Door> {
    let max_attempts = usize::from(grid.total_cells());
    let mut attempts = 0;
    let mut doors = Vec::with_capacity(words.len());

    'words: for (index, word) in words.iter().enumerate() {
        let Ok(raw_id) = u8::try_from(index) else {
            break;
        };
        let id = DoorId(raw_id);

        loop {
            if attempts >= max_attempts {
                break 'words;
            }
            attempts += 1;

            let coords = grid.random_interior(rng);
            if is_free(grid, coords, player, &doors) {
                grid.set(coords, Cell::Door(id));
                doors.push(Door::new(id, coords, word));
                log::debug!("Door {id} for {word:?} placed at {coords:?}");
                break;
            }
        }
    }

    if doors.len() < words.len() {
        log::warn!(
            "Could only place {} of {} doors after {} attempts",
            doors.len(),
            words.len(),
            attempts
        );
    }
    doors
}

/// Scatters one tile for every distinct letter of the target words, in shuffled order.
///
/// The total budget of `width * height * 4` attempts is split evenly between letters. Returns
/// `None` as soon as a letter cannot be placed; cells already converted are left as they are.
pub fn place_letters<R: Rng + ?Sized>(
    grid: &mut Grid,
    words: &TargetWords,
    doors: &[Door],
    player: Coord2,
    rng: &mut R,
) -> Option<Vec<LetterTile>> {
    let mut letters = words.unique_letters();
    letters.shuffle(rng);

    let mut tiles = Vec::with_capacity(letters.len());
    if letters.is_empty() {
        return Some(tiles);
    }

    let max_attempts = usize::from(grid.total_cells()) * 4;
    let max_attempts_per_letter = max_attempts / letters.len();
    let mut attempts = 0;

    for letter in letters {
        let mut letter_attempts = 0;
        let mut placed = false;

        while !placed && letter_attempts < max_attempts_per_letter && attempts < max_attempts {
            let coords = grid.random_interior(rng);
            if is_free(grid, coords, player, doors) {
                grid.set(coords, Cell::Letter(letter));
                tiles.push(LetterTile {
                    position: coords,
                    letter,
                });
                placed = true;
            }
            letter_attempts += 1;
            attempts += 1;
        }

        if !placed {
            log::warn!("Could not place letter '{letter}' after {letter_attempts} attempts");
            return None;
        }
    }

    log::debug!("Placed {} letter tiles", tiles.len());
    Some(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn words(list: &[&str]) -> TargetWords {
        TargetWords::new(list.iter().copied()).unwrap()
    }

    #[test]
    fn placement_avoids_player_and_door_cells() {
        let target = words(&["CAT", "DOG", "SUN"]);

        for seed in 0..30 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut grid = BacktrackerGenerator.generate((15, 15), &mut rng);
            let player = place_player(&grid, &mut rng).unwrap();
            let doors = place_doors(&mut grid, &target, player, &mut rng);
            let tiles = place_letters(&mut grid, &target, &doors, player, &mut rng).unwrap();

            assert_eq!(doors.len(), 3);
            assert_eq!(grid.cell_at(player), Cell::Path, "seed {seed}");

            let door_cells: BTreeSet<_> = doors.iter().map(|door| door.position).collect();
            assert_eq!(door_cells.len(), doors.len(), "seed {seed}");
            assert!(!door_cells.contains(&player), "seed {seed}");

            for door in &doors {
                assert_eq!(grid.cell_at(door.position), Cell::Door(door.id));
                assert_eq!(target.get(door.id.index()), Some(door.word.as_str()));
            }
            for tile in &tiles {
                assert_ne!(tile.position, player, "seed {seed}");
                assert!(!door_cells.contains(&tile.position), "seed {seed}");
                assert_eq!(grid.cell_at(tile.position), Cell::Letter(tile.letter));
            }
        }
    }

    #[test]
    fn letters_cover_every_distinct_character_once() {
        let target = words(&["APPLE", "PEAR"]);
        let mut rng = SmallRng::seed_from_u64(11);
        let mut grid = BacktrackerGenerator.generate((15, 15), &mut rng);
        let player = place_player(&grid, &mut rng).unwrap();
        let doors = place_doors(&mut grid, &target, player, &mut rng);
        let tiles = place_letters(&mut grid, &target, &doors, player, &mut rng).unwrap();

        let placed: BTreeSet<char> = tiles.iter().map(|tile| tile.letter).collect();
        let expected: BTreeSet<char> = target.unique_letters().into_iter().collect();
        assert_eq!(placed, expected);
        assert_eq!(tiles.len(), expected.len());
    }

    #[test]
    fn player_needs_a_path_cell() {
        let grid = Grid::filled((5, 5), Cell::Wall);
        let mut rng = SmallRng::seed_from_u64(0);

        assert_eq!(place_player(&grid, &mut rng), None);
    }

    #[test]
    fn doors_come_up_short_on_a_crowded_grid() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut grid = BacktrackerGenerator.generate((3, 3), &mut rng);
        let player = place_player(&grid, &mut rng).unwrap();

        let doors = place_doors(&mut grid, &words(&["CAT"]), player, &mut rng);

        assert!(doors.is_empty());
        assert_eq!(grid.cell_at(player), Cell::Path);
    }

    #[test]
    fn letters_fail_without_free_cells() {
        let mut grid = Grid::filled((5, 3), Cell::Wall);
        grid.set((1, 1), Cell::Path);
        grid.set((2, 1), Cell::Path);
        grid.set((3, 1), Cell::Path);
        let target = words(&["AB"]);
        let mut rng = SmallRng::seed_from_u64(9);
        let doors = place_doors(&mut grid, &target, (1, 1), &mut rng);
        assert_eq!(doors.len(), 1);

        // one free cell left for two letters
        let tiles = place_letters(&mut grid, &target, &doors, (1, 1), &mut rng);

        assert_eq!(tiles, None);
    }
}
