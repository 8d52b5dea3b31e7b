use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use rand::Rng;
use wordmaze_core::*;

use crate::words::WordBank;

/// Prints the board with the player on top after every change.
#[derive(Debug, Default)]
pub struct TerminalView;

impl RenderSink for TerminalView {
    fn render(&mut self, engine: &PuzzleEngine) {
        let board = engine.board();
        let player = engine.player().position;
        let mut out = String::new();

        for y in 0..board.height() {
            for x in 0..board.width() {
                let symbol = match board.cell_at((x, y)) {
                    _ if (x, y) == player => '@',
                    Cell::Wall => '#',
                    Cell::Path => ' ',
                    Cell::Letter(letter) => letter,
                    Cell::Door(id) => char::from_digit(u32::from(id.0 % 10), 10).unwrap_or('+'),
                    Cell::OpenDoor(_) => '/',
                };
                out.push(symbol);
            }
            out.push('\n');
        }

        for hint in engine.hints() {
            let mark = if hint.unlocked { "open" } else { "locked" };
            out.push_str(&format!("  {} [{}] {}\n", hint.door.0, mark, hint.masked));
        }
        let collected: String = engine.player().collected.iter().collect();
        out.push_str(&format!("  letters: {collected}\n"));

        print!("{out}");
    }
}

/// Tells the player which door they bumped into.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl UiPrompt for TerminalPrompt {
    fn door_challenge(&mut self, door: &Door) {
        println!(
            "Door {} is locked, answer with `guess {} <word>`",
            door.id.0, door.id.0
        );
    }
}

type TerminalSession = GameSession<Stopwatch, Leaderboard, TerminalView, TerminalPrompt>;

enum Command {
    Move(Direction),
    Guess(DoorId, String),
    Restart,
    Quit,
}

fn parse_command(line: &str) -> Result<Command> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        bail!("empty command");
    };

    Ok(match verb.to_ascii_lowercase().as_str() {
        "n" | "north" | "k" => Command::Move(Direction::North),
        "s" | "south" | "j" => Command::Move(Direction::South),
        "w" | "west" | "h" => Command::Move(Direction::West),
        "e" | "east" | "l" => Command::Move(Direction::East),
        "guess" | "g" => {
            let door: u8 = parts
                .next()
                .context("missing door number")?
                .parse()
                .context("door must be a number")?;
            let word = parts.collect::<Vec<_>>().join(" ");
            Command::Guess(DoorId(door), word)
        }
        "new" | "restart" => Command::Restart,
        "q" | "quit" | "exit" => Command::Quit,
        other => bail!("unknown command {other:?}"),
    })
}

/// Runs a game on stdin and stdout until the player quits or stdin closes.
pub fn run<R: Rng + ?Sized>(tier: Tier, rng: &mut R) -> Result<()> {
    let mut session = TerminalSession::new(
        Stopwatch::new(),
        Leaderboard::new(),
        TerminalView,
        TerminalPrompt,
    );
    session.build(tier, &WordBank, rng)?;
    println!("Commands: n/s/e/w to move, guess <door> <word>, new, quit");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Move(direction)) => {
                if session.move_player(direction) == MoveOutcome::NoChange {
                    println!("Blocked");
                }
            }
            Ok(Command::Guess(id, word)) => match session.submit_word(id, &word) {
                Ok(WordOutcome::Won) => {
                    let secs = session.timer().elapsed_secs();
                    println!("All doors open in {secs}s! Type `new` for another level.");
                }
                Ok(WordOutcome::Opened(id)) => println!("Door {} opens", id.0),
                Ok(WordOutcome::Rejected) => println!("Wrong word"),
                Ok(WordOutcome::Empty) => println!("Type a word to guess"),
                Ok(WordOutcome::NoChange) => println!("Nothing happens"),
                Err(err) => println!("{err}"),
            },
            Ok(Command::Restart) => {
                session.build(tier, &WordBank, rng)?;
                if let Some(best) = session.scores().best(tier) {
                    println!("Best {tier} time: {}s", best.elapsed_secs);
                }
            }
            Ok(Command::Quit) => break,
            Err(err) => println!("{err}"),
        }
        io::stdout().flush()?;
    }

    Ok(())
}
