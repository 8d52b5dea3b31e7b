//! Developer front end: prints generated levels or plays one in the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wordmaze_core::{LevelBuilder, Tier};

use crate::words::WordBank;

mod play;
mod words;

#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbose: Verbosity,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate levels and print them
    Generate {
        /// Difficulty tier: easy, medium or hard
        #[arg(short, long, default_value = "easy")]
        tier: Tier,

        /// Seed for reproducible levels
        #[arg(long)]
        seed: Option<u64>,

        /// Number of levels to generate
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Print attempt statistics after generating the levels
        #[arg(short, long, default_value_t = false)]
        summary: bool,

        /// Print levels as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Play a level on the terminal
    Play {
        #[arg(short, long, default_value = "easy")]
        tier: Tier,

        #[arg(long)]
        seed: Option<u64>,
    },
}

fn new_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}

#[derive(Debug, Default)]
struct Summary {
    levels: usize,
    failures: usize,
    attempts: u32,
    placement_failures: u32,
    unsolvable: u32,
}

fn generate(tier: Tier, seed: Option<u64>, count: usize, summary: bool, json: bool) -> Result<()> {
    let builder = LevelBuilder::default();
    let mut rng = new_rng(seed);
    let mut stats = Summary::default();

    for _ in 0..count {
        match builder.build_with_report(tier, &WordBank, &mut rng) {
            Ok((level, report)) => {
                stats.levels += 1;
                stats.attempts += report.attempts;
                stats.placement_failures += report.placement_failures;
                stats.unsolvable += report.unsolvable;

                if json {
                    println!("{}", serde_json::to_string(&level)?);
                } else {
                    let words: Vec<&str> = level.target_words().iter().collect();
                    println!("{tier} level, words: {}", words.join(", "));
                    print!("{}", level.grid());
                    println!();
                }
            }
            Err(failure) => {
                stats.failures += 1;
                stats.attempts += failure.attempts;
                stats.placement_failures += failure.placement_failures;
                stats.unsolvable += failure.unsolvable;
                log::error!("{failure}");
            }
        }
    }

    if summary {
        let builds = stats.levels + stats.failures;
        let average = if builds == 0 {
            0.0
        } else {
            f64::from(stats.attempts) / builds as f64
        };
        eprintln!("Levels: {} ({} failed builds)", stats.levels, stats.failures);
        eprintln!("Attempts: {} ({average:.2} per build)", stats.attempts);
        eprintln!("Placement failures: {}", stats.placement_failures);
        eprintln!("Unsolvable rejections: {}", stats.unsolvable);
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    match args.command {
        Command::Generate {
            tier,
            seed,
            count,
            summary,
            json,
        } => generate(tier, seed, count, summary, json),
        Command::Play { tier, seed } => play::run(tier, &mut new_rng(seed)),
    }
}
