//! Command-line driver for the conduit pipe puzzle engine.
//!
//! # Usage
//!
//! Build a game and print it:
//!
//! ```sh
//! cargo run --bin conduit -- show
//! cargo run --bin conduit -- show --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Replay placements on a seeded game:
//!
//! ```sh
//! cargo run --bin conduit -- play --seed <HEX> --place 2,3 --place 4,1
//! ```
//!
//! Sample many random games in parallel:
//!
//! ```sh
//! cargo run --release --bin conduit -- stats --samples 100000 --block-probability 0.3
//! ```
//!
//! Set `RUST_LOG=debug` to see generation details.

use std::process;

use clap::{Parser, Subcommand, builder::RangedU64ValueParser};
use conduit_core::{Direction, Position};
use conduit_game::{Game, GameConfig, GameError, PlacementResult};
use conduit_generator::{GenerateError, GridSeed};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a game and print its grid, starting point and conveyor.
    Show {
        /// Seed to reproduce (64 hex digits). Random when omitted.
        #[arg(long, value_name = "HEX")]
        seed: Option<GridSeed>,

        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Build a game and apply placements in order.
    Play {
        /// Seed to reproduce (64 hex digits). Random when omitted.
        #[arg(long, value_name = "HEX")]
        seed: Option<GridSeed>,

        /// Cell to place the next tile on. Repeatable.
        #[arg(
            short,
            long = "place",
            value_name = "ROW,COL",
            value_parser = parse_position,
        )]
        places: Vec<Position>,

        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Build many random games and report generation statistics.
    Stats {
        /// Number of games to build.
        #[arg(
            long,
            value_name = "COUNT",
            default_value_t = 10_000,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..),
        )]
        samples: usize,

        #[command(flatten)]
        config: ConfigArgs,
    },
}

#[derive(Debug, clap::Args)]
struct ConfigArgs {
    /// Grid height.
    #[arg(long, default_value_t = 9)]
    rows: usize,

    /// Grid width.
    #[arg(long, default_value_t = 7)]
    cols: usize,

    /// Per-cell blocking probability.
    #[arg(long, value_name = "P", default_value_t = 0.05)]
    block_probability: f64,

    /// Number of upcoming tiles on the conveyor.
    #[arg(long, value_name = "LEN", default_value_t = 5)]
    conveyor: usize,

    /// Random draws before falling back to enumerating starting points.
    #[arg(long, value_name = "COUNT")]
    max_start_attempts: Option<usize>,
}

impl ConfigArgs {
    fn to_config(&self) -> GameConfig {
        let config = GameConfig::default()
            .rows(self.rows)
            .cols(self.cols)
            .block_probability(self.block_probability)
            .conveyor_length(self.conveyor);
        match self.max_start_attempts {
            Some(attempts) => config.max_start_attempts(attempts),
            None => config,
        }
    }
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match args.command {
        Command::Show { seed, config } => {
            let game = build_or_exit(&config.to_config(), seed);
            println!("{}", game.snapshot());
        }
        Command::Play {
            seed,
            places,
            config,
        } => {
            let mut game = build_or_exit(&config.to_config(), seed);
            for pos in places {
                match game.request_placement(pos) {
                    PlacementResult::Applied { variant } => {
                        println!("place {pos}: applied {variant}");
                    }
                    PlacementResult::Ignored(reason) => {
                        println!("place {pos}: ignored ({reason})");
                    }
                }
            }
            println!();
            println!("{}", game.snapshot());
        }
        Command::Stats { samples, config } => {
            let config = config.to_config();
            log::info!(
                "sampling {samples} games on {} threads",
                rayon::current_num_threads()
            );
            let tally = (0..samples)
                .into_par_iter()
                .fold(Tally::default, |mut tally, _| {
                    tally.record(Game::build(&config));
                    tally
                })
                .reduce(Tally::default, Tally::merge);
            if let Some(err) = &tally.fatal {
                eprintln!("Failed to build a game: {err}");
                process::exit(1);
            }
            tally.print();
        }
    }
}

fn build_or_exit(config: &GameConfig, seed: Option<GridSeed>) -> Game {
    let result = match seed {
        Some(seed) => Game::build_with_seed(config, seed),
        None => Game::build(config),
    };
    result
        .inspect(|game| log::info!("built game from seed {}", game.seed()))
        .unwrap_or_else(|err| {
            eprintln!("Failed to build a game: {err}");
            process::exit(1);
        })
}

fn parse_position(s: &str) -> Result<Position, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = row
        .trim()
        .parse::<usize>()
        .map_err(|err| format!("invalid row {row:?}: {err}"))?;
    let col = col
        .trim()
        .parse::<usize>()
        .map_err(|err| format!("invalid column {col:?}: {err}"))?;
    Ok(Position::new(row, col))
}

#[derive(Debug, Default)]
struct Tally {
    built: usize,
    unsatisfiable: usize,
    blocked: usize,
    directions: [usize; Direction::ALL.len()],
    fatal: Option<GameError>,
}

impl Tally {
    fn record(&mut self, result: Result<Game, GameError>) {
        match result {
            Ok(game) => {
                self.built += 1;
                self.blocked += game.blocked_cells().len();
                let direction = game.starting_point().direction;
                if let Some(i) = Direction::ALL.iter().position(|&d| d == direction) {
                    self.directions[i] += 1;
                }
            }
            Err(GameError::Generate(GenerateError::UnsatisfiableStartingPoint { .. })) => {
                self.unsatisfiable += 1;
            }
            // Configuration errors fail every sample the same way.
            Err(err) => {
                self.fatal.get_or_insert(err);
            }
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.built += other.built;
        self.unsatisfiable += other.unsatisfiable;
        self.blocked += other.blocked;
        for (total, count) in self.directions.iter_mut().zip(other.directions) {
            *total += count;
        }
        self.fatal = self.fatal.or(other.fatal);
        self
    }

    #[allow(clippy::cast_precision_loss)]
    fn print(&self) {
        let samples = self.built + self.unsatisfiable;
        println!("Samples: {samples}");
        println!("  built: {}", self.built);
        println!("  unsatisfiable: {}", self.unsatisfiable);
        if self.built > 0 {
            println!(
                "  average blocked: {:.2}",
                self.blocked as f64 / self.built as f64
            );
        }
        println!();
        println!("Starting directions:");
        for (direction, count) in Direction::ALL.iter().zip(self.directions) {
            println!("  {direction}: {count}");
        }
    }
}
