//! Minimax-TTT: optimal tic-tac-toe by exhaustive search.
//!
//! ## Usage
//!
//! - `minimax-ttt` - Engine plays both sides on an empty board
//! - `minimax-ttt demo --first 5` - Player one opens on field 5, engine finishes
//! - `minimax-ttt demo --random-opening --seed 7` - Random opening for player one
//! - `minimax-ttt console` - Play against the engine over stdin/stdout
//!
//! Set `RUST_LOG=debug` to log every search.

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use minimax_ttt::board::Move;
use minimax_ttt::console::ConsoleEngine;
use minimax_ttt::constants::{CELLS, N};
use minimax_ttt::game::TicTacToe;

/// Minimax-TTT: optimal tic-tac-toe by exhaustive minimax
#[derive(Parser)]
#[command(name = "minimax-ttt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Let the engine play a full game and print every position
    Demo {
        /// Field id (1-based) for player one's opening move
        #[arg(long, conflicts_with = "random_opening")]
        first: Option<usize>,
        /// Pick player one's opening move at random
        #[arg(long)]
        random_opening: bool,
        /// Seed for the random opening
        #[arg(long, requires = "random_opening")]
        seed: Option<u64>,
    },
    /// Play against the engine using the line-based console protocol
    Console,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Console) => {
            let mut engine = ConsoleEngine::new();
            engine.run().context("console session failed")?;
        }
        Some(Commands::Demo {
            first,
            random_opening,
            seed,
        }) => {
            let opening = if random_opening {
                let mut rng = seed
                    .map(fastrand::Rng::with_seed)
                    .unwrap_or_else(fastrand::Rng::new);
                Some(rng.usize(1..=CELLS))
            } else {
                first
            };
            run_demo(opening)?;
        }
        None => run_demo(None)?,
    }

    Ok(())
}

fn run_demo(opening: Option<usize>) -> Result<()> {
    let mut game = TicTacToe::<N>::new();
    let mut stdout = io::stdout();

    let outcome = match opening {
        Some(id) => {
            let mv = Move::from_id::<N>(id)?;
            info!(id, %mv, "opening move for player one");
            game.run_from(mv.x, mv.y, &mut stdout)?
        }
        None => game.run(&mut stdout)?,
    };

    println!("Result: {outcome}");
    Ok(())
}
