//! Command-line interface for negamax_arena.

use clap::{Parser, Subcommand};
use negamax_arena::Matchup;

/// Negamax Arena - tic-tac-toe between random and negamax agents
#[derive(Parser, Debug)]
#[command(name = "negamax_arena")]
#[command(about = "Play and simulate tic-tac-toe with negamax agents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game and print the board after every move
    Play {
        /// Agents to seat as X and O
        #[arg(short, long, value_enum, default_value = "negamax-vs-random")]
        matchup: Matchup,

        /// Seed for the random agents
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Choose a matchup from the numbered menu, then play it
    Menu {
        /// Seed for the random agents
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run batches of games and report win/draw statistics
    Simulate {
        /// Path to a TOML simulation config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Games per matchup
        #[arg(short, long)]
        games: Option<u64>,

        /// Worker threads
        #[arg(short, long)]
        threads: Option<usize>,

        /// Base seed for the random agents
        #[arg(long)]
        seed: Option<u64>,

        /// Matchups to run (repeatable)
        #[arg(short, long, value_enum)]
        matchup: Vec<Matchup>,

        /// Show the bar chart after the batches
        #[arg(long)]
        chart: bool,

        /// Print reports as JSON
        #[arg(long)]
        json: bool,
    },
}
