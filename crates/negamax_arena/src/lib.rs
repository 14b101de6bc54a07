//! Negamax arena - agents, matches and batch simulation for tic-tac-toe
//!
//! Drives the game logic in [`negamax_tictactoe`] with pluggable agents.
//!
//! # Architecture
//!
//! - **Agents**: random and negamax players behind the [`Agent`] trait
//! - **Orchestrator**: plays one game, reporting each move as a [`GameEvent`]
//! - **Simulation**: parallel batches on a `rayon` pool, reduced into a [`Tally`]
//! - **Chart / console**: terminal and plain-text output of results
//!
//! # Example
//!
//! ```
//! use negamax_arena::{simulate, Matchup, SimulationConfig};
//!
//! # fn run() -> Result<(), negamax_arena::SimulationError> {
//! let config = SimulationConfig::default()
//!     .with_games(4)
//!     .with_threads(2)
//!     .with_seed(42);
//! let report = simulate(&config, Matchup::RandomVsRandom)?;
//! assert_eq!(report.tally().total(), 4);
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod agents;
mod config;
mod error;
mod matchup;
mod orchestrator;
mod simulation;
mod tally;

pub mod chart;
pub mod console;

// Crate-level exports - Agents
pub use agents::{Agent, AgentKind, NegamaxAgent, RandomAgent};

// Crate-level exports - Configuration and errors
pub use config::{ConfigError, SimulationConfig};
pub use error::SimulationError;

// Crate-level exports - Games and batches
pub use matchup::Matchup;
pub use orchestrator::{play_single_game, GameEvent, GameRecord, Orchestrator};
pub use simulation::{simulate, simulate_all, BatchReport};
pub use tally::Tally;
