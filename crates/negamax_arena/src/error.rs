//! Simulation error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Simulation error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Simulation error: {} at {}:{}", message, file, line)]
pub struct SimulationError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SimulationError {
    /// Creates a new simulation error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<rayon::ThreadPoolBuildError> for SimulationError {
    #[track_caller]
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::new(format!("Thread pool error: {}", err))
    }
}

impl From<negamax_tictactoe::MoveError> for SimulationError {
    #[track_caller]
    fn from(err: negamax_tictactoe::MoveError) -> Self {
        Self::new(format!("Illegal move: {}", err))
    }
}

impl From<crate::config::ConfigError> for SimulationError {
    #[track_caller]
    fn from(err: crate::config::ConfigError) -> Self {
        Self::new(err.message)
    }
}
