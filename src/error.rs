//! Error types for the table tennis core
//!
//! Fallible operations return the anyhow-based [`Result`]; the domain specific
//! failure is always a [`LeagueError`] that callers can recover with
//! `downcast_ref`.

use crate::game::Slot;

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific league scenarios
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LeagueError {
    #[error("Point difference {points_b} - {points_a} is outside the rating formula domain")]
    InvalidPointDifference { points_a: i32, points_b: i32 },

    #[error("Expected score for {points_a} vs {points_b} is not a finite number")]
    NonFiniteExpectation { points_a: i32, points_b: i32 },

    #[error("Rating change for {points_a} vs {points_b} does not fit the point range")]
    ChangeOutOfRange { points_a: i32, points_b: i32 },

    #[error("Result already decided for {current:?}, cannot change to {requested:?}")]
    ResultAlreadyDecided { current: Slot, requested: Slot },

    #[error("Unknown result token: {token:?}")]
    UnknownResultToken { token: String },

    #[error("Unknown team match system: {name}")]
    UnknownTeamMatchSystem { name: String },

    #[error("Invalid lineup: {reason}")]
    InvalidLineup { reason: String },

    #[error("All {capacity} games of {system} are already recorded")]
    SheetFull {
        system: &'static str,
        capacity: usize,
    },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
