//! TTLive core - table tennis results, team match systems and live ratings
//!
//! This crate models single game results and their compact text form, the
//! regulation tables of the known team match systems, and the live rating
//! (LivePZ) adjustment of a game with notification of interested listeners.

pub mod config;
pub mod error;
pub mod events;
pub mod game;
pub mod rating;
pub mod team_match;
pub mod types;

// Re-export commonly used types and traits
pub use error::{LeagueError, Result};
pub use types::*;

// Re-export key components
pub use game::{GameResult, Slot};
pub use rating::{LivePzCalculator, RatingListener};
pub use team_match::{TeamMatchSheet, TeamMatchSystem};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
