//! Team match formats
//!
//! This module provides the catalog of team match systems, lineups that bind
//! roster positions to real opponents, and the score sheet of a team match.

pub mod lineup;
pub mod sheet;
pub mod system;

// Re-export commonly used types
pub use lineup::{pairings, Lineup, Pairing};
pub use sheet::TeamMatchSheet;
pub use system::{Fixture, MatchCombination, MatchType, TeamMatchSystem};
