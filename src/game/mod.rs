//! Single game results and their textual form
//!
//! This module provides the opponent capability, the game result model and
//! the parser for compact result tokens.

pub mod factory;
pub mod opponent;
pub mod result;

// Re-export commonly used types
pub use factory::{parse, parse_with_opponents};
pub use opponent::{IsOpponent, OpponentSlot, ProvidesOpponent};
pub use result::{GameResult, ResultKind, Slot};
