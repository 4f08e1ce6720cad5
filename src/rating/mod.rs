//! Live rating (LivePZ) adjustments
//!
//! This module computes the rating change caused by a single game and
//! broadcasts event starts and adjustments to registered listeners.

pub mod calculator;

// Re-export commonly used types
pub use calculator::{calculate_change, LivePzCalculator, RatingListener};
