//! Result of a single game between two opponents

use crate::error::{LeagueError, Result};
use crate::game::opponent::{OpponentSlot, ProvidesOpponent};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One of the two sides of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    PlayerA,
    PlayerB,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::PlayerA, Slot::PlayerB];

    pub fn index(self) -> usize {
        match self {
            Slot::PlayerA => 0,
            Slot::PlayerB => 1,
        }
    }

    /// The opposite side
    pub fn other(self) -> Slot {
        match self {
            Slot::PlayerA => Slot::PlayerB,
            Slot::PlayerB => Slot::PlayerA,
        }
    }
}

/// How the outcome of a game is recorded
///
/// Only the winner is tracked for now. Further scoring schemes (set by set,
/// ball points) become additional variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ResultKind {
    /// Winning side, `None` while undetermined
    Winner(Option<Slot>),
}

impl ResultKind {
    fn winner(self) -> Option<Slot> {
        match self {
            ResultKind::Winner(winner) => winner,
        }
    }

    fn inverted(self) -> ResultKind {
        match self {
            ResultKind::Winner(winner) => ResultKind::Winner(winner.map(Slot::other)),
        }
    }

    fn text(self) -> &'static str {
        match self {
            ResultKind::Winner(Some(Slot::PlayerA)) => "+",
            ResultKind::Winner(Some(Slot::PlayerB)) => "-",
            ResultKind::Winner(None) => "?:?",
        }
    }
}

/// Outcome of a single game over two opponent slots
#[derive(Debug)]
pub struct GameResult<O> {
    opponents: [Option<OpponentSlot<O>>; 2],
    kind: ResultKind,
}

impl<O> GameResult<O> {
    /// Create an undetermined winner result without opponents
    pub fn new() -> Self {
        Self {
            opponents: [None, None],
            kind: ResultKind::Winner(None),
        }
    }

    /// Create a winner result that is already decided
    pub fn won_by(winner: Slot) -> Self {
        Self {
            opponents: [None, None],
            kind: ResultKind::Winner(Some(winner)),
        }
    }

    /// Create an undetermined winner result between the given opponents
    pub fn between(
        opponent_a: impl Into<OpponentSlot<O>>,
        opponent_b: impl Into<OpponentSlot<O>>,
    ) -> Self {
        let mut result = Self::new();
        result.set_opponent(Slot::PlayerA, opponent_a);
        result.set_opponent(Slot::PlayerB, opponent_b);
        result
    }

    pub fn set_opponent(&mut self, slot: Slot, opponent: impl Into<OpponentSlot<O>>) {
        self.opponents[slot.index()] = Some(opponent.into());
    }

    pub fn set_opponent_provider(&mut self, slot: Slot, provider: Arc<dyn ProvidesOpponent<O>>) {
        self.opponents[slot.index()] = Some(OpponentSlot::provider(provider));
    }

    pub fn has_opponent(&self, slot: Slot) -> bool {
        self.opponents[slot.index()].is_some()
    }

    /// Content of one side
    ///
    /// # Panics
    /// If the slot was never assigned.
    pub fn opponent_slot(&self, slot: Slot) -> &OpponentSlot<O> {
        match &self.opponents[slot.index()] {
            Some(opponent) => opponent,
            None => panic!("opponent slot {:?} used before being set", slot),
        }
    }

    /// Opponent value of one side, `None` if a provider cannot resolve it yet
    ///
    /// # Panics
    /// If the slot was never assigned.
    pub fn opponent_at(&self, slot: Slot) -> Option<&O> {
        self.opponent_slot(slot).opponent()
    }

    pub fn kind(&self) -> ResultKind {
        self.kind
    }

    /// Winning side, `None` if the game is undetermined
    pub fn winner(&self) -> Option<Slot> {
        self.kind.winner()
    }

    /// Decide the winner of the game
    ///
    /// Setting the same winner again is a no-op; changing a decided winner
    /// fails with [`LeagueError::ResultAlreadyDecided`].
    pub fn set_winner(&mut self, winner: Slot) -> Result<()> {
        match self.kind {
            ResultKind::Winner(None) => {
                self.kind = ResultKind::Winner(Some(winner));
                Ok(())
            }
            ResultKind::Winner(Some(current)) if current == winner => Ok(()),
            ResultKind::Winner(Some(current)) => Err(LeagueError::ResultAlreadyDecided {
                current,
                requested: winner,
            }
            .into()),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.winner().is_some()
    }

    pub fn has_won_a(&self) -> bool {
        self.winner() == Some(Slot::PlayerA)
    }

    pub fn has_won_b(&self) -> bool {
        self.winner() == Some(Slot::PlayerB)
    }

    /// Short canonical text: `+`, `-` or `?:?`
    pub fn text(&self) -> &'static str {
        self.kind.text()
    }
}

impl<O: Clone> GameResult<O> {
    /// The same game seen from the other side
    ///
    /// Opponents swap places and a decided winner flips; the original is left
    /// untouched.
    pub fn invert(&self) -> Self {
        Self {
            opponents: [self.opponents[1].clone(), self.opponents[0].clone()],
            kind: self.kind.inverted(),
        }
    }
}

impl<O> Default for GameResult<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Clone> Clone for GameResult<O> {
    fn clone(&self) -> Self {
        Self {
            opponents: self.opponents.clone(),
            kind: self.kind,
        }
    }
}

/// A finished game stands in for its winner
impl<O: Send + Sync> ProvidesOpponent<O> for GameResult<O> {
    fn opponent(&self) -> Option<&O> {
        self.winner().and_then(|winner| self.opponent_at(winner))
    }
}

impl<O> std::fmt::Display for GameResult<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_result_is_undetermined() {
        let result: GameResult<&str> = GameResult::between("a", "b");

        assert_eq!(result.winner(), None);
        assert!(!result.is_finished());
        assert!(!result.has_won_a());
        assert!(!result.has_won_b());
        assert_eq!(result.opponent(), None);
        assert_eq!(result.text(), "?:?");
    }

    #[test]
    fn test_winner_provides_opponent() {
        let mut result: GameResult<&str> = GameResult::between("a", "b");
        result.set_winner(Slot::PlayerA).unwrap();

        assert!(result.is_finished());
        assert!(result.has_won_a());
        assert_eq!(result.opponent(), Some(&"a"));
        assert_eq!(result.text(), "+");
        assert_eq!(result.to_string(), "+");

        let mut result: GameResult<&str> = GameResult::between("a", "b");
        result.set_winner(Slot::PlayerB).unwrap();
        assert!(result.has_won_b());
        assert_eq!(result.opponent(), Some(&"b"));
        assert_eq!(result.text(), "-");
    }

    #[test]
    fn test_set_winner_is_idempotent() {
        let mut result: GameResult<&str> = GameResult::new();
        result.set_winner(Slot::PlayerB).unwrap();
        result.set_winner(Slot::PlayerB).unwrap();
        assert_eq!(result.winner(), Some(Slot::PlayerB));
    }

    #[test]
    fn test_decided_winner_cannot_change() {
        let mut result: GameResult<&str> = GameResult::won_by(Slot::PlayerA);
        let err = result.set_winner(Slot::PlayerB).unwrap_err();

        assert_eq!(
            err.downcast_ref::<LeagueError>(),
            Some(&LeagueError::ResultAlreadyDecided {
                current: Slot::PlayerA,
                requested: Slot::PlayerB,
            })
        );
        assert_eq!(result.winner(), Some(Slot::PlayerA));
    }

    #[test]
    fn test_invert_swaps_opponents_and_winner() {
        let mut result: GameResult<&str> = GameResult::between("a", "b");
        result.set_winner(Slot::PlayerA).unwrap();

        let inverted = result.invert();
        assert_eq!(inverted.winner(), Some(Slot::PlayerB));
        assert_eq!(inverted.opponent_at(Slot::PlayerA), Some(&"b"));
        assert_eq!(inverted.opponent_at(Slot::PlayerB), Some(&"a"));
        assert_eq!(inverted.opponent(), Some(&"a"));
        assert_eq!(inverted.text(), "-");

        // original untouched
        assert_eq!(result.winner(), Some(Slot::PlayerA));
        assert_eq!(result.opponent_at(Slot::PlayerA), Some(&"a"));
    }

    #[test]
    fn test_invert_undetermined_stays_undetermined() {
        let result: GameResult<&str> = GameResult::between("a", "b");
        assert_eq!(result.invert().winner(), None);
        assert_eq!(result.invert().text(), "?:?");
    }

    #[test]
    fn test_invert_keeps_unset_slots_unset() {
        let mut result: GameResult<&str> = GameResult::won_by(Slot::PlayerA);
        result.set_opponent(Slot::PlayerA, "a");

        let inverted = result.invert();
        assert!(!inverted.has_opponent(Slot::PlayerA));
        assert!(inverted.has_opponent(Slot::PlayerB));
    }

    #[test]
    fn test_finished_game_as_opponent_of_next_game() {
        let mut semi: GameResult<&str> = GameResult::between("a", "b");
        semi.set_winner(Slot::PlayerB).unwrap();

        let mut last: GameResult<&str> = GameResult::new();
        last.set_opponent_provider(Slot::PlayerA, Arc::new(semi));
        last.set_opponent(Slot::PlayerB, "c");
        last.set_winner(Slot::PlayerA).unwrap();

        assert_eq!(last.opponent_at(Slot::PlayerA), Some(&"b"));
        assert_eq!(last.opponent(), Some(&"b"));
    }

    #[test]
    #[should_panic(expected = "used before being set")]
    fn test_unset_slot_panics() {
        let result: GameResult<&str> = GameResult::won_by(Slot::PlayerA);
        let _ = result.opponent();
    }

    #[test]
    fn test_slot_other() {
        for slot in Slot::ALL {
            assert_ne!(slot, slot.other());
            assert_eq!(slot, slot.other().other());
        }
        assert_eq!(Slot::PlayerA.index(), 0);
        assert_eq!(Slot::PlayerB.index(), 1);
    }
}
