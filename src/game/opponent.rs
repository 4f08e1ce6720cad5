//! Opponent capability and wrappers
//!
//! A game result does not care whether its sides are plain players or the
//! winners of other games. Both are reached through [`ProvidesOpponent`].

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Anything that can stand in for an opponent of type `O`
pub trait ProvidesOpponent<O>: Send + Sync {
    /// The underlying opponent, or `None` if it is not known yet
    fn opponent(&self) -> Option<&O>;
}

/// Wraps a plain opponent value so it can be used as a provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IsOpponent<O>(O);

impl<O> IsOpponent<O> {
    pub fn new(opponent: O) -> Self {
        Self(opponent)
    }

    pub fn into_inner(self) -> O {
        self.0
    }
}

impl<O: Send + Sync> ProvidesOpponent<O> for IsOpponent<O> {
    fn opponent(&self) -> Option<&O> {
        Some(&self.0)
    }
}

/// Content of one side of a game: an owned opponent or a shared provider
pub enum OpponentSlot<O> {
    Value(O),
    Provider(Arc<dyn ProvidesOpponent<O>>),
}

impl<O> OpponentSlot<O> {
    pub fn provider(provider: Arc<dyn ProvidesOpponent<O>>) -> Self {
        OpponentSlot::Provider(provider)
    }

    /// Resolve the slot down to the opponent value
    pub fn opponent(&self) -> Option<&O> {
        match self {
            OpponentSlot::Value(opponent) => Some(opponent),
            OpponentSlot::Provider(provider) => provider.opponent(),
        }
    }
}

impl<O> From<O> for OpponentSlot<O> {
    fn from(opponent: O) -> Self {
        OpponentSlot::Value(opponent)
    }
}

impl<O: Clone> Clone for OpponentSlot<O> {
    fn clone(&self) -> Self {
        match self {
            OpponentSlot::Value(opponent) => OpponentSlot::Value(opponent.clone()),
            OpponentSlot::Provider(provider) => OpponentSlot::Provider(Arc::clone(provider)),
        }
    }
}

impl<O: std::fmt::Debug> std::fmt::Debug for OpponentSlot<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpponentSlot::Value(opponent) => f.debug_tuple("Value").field(opponent).finish(),
            OpponentSlot::Provider(provider) => f
                .debug_tuple("Provider")
                .field(&provider.opponent())
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_opponent_returns_value_unchanged() {
        let wrapped = IsOpponent::new("player".to_string());
        assert_eq!(wrapped.opponent(), Some(&"player".to_string()));
        assert_eq!(wrapped.into_inner(), "player");
    }

    #[test]
    fn test_slot_delegates_to_provider() {
        let provider: Arc<dyn ProvidesOpponent<u32>> = Arc::new(IsOpponent::new(7));
        let slot = OpponentSlot::provider(provider);
        assert_eq!(slot.opponent(), Some(&7));

        let value: OpponentSlot<u32> = 9.into();
        assert_eq!(value.opponent(), Some(&9));
    }

    #[test]
    fn test_cloned_provider_slot_shares_provider() {
        let provider: Arc<dyn ProvidesOpponent<u32>> = Arc::new(IsOpponent::new(3));
        let slot = OpponentSlot::provider(Arc::clone(&provider));
        let copy = slot.clone();

        assert_eq!(copy.opponent(), Some(&3));
        assert_eq!(Arc::strong_count(&provider), 3);
    }
}
