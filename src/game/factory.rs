//! Parsing of compact game result tokens
//!
//! Only the first character of a token is significant: `+` means side A won,
//! `-` means side B won. Anything else is not a result token.

use crate::error::LeagueError;
use crate::game::opponent::OpponentSlot;
use crate::game::result::{GameResult, Slot};
use std::str::FromStr;
use tracing::trace;

/// Parse a result token, `None` if the token is not recognized
pub fn parse<O>(token: &str) -> Option<GameResult<O>> {
    match token.chars().next() {
        Some('+') => Some(GameResult::won_by(Slot::PlayerA)),
        Some('-') => Some(GameResult::won_by(Slot::PlayerB)),
        _ => {
            trace!("Not a game result token: {:?}", token);
            None
        }
    }
}

/// Parse a result token and bind both opponents to the parsed result
///
/// The opponents are dropped if the token is not recognized.
pub fn parse_with_opponents<O>(
    token: &str,
    opponent_a: impl Into<OpponentSlot<O>>,
    opponent_b: impl Into<OpponentSlot<O>>,
) -> Option<GameResult<O>> {
    let mut result = parse(token)?;
    result.set_opponent(Slot::PlayerA, opponent_a);
    result.set_opponent(Slot::PlayerB, opponent_b);
    Some(result)
}

impl<O> FromStr for GameResult<O> {
    type Err = LeagueError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        parse(token).ok_or_else(|| LeagueError::UnknownResultToken {
            token: token.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ProvidesOpponent;

    #[test]
    fn test_parse_winner_tokens() {
        let a: GameResult<()> = parse("+").unwrap();
        assert_eq!(a.winner(), Some(Slot::PlayerA));
        assert_eq!(a.text(), "+");

        let b: GameResult<()> = parse("-").unwrap();
        assert_eq!(b.winner(), Some(Slot::PlayerB));
        assert_eq!(b.text(), "-");
    }

    #[test]
    fn test_only_first_character_counts() {
        let result: GameResult<()> = parse("+3:1").unwrap();
        assert!(result.has_won_a());

        let result: GameResult<()> = parse("-1:3").unwrap();
        assert!(result.has_won_b());
    }

    #[test]
    fn test_unknown_tokens_are_absent() {
        assert!(parse::<()>("x").is_none());
        assert!(parse::<()>("").is_none());
        assert!(parse::<()>("?:?").is_none());
        assert!(parse::<()>(" +").is_none());
    }

    #[test]
    fn test_parse_with_opponents() {
        let result = parse_with_opponents("-", "home", "away").unwrap();
        assert_eq!(result.opponent_at(Slot::PlayerA), Some(&"home"));
        assert_eq!(result.opponent_at(Slot::PlayerB), Some(&"away"));
        assert_eq!(result.opponent(), Some(&"away"));

        assert!(parse_with_opponents("3:1", "home", "away").is_none());
    }

    #[test]
    fn test_from_str() {
        let result: GameResult<()> = "+".parse().unwrap();
        assert!(result.has_won_a());

        let err = "x".parse::<GameResult<()>>().unwrap_err();
        assert_eq!(
            err,
            LeagueError::UnknownResultToken {
                token: "x".to_string()
            }
        );
    }
}
