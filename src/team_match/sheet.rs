//! Score sheet of one team match

use crate::error::{LeagueError, Result};
use crate::game::{self, GameResult, Slot};
use crate::team_match::system::{Fixture, TeamMatchSystem};

/// Results of a team match, recorded game by game in order of play
#[derive(Debug)]
pub struct TeamMatchSheet<O> {
    system: &'static TeamMatchSystem,
    results: Vec<GameResult<O>>,
}

impl<O> TeamMatchSheet<O> {
    pub fn new(system: &'static TeamMatchSystem) -> Self {
        Self {
            system,
            results: Vec::with_capacity(system.count_matches()),
        }
    }

    /// Fill a sheet from result tokens, one token per game
    pub fn parse_tokens<'t>(
        system: &'static TeamMatchSystem,
        tokens: impl IntoIterator<Item = &'t str>,
    ) -> Result<Self> {
        let mut sheet = Self::new(system);
        for token in tokens {
            let result = game::parse(token).ok_or_else(|| LeagueError::UnknownResultToken {
                token: token.to_string(),
            })?;
            sheet.record(result)?;
        }
        Ok(sheet)
    }

    pub fn system(&self) -> &'static TeamMatchSystem {
        self.system
    }

    /// Record the result of the next game and return the fixture it filled
    pub fn record(&mut self, result: GameResult<O>) -> Result<Fixture> {
        let fixture = self.next_fixture().ok_or(LeagueError::SheetFull {
            system: self.system.name(),
            capacity: self.system.count_matches(),
        })?;
        self.results.push(result);
        Ok(fixture)
    }

    pub fn results(&self) -> &[GameResult<O>] {
        &self.results
    }

    /// The fixture the next recorded result belongs to, `None` once complete
    pub fn next_fixture(&self) -> Option<Fixture> {
        self.system.fixtures().nth(self.results.len())
    }

    pub fn is_complete(&self) -> bool {
        self.results.len() == self.system.count_matches()
    }

    /// Games won by team A and by team B so far
    pub fn score(&self) -> (usize, usize) {
        self.results
            .iter()
            .fold((0, 0), |(a, b), result| match result.winner() {
                Some(Slot::PlayerA) => (a + 1, b),
                Some(Slot::PlayerB) => (a, b + 1),
                None => (a, b),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team_match::system::MatchType;

    #[test]
    fn test_record_walks_fixtures_in_order() {
        let mut sheet: TeamMatchSheet<()> =
            TeamMatchSheet::new(&TeamMatchSystem::MOD_SWAYTHLING_CUP);

        let first = sheet.record(GameResult::won_by(Slot::PlayerA)).unwrap();
        assert_eq!(first.number, 1);

        for _ in 0..2 {
            sheet.record(GameResult::won_by(Slot::PlayerB)).unwrap();
        }
        let next = sheet.next_fixture().unwrap();
        assert_eq!(next.number, 4);
        assert_eq!(next.combination.match_type, MatchType::Double);
        assert_eq!(sheet.score(), (1, 2));
        assert!(!sheet.is_complete());
    }

    #[test]
    fn test_full_sheet_rejects_more_results() {
        let tokens = ["+", "+", "-", "+", "-", "+", "+", "-", "+"];
        let mut sheet: TeamMatchSheet<()> =
            TeamMatchSheet::parse_tokens(&TeamMatchSystem::SWAYTHLING_CUP, tokens).unwrap();

        assert!(sheet.is_complete());
        assert_eq!(sheet.score(), (6, 3));
        assert_eq!(sheet.next_fixture(), None);

        let err = sheet.record(GameResult::won_by(Slot::PlayerA)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<LeagueError>(),
            Some(&LeagueError::SheetFull {
                system: "SWAYTHLING_CUP",
                capacity: 9,
            })
        );
    }

    #[test]
    fn test_undetermined_games_do_not_score() {
        let mut sheet: TeamMatchSheet<()> = TeamMatchSheet::new(&TeamMatchSystem::BUNDES_4);
        sheet.record(GameResult::new()).unwrap();
        sheet.record(GameResult::won_by(Slot::PlayerB)).unwrap();

        assert_eq!(sheet.results().len(), 2);
        assert_eq!(sheet.score(), (0, 1));
    }

    #[test]
    fn test_parse_tokens_rejects_unknown_token() {
        let err = TeamMatchSheet::<()>::parse_tokens(&TeamMatchSystem::BUNDES_4, ["+", "3:1"])
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<LeagueError>(),
            Some(&LeagueError::UnknownResultToken {
                token: "3:1".to_string()
            })
        );
    }
}
