//! Team lineups and the concrete pairings they produce

use crate::error::{LeagueError, Result};
use crate::team_match::system::{MatchType, TeamMatchSystem};

/// Roster submitted by one team: singles players and doubles pairs, by position
#[derive(Debug, Clone, PartialEq)]
pub struct Lineup<S, D> {
    singles: Vec<S>,
    doubles: Vec<D>,
}

impl<S, D> Lineup<S, D> {
    pub fn new(singles: Vec<S>, doubles: Vec<D>) -> Self {
        Self { singles, doubles }
    }

    pub fn singles(&self) -> &[S] {
        &self.singles
    }

    pub fn doubles(&self) -> &[D] {
        &self.doubles
    }

    /// Check the roster sizes against what the system requires
    pub fn validate(&self, system: &TeamMatchSystem) -> Result<()> {
        if self.singles.len() != system.count_single_opponents() {
            return Err(LeagueError::InvalidLineup {
                reason: format!(
                    "{} requires {} singles players, got {}",
                    system,
                    system.count_single_opponents(),
                    self.singles.len()
                ),
            }
            .into());
        }

        if self.doubles.len() != system.count_double_opponents() {
            return Err(LeagueError::InvalidLineup {
                reason: format!(
                    "{} requires {} doubles pairs, got {}",
                    system,
                    system.count_double_opponents(),
                    self.doubles.len()
                ),
            }
            .into());
        }

        Ok(())
    }
}

/// One game of a team match with the real opponents filled in
#[derive(Debug, Clone, PartialEq)]
pub enum Pairing<'a, S, D> {
    Single {
        number: usize,
        home: &'a S,
        away: &'a S,
    },
    Double {
        number: usize,
        home: &'a D,
        away: &'a D,
    },
}

impl<S, D> Pairing<'_, S, D> {
    /// 1-based game number within the team match
    pub fn number(&self) -> usize {
        match self {
            Pairing::Single { number, .. } | Pairing::Double { number, .. } => *number,
        }
    }

    pub fn match_type(&self) -> MatchType {
        match self {
            Pairing::Single { .. } => MatchType::Single,
            Pairing::Double { .. } => MatchType::Double,
        }
    }
}

/// Bind the roster positions of every game in `system` to the two lineups
///
/// The home lineup fills side A of every combination, the away lineup side B.
pub fn pairings<'a, S, D>(
    system: &TeamMatchSystem,
    home: &'a Lineup<S, D>,
    away: &'a Lineup<S, D>,
) -> Result<Vec<Pairing<'a, S, D>>> {
    home.validate(system)?;
    away.validate(system)?;

    let pairings = system
        .fixtures()
        .map(|fixture| {
            let a = fixture.combination.opponent_index_a - 1;
            let b = fixture.combination.opponent_index_b - 1;
            match fixture.combination.match_type {
                MatchType::Single => Pairing::Single {
                    number: fixture.number,
                    home: &home.singles[a],
                    away: &away.singles[b],
                },
                MatchType::Double => Pairing::Double {
                    number: fixture.number,
                    home: &home.doubles[a],
                    away: &away.doubles[b],
                },
            }
        })
        .collect();

    Ok(pairings)
}
