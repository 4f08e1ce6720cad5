//! Team match systems
//!
//! A team match system fixes which roster positions meet in which order when
//! two teams play each other. The tables follow the published league
//! regulations; their order is the order of play and must not change.

use crate::error::{LeagueError, Result};
use serde::{Serialize, Serializer};

/// Singles or doubles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MatchType {
    Single,
    Double,
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchType::Single => f.pad("Single"),
            MatchType::Double => f.pad("Double"),
        }
    }
}

/// One game of a team match: which roster positions play each other
///
/// Indices are 1-based positions in the singles or doubles roster of each team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MatchCombination {
    pub match_type: MatchType,
    pub opponent_index_a: usize,
    pub opponent_index_b: usize,
}

const fn d(a: usize, b: usize) -> MatchCombination {
    MatchCombination {
        match_type: MatchType::Double,
        opponent_index_a: a,
        opponent_index_b: b,
    }
}

const fn s(a: usize, b: usize) -> MatchCombination {
    MatchCombination {
        match_type: MatchType::Single,
        opponent_index_a: a,
        opponent_index_b: b,
    }
}

/// A game of a team match together with its 1-based game number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fixture {
    pub number: usize,
    pub combination: MatchCombination,
}

/// Named, immutable table of match combinations
#[derive(Debug, PartialEq, Eq)]
pub struct TeamMatchSystem {
    name: &'static str,
    double_count: usize,
    single_count: usize,
    combinations: &'static [MatchCombination],
}

impl TeamMatchSystem {
    pub const BUNDES_4: TeamMatchSystem = TeamMatchSystem {
        name: "BUNDES_4",
        double_count: 2,
        single_count: 4,
        combinations: &[
            d(1, 1),
            d(2, 2),
            s(1, 2),
            s(2, 1),
            s(3, 4),
            s(4, 3),
            s(1, 1),
            s(2, 2),
            s(3, 3),
            s(4, 4),
        ],
    };

    pub const WERNER_SCHEFFLER: TeamMatchSystem = TeamMatchSystem {
        name: "WERNER_SCHEFFLER",
        double_count: 2,
        single_count: 4,
        combinations: &[
            d(1, 1),
            d(2, 2),
            s(1, 2),
            s(2, 1),
            s(3, 4),
            s(4, 3),
            s(1, 1),
            s(2, 2),
            s(3, 3),
            s(4, 4),
            s(3, 1),
            s(1, 3),
            s(2, 4),
            s(4, 2),
        ],
    };

    pub const PAARKREUZ_6: TeamMatchSystem = TeamMatchSystem {
        name: "PAARKREUZ_6",
        double_count: 3,
        single_count: 6,
        combinations: &[
            d(1, 2),
            d(2, 1),
            d(3, 3),
            s(1, 2),
            s(2, 1),
            s(3, 4),
            s(4, 3),
            s(5, 6),
            s(6, 5),
            s(1, 1),
            s(2, 2),
            s(3, 3),
            s(4, 4),
            s(5, 5),
            s(6, 6),
            d(1, 1),
        ],
    };

    pub const MOD_SWAYTHLING_CUP: TeamMatchSystem = TeamMatchSystem {
        name: "MOD_SWAYTHLING_CUP",
        double_count: 1,
        single_count: 3,
        combinations: &[
            s(1, 2),
            s(2, 1),
            s(3, 3),
            d(1, 1),
            s(1, 1),
            s(3, 2),
            s(2, 3),
        ],
    };

    pub const SWAYTHLING_CUP: TeamMatchSystem = TeamMatchSystem {
        name: "SWAYTHLING_CUP",
        double_count: 0,
        single_count: 3,
        combinations: &[
            s(1, 1),
            s(2, 2),
            s(3, 3),
            s(2, 1),
            s(1, 3),
            s(3, 2),
            s(2, 3),
            s(3, 1),
            s(1, 2),
        ],
    };

    /// Every known system
    pub const ALL: [&'static TeamMatchSystem; 5] = [
        &TeamMatchSystem::BUNDES_4,
        &TeamMatchSystem::WERNER_SCHEFFLER,
        &TeamMatchSystem::PAARKREUZ_6,
        &TeamMatchSystem::MOD_SWAYTHLING_CUP,
        &TeamMatchSystem::SWAYTHLING_CUP,
    ];

    /// Look up a system by name
    ///
    /// Matching ignores case and treats `-` like `_`, so `werner-scheffler`
    /// finds `WERNER_SCHEFFLER`.
    pub fn by_name(name: &str) -> Result<&'static TeamMatchSystem> {
        let normalized = name.trim().replace('-', "_").to_uppercase();
        TeamMatchSystem::ALL
            .into_iter()
            .find(|system| system.name == normalized)
            .ok_or_else(|| {
                LeagueError::UnknownTeamMatchSystem {
                    name: name.to_string(),
                }
                .into()
            })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn count_matches(&self) -> usize {
        self.combinations.len()
    }

    pub fn count_double_opponents(&self) -> usize {
        self.double_count
    }

    pub fn count_single_opponents(&self) -> usize {
        self.single_count
    }

    /// Roster size required for the given match type
    pub fn count_opponents(&self, match_type: MatchType) -> usize {
        match match_type {
            MatchType::Single => self.single_count,
            MatchType::Double => self.double_count,
        }
    }

    pub fn combinations(&self) -> &'static [MatchCombination] {
        self.combinations
    }

    /// # Panics
    /// If `match_index` is not below [`count_matches`](Self::count_matches).
    pub fn match_combination(&self, match_index: usize) -> &MatchCombination {
        assert!(
            match_index < self.combinations.len(),
            "match index {} out of range for {} with {} matches",
            match_index,
            self.name,
            self.combinations.len()
        );
        &self.combinations[match_index]
    }

    pub fn match_type(&self, match_index: usize) -> MatchType {
        self.match_combination(match_index).match_type
    }

    pub fn opponent_index_a(&self, match_index: usize) -> usize {
        self.match_combination(match_index).opponent_index_a
    }

    pub fn opponent_index_b(&self, match_index: usize) -> usize {
        self.match_combination(match_index).opponent_index_b
    }

    /// Games of a team match in order of play
    pub fn fixtures(&self) -> impl Iterator<Item = Fixture> + '_ {
        self.combinations
            .iter()
            .enumerate()
            .map(|(index, combination)| Fixture {
                number: index + 1,
                combination: *combination,
            })
    }
}

impl std::fmt::Display for TeamMatchSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

impl Serialize for TeamMatchSystem {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}
