//! Common types used throughout the table tennis core

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Internal identifier for players, unique within one running process
pub type PlayerId = u32;

/// Player identity as known to the league
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Dynamically assigned id, not stable across environments
    pub player_id: PlayerId,
    /// Globally unique id provided by the TTLive service
    pub ttlive_id: u32,
    pub title: Option<String>,
    pub firstname: String,
    pub lastname: String,
}

impl Player {
    pub fn new(player_id: PlayerId, firstname: &str, lastname: &str) -> Self {
        Self {
            player_id,
            ttlive_id: 0,
            title: None,
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.title {
            Some(title) => write!(f, "{} {} {}", title, self.firstname, self.lastname),
            None => write!(f, "{} {}", self.firstname, self.lastname),
        }
    }
}

/// Anything that groups rated games, e.g. a team match or a tournament
pub trait Event: Send + Sync {
    /// Name of the tournament or league the event belongs to
    fn tournament_name(&self) -> &str;

    /// Display name of the event itself
    fn name(&self) -> String;

    fn date(&self) -> DateTime<Utc>;
}

/// Descriptor of one team match in a league
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMatchEvent {
    pub league: String,
    pub team_a: String,
    pub team_b: String,
    pub date: DateTime<Utc>,
}

impl Event for TeamMatchEvent {
    fn tournament_name(&self) -> &str {
        &self.league
    }

    fn name(&self) -> String {
        format!("{} - {}", self.team_a, self.team_b)
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

/// Rating change computed for one player after a single game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingAdjustment {
    pub player_id: PlayerId,
    pub opponent_id: PlayerId,
    /// Canonical text of the game result, from the player's perspective
    pub result: String,
    pub points_before: i32,
    pub opponent_points: i32,
    pub won: bool,
    pub change: i32,
}

impl RatingAdjustment {
    pub fn points_after(&self) -> i32 {
        self.points_before + self.change
    }
}
