//! Test fixtures and recording listeners for integration testing

use chrono::{TimeZone, Utc};
use std::sync::{Arc, Mutex};
use ttlive_core::rating::RatingListener;
use ttlive_core::team_match::Lineup;
use ttlive_core::types::{Event, Player, RatingAdjustment, TeamMatchEvent};

/// Notification captured by [`RecordingListener`]
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    EventStarted(String),
    Adjusted(RatingAdjustment),
}

/// Rating listener that captures every notification for later inspection
#[derive(Debug, Default)]
pub struct RecordingListener {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all notifications (for testing)
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|notifications| notifications.clone())
            .unwrap_or_default()
    }

    pub fn adjustments(&self) -> Vec<RatingAdjustment> {
        self.notifications()
            .into_iter()
            .filter_map(|notification| match notification {
                Notification::Adjusted(adjustment) => Some(adjustment),
                Notification::EventStarted(_) => None,
            })
            .collect()
    }

    pub fn count(&self) -> usize {
        self.notifications().len()
    }
}

impl RatingListener for RecordingListener {
    fn on_start_event(&self, event: &dyn Event) {
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.push(Notification::EventStarted(event.name()));
        }
    }

    fn on_adjust_rating(&self, adjustment: &RatingAdjustment) {
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.push(Notification::Adjusted(adjustment.clone()));
        }
    }
}

pub fn team_match_event() -> TeamMatchEvent {
    TeamMatchEvent {
        league: "Bezirksoberliga".to_string(),
        team_a: "TTC Blau-Weiss".to_string(),
        team_b: "SV Rot".to_string(),
        date: Utc.with_ymd_and_hms(2014, 2, 15, 18, 0, 0).unwrap(),
    }
}

/// Lineup with players numbered from `first_id`; doubles pair neighbours
pub fn lineup(first_id: u32, singles: usize, doubles: usize) -> Lineup<Player, (Player, Player)> {
    let players: Vec<Player> = (0..singles as u32)
        .map(|i| Player::new(first_id + i, "Player", &format!("P{}", first_id + i)))
        .collect();
    let pairs = (0..doubles)
        .map(|i| (players[2 * i].clone(), players[2 * i + 1].clone()))
        .collect();
    Lineup::new(players, pairs)
}
