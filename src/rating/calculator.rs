//! Live rating (LivePZ) calculation
//!
//! The expected score of side A is `1 / (1 + log10((points_b - points_a) / 150))`.
//! This is not the exponential Elo curve; rating histories depend on the exact
//! numbers, so the formula is reproduced as is and inputs outside its domain
//! are rejected instead of being patched up.

use crate::config::RatingSettings;
use crate::error::{LeagueError, Result};
use crate::events::ListenerList;
use crate::game::{GameResult, Slot};
use crate::types::{Event, Player, RatingAdjustment};
use std::sync::Arc;
use tracing::{debug, warn};

/// Receiver of rating notifications
pub trait RatingListener: Send + Sync {
    /// A new rated event (e.g. a team match) has started
    fn on_start_event(&self, event: &dyn Event);

    /// A rating adjustment has been computed
    fn on_adjust_rating(&self, adjustment: &RatingAdjustment);
}

/// Rating change of side A for one game, using the standard scale of 150
///
/// # Errors
/// [`LeagueError::InvalidPointDifference`] if `points_b - points_a <= 0`,
/// [`LeagueError::NonFiniteExpectation`] if the expected score is not finite and
/// [`LeagueError::ChangeOutOfRange`] if the rounded change does not fit an `i32`.
pub fn calculate_change(
    change_constant: i32,
    points_a: i32,
    points_b: i32,
    has_won: bool,
) -> Result<i32> {
    calculate_change_scaled(
        change_constant,
        points_a,
        points_b,
        has_won,
        RatingSettings::default().rating_scale,
    )
}

fn calculate_change_scaled(
    change_constant: i32,
    points_a: i32,
    points_b: i32,
    has_won: bool,
    scale: f64,
) -> Result<i32> {
    let point_diff = f64::from(points_b) - f64::from(points_a);
    if point_diff <= 0.0 {
        warn!(
            "Point difference {} - {} is outside the rating formula domain",
            points_b, points_a
        );
        return Err(LeagueError::InvalidPointDifference { points_a, points_b }.into());
    }

    // the formula has a pole where log10 reaches -1 (point_diff == scale / 10)
    let denominator = 1.0 + (point_diff / scale).log10();
    let expected = 1.0 / denominator;
    if denominator.abs() < f64::EPSILON || !expected.is_finite() {
        warn!(
            "Expected score for {} vs {} is not finite",
            points_a, points_b
        );
        return Err(LeagueError::NonFiniteExpectation { points_a, points_b }.into());
    }

    let actual = if has_won { 1.0 } else { 0.0 };
    let change = f64::from(change_constant) * (actual - expected);

    // round half up, so -2.5 becomes -2
    let rounded = (change + 0.5).floor();
    if !(f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&rounded) {
        warn!(
            "Rating change {} for {} vs {} does not fit the point range",
            rounded, points_a, points_b
        );
        return Err(LeagueError::ChangeOutOfRange { points_a, points_b }.into());
    }

    Ok(rounded as i32)
}

/// Computes rating changes and reports them to registered listeners
#[derive(Debug, Default)]
pub struct LivePzCalculator {
    settings: RatingSettings,
    listeners: ListenerList<dyn RatingListener>,
}

impl LivePzCalculator {
    /// Create a calculator with the default change constant and scale
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: RatingSettings) -> Result<Self> {
        settings.validate()?;

        Ok(Self {
            settings,
            listeners: ListenerList::new(),
        })
    }

    pub fn settings(&self) -> &RatingSettings {
        &self.settings
    }

    pub fn add_listener(&self, listener: Arc<dyn RatingListener>) {
        self.listeners.add(listener);
    }

    pub fn remove_listener(&self, listener: &Arc<dyn RatingListener>) -> bool {
        self.listeners.remove(listener)
    }

    pub fn clear_listeners(&self) {
        self.listeners.clear();
    }

    /// Rating change of side A with the configured change constant and scale
    pub fn calculate_change(&self, points_a: i32, points_b: i32, has_won: bool) -> Result<i32> {
        calculate_change_scaled(
            self.settings.change_constant,
            points_a,
            points_b,
            has_won,
            self.settings.rating_scale,
        )
    }

    /// Announce the start of a rated event to all listeners
    pub fn start_event(&self, event: &dyn Event) {
        debug!("Starting rated event {}", event.name());
        self.listeners.notify(event, |listener, event| listener.on_start_event(event));
    }

    /// Report a computed adjustment to all listeners
    pub fn set_adjustment(&self, adjustment: &RatingAdjustment) {
        debug!(
            "Rating adjustment for player {}: {} -> {}",
            adjustment.player_id,
            adjustment.points_before,
            adjustment.points_after()
        );
        self.listeners
            .notify(adjustment, |listener, adjustment| listener.on_adjust_rating(adjustment));
    }

    /// Rate a single game from side A's perspective
    ///
    /// Returns `Ok(None)` while the game is undetermined or an opponent cannot
    /// be resolved yet. Otherwise the adjustment is reported to the listeners
    /// and returned.
    pub fn rate_game(
        &self,
        result: &GameResult<Player>,
        points_a: i32,
        points_b: i32,
    ) -> Result<Option<RatingAdjustment>> {
        if !result.is_finished() {
            debug!("Skipping undetermined game");
            return Ok(None);
        }

        let (player, opponent) = match (
            result.opponent_at(Slot::PlayerA),
            result.opponent_at(Slot::PlayerB),
        ) {
            (Some(player), Some(opponent)) => (player, opponent),
            _ => {
                debug!("Skipping game with unresolved opponents");
                return Ok(None);
            }
        };

        let won = result.has_won_a();
        let change = self.calculate_change(points_a, points_b, won)?;

        let adjustment = RatingAdjustment {
            player_id: player.player_id,
            opponent_id: opponent.player_id,
            result: result.text().to_string(),
            points_before: points_a,
            opponent_points: points_b,
            won,
            change,
        };
        self.set_adjustment(&adjustment);

        Ok(Some(adjustment))
    }
}
