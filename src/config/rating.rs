//! Rating system configuration

use crate::error::{LeagueError, Result};
use serde::{Deserialize, Serialize};

/// Parameters of the live rating formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingSettings {
    /// Change constant (K), scales the size of every adjustment
    pub change_constant: i32,
    /// Divisor applied to the point difference inside the logarithm
    pub rating_scale: f64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            change_constant: 16,
            rating_scale: 150.0,
        }
    }
}

impl RatingSettings {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.change_constant <= 0 {
            return Err(LeagueError::ConfigurationError {
                message: "Change constant must be positive".to_string(),
            }
            .into());
        }

        if !self.rating_scale.is_finite() || self.rating_scale <= 0.0 {
            return Err(LeagueError::ConfigurationError {
                message: "Rating scale must be a positive number".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
