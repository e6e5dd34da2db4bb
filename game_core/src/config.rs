use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::Params;

/// Rejected tuning values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("paddle height {paddle_height} does not fit in arena height {arena_height}")]
    PaddleTooTall {
        paddle_height: f32,
        arena_height: f32,
    },

    #[error("ball_speed_initial {initial} exceeds ball_speed_max {max}")]
    SpeedRange { initial: f32, max: f32 },

    #[error("win_score must be at least 1")]
    ZeroWinScore,
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_max: f32,
    pub ball_speed_increase: f32,
    pub ball_paddle_overlap: f32,
    pub serve_delay: f32,
    pub ai_speed_base: f32,
    pub ai_speed_per_point: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ball_paddle_overlap: Params::BALL_PADDLE_OVERLAP,
            serve_delay: Params::SERVE_DELAY,
            ai_speed_base: Params::AI_SPEED_BASE,
            ai_speed_per_point: Params::AI_SPEED_PER_POINT,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for paddle based on player ID
    pub fn paddle_x(&self, player_id: u8) -> f32 {
        if player_id == 0 {
            self.paddle_inset // Player paddle (near side)
        } else {
            self.arena_width - self.paddle_inset // AI paddle (far side)
        }
    }

    /// Clamp paddle Y to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_height = self.paddle_height / 2.0;
        y.clamp(half_height, self.arena_height - half_height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed_initial", self.ball_speed_initial),
            ("ball_speed_max", self.ball_speed_max),
            ("ball_speed_increase", self.ball_speed_increase),
            ("ai_speed_base", self.ai_speed_base),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if !(self.serve_delay.is_finite() && self.serve_delay >= 0.0) {
            return Err(ConfigError::NotPositive {
                field: "serve_delay",
                value: self.serve_delay,
            });
        }
        if self.paddle_height >= self.arena_height {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                arena_height: self.arena_height,
            });
        }
        if self.ball_speed_initial > self.ball_speed_max {
            return Err(ConfigError::SpeedRange {
                initial: self.ball_speed_initial,
                max: self.ball_speed_max,
            });
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(0), 1.5, "Player paddle X position");
        assert_eq!(config.paddle_x(1), 30.5, "AI paddle X position");
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        let half_height = config.paddle_height / 2.0;
        assert_eq!(config.clamp_paddle_y(0.0), half_height);
        assert_eq!(
            config.clamp_paddle_y(100.0),
            config.arena_height - half_height
        );
        let valid_y = 12.0;
        assert_eq!(config.clamp_paddle_y(valid_y), valid_y);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_negative_speed() {
        let config = Config {
            paddle_speed: -1.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "paddle_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_paddle() {
        let config = Config {
            paddle_height: 30.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooTall { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_win_score() {
        let config = Config {
            win_score: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWinScore));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "win_score": 11 }"#).unwrap();
        assert_eq!(config.win_score, 11);
        assert_eq!(config.paddle_speed, Params::PADDLE_SPEED);
    }
}
