use glam::Vec2;

use crate::config::Config;
use crate::params::Params;

/// Arena bounds
///
/// `x` runs from the player's back wall (0) to the AI's back wall (`width`),
/// `y` is the lateral axis the paddles slide along.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
    paddle_inset: f32,
}

impl GameMap {
    pub fn new() -> Self {
        Self {
            width: Params::ARENA_WIDTH,
            height: Params::ARENA_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            width: config.arena_width,
            height: config.arena_height,
            paddle_inset: config.paddle_inset,
        }
    }

    /// Clamp a lateral position so an object of `half_extent` stays inside
    pub fn clamp_y(&self, y: f32, half_extent: f32) -> f32 {
        y.clamp(half_extent, self.height - half_extent)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn ball_spawn(&self) -> Vec2 {
        self.center()
    }

    pub fn paddle_spawn(&self, player_id: u8) -> Vec2 {
        let x = if player_id == 0 {
            self.paddle_inset
        } else {
            self.width - self.paddle_inset
        };
        Vec2::new(x, self.height / 2.0)
    }

    pub fn contains_x(&self, x: f32) -> bool {
        (0.0..=self.width).contains(&x)
    }
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new()
    }
}
