use glam::Vec2;
use rand::Rng;

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub player_id: u8, // 0 = player (near), 1 = AI (far)
    pub y: f32,        // Lateral position (clamped to arena)
}

impl Paddle {
    pub fn new(player_id: u8, y: f32) -> Self {
        Self { player_id, y }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Hold the ball still at `center` until the next serve
    pub fn park(&mut self, center: Vec2) {
        self.pos = center;
        self.vel = Vec2::ZERO;
    }

    pub fn is_parked(&self) -> bool {
        self.vel == Vec2::ZERO
    }

    /// Put the ball in play from `center` with a random direction
    pub fn serve(&mut self, center: Vec2, speed: f32, rng: &mut crate::GameRng) {
        self.pos = center;

        // Random angle between -45° and 45°, or 135° and 225°
        let right = rng.0.gen_bool(0.5);
        let angle: f32 = if right {
            rng.0.gen_range(-0.785..0.785)
        } else {
            rng.0.gen_range(2.356..3.927)
        };

        self.vel = Vec2::new(angle.cos(), angle.sin()) * speed;
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub axis: f32, // -1.0 = toward y=0, 1.0 = toward y=height, analog in between
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, axis: f32) {
        self.axis = if axis.is_finite() {
            axis.clamp(-1.0, 1.0)
        } else {
            0.0
        };
    }
}
