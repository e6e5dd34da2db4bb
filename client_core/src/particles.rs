//! Cosmetic spark particles
//!
//! Stored in their own `hecs` world so spawning and expiry never touch the
//! simulation's entities.

use glam::Vec3;
use hecs::World;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ParticleConfig;
use crate::feedback::{Impact, ImpactKind};

#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec3,
    pub vel: Vec3,
    pub age: f32,
    pub lifetime: f32,
    pub color: [f32; 4],
}

impl Particle {
    pub fn expired(&self) -> bool {
        self.age >= self.lifetime
    }

    /// 1 at spawn, 0 at expiry
    pub fn remaining(&self) -> f32 {
        (1.0 - self.age / self.lifetime).clamp(0.0, 1.0)
    }
}

/// What the renderer needs per particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleView {
    pub pos: Vec3,
    pub color: [f32; 4],
}

const PLAYER_COLOR: [f32; 4] = [0.2, 0.8, 1.0, 1.0];
const AI_COLOR: [f32; 4] = [1.0, 0.35, 0.2, 1.0];
const WALL_COLOR: [f32; 4] = [0.9, 0.9, 0.9, 1.0];

pub fn side_color(player_id: u8) -> [f32; 4] {
    if player_id == 0 {
        PLAYER_COLOR
    } else {
        AI_COLOR
    }
}

pub struct ParticleField {
    world: World,
    rng: StdRng,
    config: ParticleConfig,
}

impl ParticleField {
    pub fn new(config: ParticleConfig, seed: u64) -> Self {
        Self {
            world: World::new(),
            rng: StdRng::seed_from_u64(seed),
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.world.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.world.clear();
    }

    /// Spawn the burst for one impact
    pub fn react(&mut self, impact: &Impact) {
        let (count, color) = match impact.kind {
            ImpactKind::Paddle { player_id } => {
                let scaled = self.config.paddle_burst as f32 * (0.5 + impact.strength);
                (scaled.round() as usize, side_color(player_id))
            }
            ImpactKind::Wall => (self.config.wall_burst, WALL_COLOR),
            ImpactKind::Score { player_id } => (self.config.score_burst, side_color(player_id)),
            ImpactKind::Serve => (0, WALL_COLOR),
        };
        self.emit_burst(impact.position, count, color);
    }

    /// Spawn up to `count` particles at `origin`, respecting the cap
    ///
    /// Returns how many were spawned.
    pub fn emit_burst(&mut self, origin: Vec3, count: usize, color: [f32; 4]) -> usize {
        let room = self.config.max_particles.saturating_sub(self.len());
        let count = count.min(room);

        for _ in 0..count {
            let dir = Vec3::new(
                self.rng.gen_range(-1.0..1.0),
                self.rng.gen_range(0.2..1.0),
                self.rng.gen_range(-1.0..1.0),
            )
            .normalize_or_zero();
            let speed = self.config.speed * self.rng.gen_range(0.5..1.0);
            let lifetime = self.config.lifetime * self.rng.gen_range(0.6..1.0);
            self.world.spawn((Particle {
                pos: origin,
                vel: dir * speed,
                age: 0.0,
                lifetime,
                color,
            },));
        }
        count
    }

    /// Integrate motion and remove expired particles
    pub fn update(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }

        let gravity = Vec3::new(0.0, -self.config.gravity, 0.0);
        let mut expired = Vec::new();
        for (entity, particle) in self.world.query_mut::<&mut Particle>() {
            particle.vel += gravity * dt;
            particle.pos += particle.vel * dt;
            // Sparks don't fall through the table
            if particle.pos.y < 0.0 {
                particle.pos.y = 0.0;
                particle.vel.y = -particle.vel.y * 0.4;
            }
            particle.age += dt;
            if particle.expired() {
                expired.push(entity);
            }
        }

        for entity in expired {
            let _ = self.world.despawn(entity);
        }
    }

    /// Snapshot with alpha fading over each particle's life
    pub fn views(&self) -> Vec<ParticleView> {
        self.world
            .query::<&Particle>()
            .iter()
            .map(|(_e, p)| {
                let mut color = p.color;
                color[3] *= p.remaining();
                ParticleView { pos: p.pos, color }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> ParticleField {
        ParticleField::new(ParticleConfig::default(), 3)
    }

    #[test]
    fn test_burst_spawns_and_expires() {
        let mut field = field();
        let spawned = field.emit_burst(Vec3::new(1.0, 0.5, 1.0), 10, WALL_COLOR);
        assert_eq!(spawned, 10);
        assert_eq!(field.len(), 10);

        field.update(0.1);
        assert_eq!(field.len(), 10, "Nothing expires this early");

        // Longer than the longest possible lifetime
        field.update(ParticleConfig::default().lifetime + 0.01);
        assert!(field.is_empty());
    }

    #[test]
    fn test_cap_is_respected() {
        let config = ParticleConfig {
            max_particles: 16,
            ..ParticleConfig::default()
        };
        let mut field = ParticleField::new(config, 3);
        assert_eq!(field.emit_burst(Vec3::ZERO, 10, WALL_COLOR), 10);
        assert_eq!(field.emit_burst(Vec3::ZERO, 10, WALL_COLOR), 6);
        assert_eq!(field.emit_burst(Vec3::ZERO, 10, WALL_COLOR), 0);
        assert_eq!(field.len(), 16);
    }

    #[test]
    fn test_particles_move_and_stay_above_table() {
        let mut field = field();
        field.emit_burst(Vec3::new(5.0, 0.5, 5.0), 20, WALL_COLOR);
        for _ in 0..5 {
            field.update(0.05);
        }
        for view in field.views() {
            assert!(view.pos.y >= 0.0);
            assert!(view.color[3] < 1.0, "Fading with age");
        }
    }

    #[test]
    fn test_zero_dt_is_a_no_op() {
        let mut field = field();
        field.emit_burst(Vec3::ZERO, 4, WALL_COLOR);
        let before = field.views();
        field.update(0.0);
        assert_eq!(field.views(), before);
    }

    #[test]
    fn test_react_uses_side_colour() {
        let mut field = field();
        field.react(&Impact {
            kind: ImpactKind::Score { player_id: 1 },
            position: Vec3::ZERO,
            strength: 1.0,
        });
        assert_eq!(field.len(), ParticleConfig::default().score_burst);
        assert!(field.views().iter().all(|v| v.color[0] == AI_COLOR[0]));

        field.clear();
        field.react(&Impact {
            kind: ImpactKind::Serve,
            position: Vec3::ZERO,
            strength: 0.2,
        });
        assert!(field.is_empty());
    }
}
