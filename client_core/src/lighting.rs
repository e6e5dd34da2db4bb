//! Dynamic lights: a glow that rides on the ball plus short impact flashes

use glam::Vec3;

use crate::config::LightingConfig;
use crate::feedback::{Impact, ImpactKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    BallGlow,
    Flash,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
}

const GLOW_COLOR: [f32; 3] = [1.0, 0.95, 0.8];

fn flash_color(kind: ImpactKind) -> [f32; 3] {
    match kind {
        ImpactKind::Paddle { player_id: 0 } | ImpactKind::Score { player_id: 0 } => {
            [0.2, 0.8, 1.0]
        }
        ImpactKind::Paddle { .. } | ImpactKind::Score { .. } => [1.0, 0.35, 0.2],
        ImpactKind::Wall | ImpactKind::Serve => [0.9, 0.9, 0.9],
    }
}

/// Index 0 is always the ball glow
pub struct LightRig {
    lights: Vec<Light>,
    config: LightingConfig,
}

impl LightRig {
    pub fn new(config: LightingConfig, ball: Vec3) -> Self {
        let glow = Light {
            kind: LightKind::BallGlow,
            position: ball,
            color: GLOW_COLOR,
            intensity: config.ball_glow_intensity,
        };
        Self {
            lights: vec![glow],
            config,
        }
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn flash_count(&self) -> usize {
        self.lights.len() - 1
    }

    /// Drop every flash, keep the glow
    pub fn clear_flashes(&mut self) {
        self.lights.truncate(1);
    }

    pub fn react(&mut self, impact: &Impact) {
        if impact.kind == ImpactKind::Serve {
            return;
        }
        let intensity = self.config.flash_intensity * impact.strength.max(0.25);
        self.add_flash(impact.position, flash_color(impact.kind), intensity);
    }

    /// Add a flash, evicting the oldest one when the rig is full
    pub fn add_flash(&mut self, position: Vec3, color: [f32; 3], intensity: f32) {
        if self.config.max_lights <= 1 {
            return;
        }
        if self.lights.len() >= self.config.max_lights {
            self.lights.remove(1);
        }
        self.lights.push(Light {
            kind: LightKind::Flash,
            position,
            color,
            intensity,
        });
    }

    /// Move the glow to the ball and fade flashes
    pub fn update(&mut self, ball: Vec3, dt: f32) {
        self.lights[0].position = ball;
        if dt <= 0.0 {
            return;
        }

        let falloff = (-self.config.flash_decay * dt).exp();
        let min_intensity = self.config.min_intensity;
        for light in self.lights.iter_mut().skip(1) {
            light.intensity *= falloff;
        }
        self.lights.retain(|l| l.kind == LightKind::BallGlow || l.intensity >= min_intensity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rig() -> LightRig {
        LightRig::new(LightingConfig::default(), Vec3::ZERO)
    }

    #[test]
    fn test_glow_follows_ball() {
        let mut rig = rig();
        rig.update(Vec3::new(3.0, 0.5, 4.0), 0.016);
        assert_eq!(rig.lights()[0].kind, LightKind::BallGlow);
        assert_eq!(rig.lights()[0].position, Vec3::new(3.0, 0.5, 4.0));
    }

    #[test]
    fn test_flash_decays_and_is_removed() {
        let mut rig = rig();
        rig.add_flash(Vec3::ONE, [1.0, 1.0, 1.0], 4.0);
        assert_eq!(rig.flash_count(), 1);

        rig.update(Vec3::ZERO, 0.1);
        let expected = 4.0 * (-0.6f32).exp();
        assert!((rig.lights()[1].intensity - expected).abs() < 1e-4);

        rig.update(Vec3::ZERO, 2.0);
        assert_eq!(rig.flash_count(), 0);
        assert_eq!(rig.lights().len(), 1, "Glow is never removed");
    }

    #[test]
    fn test_oldest_flash_evicted_when_full() {
        let config = LightingConfig {
            max_lights: 3,
            ..LightingConfig::default()
        };
        let mut rig = LightRig::new(config, Vec3::ZERO);
        for i in 0..4 {
            rig.add_flash(Vec3::splat(i as f32), [1.0; 3], 1.0);
        }
        assert_eq!(rig.lights().len(), 3);
        assert_eq!(rig.lights()[1].position, Vec3::splat(2.0));
        assert_eq!(rig.lights()[2].position, Vec3::splat(3.0));
    }

    #[test]
    fn test_impacts_flash_except_serve() {
        let mut rig = rig();
        rig.react(&Impact {
            kind: ImpactKind::Serve,
            position: Vec3::ZERO,
            strength: 0.2,
        });
        assert_eq!(rig.flash_count(), 0);

        rig.react(&Impact {
            kind: ImpactKind::Paddle { player_id: 0 },
            position: Vec3::ONE,
            strength: 1.0,
        });
        assert_eq!(rig.flash_count(), 1);
        assert_eq!(rig.lights()[1].color, [0.2, 0.8, 1.0]);
    }

    #[test]
    fn test_frozen_update_keeps_flashes() {
        let mut rig = rig();
        rig.add_flash(Vec3::ONE, [1.0; 3], 4.0);
        rig.update(Vec3::ZERO, 0.0);
        assert_eq!(rig.lights()[1].intensity, 4.0);
    }
}
