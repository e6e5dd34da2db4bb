//! Client configuration
//!
//! Loaded from JSON. Every field is optional; missing fields take the
//! defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Seed for the match and cosmetic RNGs
    pub seed: u64,
    /// Optional `env_logger` filter; `RUST_LOG` is used when absent
    pub log_filter: Option<String>,
    pub game: game_core::Config,
    pub scheduler: SchedulerConfig,
    pub input: InputConfig,
    pub camera: CameraConfig,
    pub particles: ParticleConfig,
    pub lighting: LightingConfig,
    pub haptics: HapticsConfig,
    pub perf: PerfConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            log_filter: None,
            game: game_core::Config::default(),
            scheduler: SchedulerConfig::default(),
            input: InputConfig::default(),
            camera: CameraConfig::default(),
            particles: ParticleConfig::default(),
            lighting: LightingConfig::default(),
            haptics: HapticsConfig::default(),
            perf: PerfConfig::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ClientError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loading config from {}", path.display());
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        self.game.validate()?;
        self.scheduler.validate()?;

        if !(0.0..1.0).contains(&self.input.stick_deadzone) {
            return Err(ClientError::InvalidConfig(format!(
                "input.stick_deadzone must be in [0, 1), got {}",
                self.input.stick_deadzone
            )));
        }
        if self.particles.lifetime <= 0.0 {
            return Err(ClientError::InvalidConfig("particles.lifetime must be positive".into()));
        }
        if self.lighting.max_lights == 0 {
            return Err(ClientError::InvalidConfig(
                "lighting.max_lights must leave room for the ball glow".into(),
            ));
        }
        if self.camera.follow_rate < 0.0 || self.camera.aspect <= 0.0 {
            return Err(ClientError::InvalidConfig(
                "camera.follow_rate must be >= 0 and camera.aspect > 0".into(),
            ));
        }
        if self.perf.report_interval == 0 {
            return Err(ClientError::InvalidConfig(
                "perf.report_interval must be at least 1 frame".into(),
            ));
        }
        Ok(())
    }
}

/// Tiering of the frame loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Cosmetic systems run when `tick % cosmetic_period == 0`
    pub cosmetic_period: u32,
    /// Upper bound for a single frame delta, in seconds
    pub max_frame_dt: f32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            cosmetic_period: 2,
            max_frame_dt: 0.25,
        }
    }
}

impl SchedulerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.cosmetic_period == 0 {
            return Err(ClientError::InvalidSchedule(
                "cosmetic_period must be at least 1".into(),
            ));
        }
        if !(self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0) {
            return Err(ClientError::InvalidSchedule(format!(
                "max_frame_dt must be positive, got {}",
                self.max_frame_dt
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub stick_deadzone: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            stick_deadzone: 0.15,
        }
    }
}

/// Chase camera behind the player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub height: f32,
    /// Distance behind the player's back wall
    pub distance: f32,
    /// Exponential smoothing rate, per second
    pub follow_rate: f32,
    /// How far the camera slides toward the ball laterally, 0..1
    pub lateral_follow: f32,
    pub fov_y_degrees: f32,
    pub aspect: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            height: 14.0,
            distance: 10.0,
            follow_rate: 4.0,
            lateral_follow: 0.35,
            fov_y_degrees: 55.0,
            aspect: 16.0 / 9.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub max_particles: usize,
    pub paddle_burst: usize,
    pub wall_burst: usize,
    pub score_burst: usize,
    pub lifetime: f32,
    pub speed: f32,
    pub gravity: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            max_particles: 512,
            paddle_burst: 24,
            wall_burst: 8,
            score_burst: 64,
            lifetime: 0.8,
            speed: 6.0,
            gravity: 9.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    /// Total lights including the ball glow
    pub max_lights: usize,
    pub ball_glow_intensity: f32,
    pub flash_intensity: f32,
    /// Exponential decay rate of impact flashes, per second
    pub flash_decay: f32,
    /// Flashes dimmer than this are removed
    pub min_intensity: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            max_lights: 8,
            ball_glow_intensity: 1.5,
            flash_intensity: 4.0,
            flash_decay: 6.0,
            min_intensity: 0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HapticsConfig {
    pub enabled: bool,
    pub paddle_strong: f32,
    pub paddle_weak: f32,
    pub paddle_ms: u32,
    pub point_lost_strong: f32,
    pub point_lost_ms: u32,
}

impl Default for HapticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            paddle_strong: 0.6,
            paddle_weak: 0.3,
            paddle_ms: 80,
            point_lost_strong: 1.0,
            point_lost_ms: 250,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerfConfig {
    /// Performance mode on at startup
    pub enabled: bool,
    /// Frames between perf reports
    pub report_interval: u32,
}

impl Default for PerfConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            report_interval: 120,
        }
    }
}
