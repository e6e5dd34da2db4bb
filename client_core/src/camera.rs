//! Chase camera for the 3D arena
//!
//! Sits behind and above the player's paddle and drifts sideways with the
//! ball. The renderer only needs `view_proj`.

use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

/// Camera struct
#[derive(Debug, Clone)]
pub struct FollowCamera {
    pub eye: Vec3,
    pub target: Vec3,
    config: CameraConfig,
    arena_width: f32,
    arena_depth: f32,
}

impl FollowCamera {
    /// Arena is `width` (paddle to paddle) x `depth` (lateral) units
    pub fn new(config: CameraConfig, width: f32, depth: f32) -> Self {
        let mut camera = Self {
            eye: Vec3::ZERO,
            target: Vec3::ZERO,
            config,
            arena_width: width,
            arena_depth: depth,
        };
        let center = Vec3::new(width / 2.0, 0.0, depth / 2.0);
        camera.snap(center);
        camera
    }

    /// Where the camera wants to be for a ball at `ball`
    pub fn desired(&self, ball: Vec3) -> (Vec3, Vec3) {
        let center_z = self.arena_depth / 2.0;
        let lateral = center_z + (ball.z - center_z) * self.config.lateral_follow;
        let eye = Vec3::new(-self.config.distance, self.config.height, lateral);
        let target = Vec3::new(self.arena_width / 2.0, 0.0, lateral);
        (eye, target)
    }

    /// Jump straight to the desired pose
    pub fn snap(&mut self, ball: Vec3) {
        let (eye, target) = self.desired(ball);
        self.eye = eye;
        self.target = target;
    }

    /// Ease toward the desired pose; frame-rate independent
    pub fn update(&mut self, ball: Vec3, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let (eye, target) = self.desired(ball);
        let t = 1.0 - (-self.config.follow_rate * dt).exp();
        self.eye = self.eye.lerp(eye, t);
        self.target = self.target.lerp(target, t);
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.config.fov_y_degrees.to_radians(),
            self.config.aspect,
            0.1,
            200.0,
        )
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.config.aspect = aspect;
        }
    }
}
