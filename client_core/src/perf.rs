//! Debug performance mode
//!
//! Toggled with `P`. While enabled, frame deltas are sampled and summarised
//! every `report_interval` frames.

use crate::config::PerfConfig;

/// Summary of the last reporting window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfSnapshot {
    pub frames: u32,
    pub avg_fps: f32,
    pub avg_frame_ms: f32,
    pub worst_frame_ms: f32,
    pub particles: usize,
    pub lights: usize,
}

#[derive(Debug)]
pub struct PerfMonitor {
    enabled: bool,
    interval: u32,
    frames: u32,
    total_dt: f32,
    worst_dt: f32,
    last: Option<PerfSnapshot>,
}

impl PerfMonitor {
    pub fn new(config: &PerfConfig) -> Self {
        Self {
            enabled: config.enabled,
            interval: config.report_interval.max(1),
            frames: 0,
            total_dt: 0.0,
            worst_dt: 0.0,
            last: None,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.frames = 0;
        self.total_dt = 0.0;
        self.worst_dt = 0.0;
        if !self.enabled {
            self.last = None;
        }
        log::info!(
            "performance mode {}",
            if self.enabled { "on" } else { "off" }
        );
        self.enabled
    }

    pub fn last(&self) -> Option<PerfSnapshot> {
        self.last
    }

    /// Record one frame's host delta; returns a snapshot when a window closes
    pub fn record(&mut self, dt: f32, particles: usize, lights: usize) -> Option<PerfSnapshot> {
        if !self.enabled {
            return None;
        }

        self.frames += 1;
        self.total_dt += dt;
        self.worst_dt = self.worst_dt.max(dt);
        if self.frames < self.interval {
            return None;
        }

        let avg_dt = self.total_dt / self.frames as f32;
        let snapshot = PerfSnapshot {
            frames: self.frames,
            avg_fps: if avg_dt > 0.0 { 1.0 / avg_dt } else { 0.0 },
            avg_frame_ms: avg_dt * 1000.0,
            worst_frame_ms: self.worst_dt * 1000.0,
            particles,
            lights,
        };
        log::info!(
            "perf: {:.1} fps, avg {:.2} ms, worst {:.2} ms, {} particles, {} lights",
            snapshot.avg_fps,
            snapshot.avg_frame_ms,
            snapshot.worst_frame_ms,
            snapshot.particles,
            snapshot.lights
        );

        self.frames = 0;
        self.total_dt = 0.0;
        self.worst_dt = 0.0;
        self.last = Some(snapshot);
        self.last
    }
}
