//! Tiered update scheduler
//!
//! Drives one frame of the client loop. Critical systems (input, physics,
//! camera) run on every frame with that frame's delta. Cosmetic systems
//! (particles, lighting) run only when `tick % cosmetic_period == 0`, and
//! receive the time accumulated since their previous run so they advance at
//! the same overall rate.
//!
//! While frozen the loop keeps ticking and every system is still invoked,
//! but with a zero delta: input keeps flowing, simulated time stands still.

use crate::config::SchedulerConfig;
use crate::error::{ClientError, Result};

/// A unit of per-frame work over shared state `S`
pub trait System<S> {
    fn name(&self) -> &'static str;
    fn update(&mut self, state: &mut S, dt: f32);
}

/// Adapter for registering a closure as a system
pub struct FnSystem<F> {
    name: &'static str,
    f: F,
}

impl<F> FnSystem<F> {
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }
}

impl<S, F> System<S> for FnSystem<F>
where
    F: FnMut(&mut S, f32),
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn update(&mut self, state: &mut S, dt: f32) {
        (self.f)(state, dt)
    }
}

/// Update frequency class of a system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Every frame
    Critical,
    /// Every `cosmetic_period`-th frame
    Cosmetic,
}

/// What happened during one processed frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Tick counter after this frame
    pub tick: u64,
    /// Delta handed to critical systems (0 while frozen)
    pub dt: f32,
    /// Delta handed to cosmetic systems, if they ran this frame
    pub cosmetic_dt: Option<f32>,
    pub frozen: bool,
    /// The host delta exceeded `max_frame_dt` and was cut down (never while frozen)
    pub clamped: bool,
}

impl FrameReport {
    pub fn ran_cosmetic(&self) -> bool {
        self.cosmetic_dt.is_some()
    }
}

pub struct TieredScheduler<S> {
    tick: u64,
    cosmetic_period: u32,
    max_frame_dt: f32,
    frozen: bool,
    cosmetic_accum: f32,
    critical: Vec<Box<dyn System<S>>>,
    cosmetic: Vec<Box<dyn System<S>>>,
}

impl<S> TieredScheduler<S> {
    pub fn new(config: &SchedulerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tick: 0,
            cosmetic_period: config.cosmetic_period,
            max_frame_dt: config.max_frame_dt,
            frozen: false,
            cosmetic_accum: 0.0,
            critical: Vec::new(),
            cosmetic: Vec::new(),
        })
    }

    /// Register a system; systems in a tier run in registration order
    pub fn add_system(&mut self, tier: Tier, system: impl System<S> + 'static) -> &mut Self {
        log::debug!("registered {:?} system '{}'", tier, system.name());
        match tier {
            Tier::Critical => self.critical.push(Box::new(system)),
            Tier::Cosmetic => self.cosmetic.push(Box::new(system)),
        }
        self
    }

    pub fn system_names(&self, tier: Tier) -> Vec<&'static str> {
        let systems = match tier {
            Tier::Critical => &self.critical,
            Tier::Cosmetic => &self.cosmetic,
        };
        systems.iter().map(|s| s.name()).collect()
    }

    /// Number of frames processed so far
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn cosmetic_period(&self) -> u32 {
        self.cosmetic_period
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn set_frozen(&mut self, frozen: bool) {
        if self.frozen != frozen {
            let what = if frozen { "frozen" } else { "thawed" };
            log::debug!("scheduler {} at tick {}", what, self.tick);
        }
        self.frozen = frozen;
    }

    /// Time accumulated for the next cosmetic run
    pub fn pending_cosmetic_dt(&self) -> f32 {
        self.cosmetic_accum
    }

    /// Process one rendered frame
    ///
    /// Negative or non-finite deltas are rejected and the frame is not
    /// processed: the tick does not advance and no system runs.
    pub fn run_frame(&mut self, state: &mut S, dt: f32) -> Result<FrameReport> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(ClientError::InvalidFrameDelta(dt));
        }

        let clamped = !self.frozen && dt > self.max_frame_dt;
        let dt = if self.frozen {
            0.0
        } else {
            dt.min(self.max_frame_dt)
        };

        self.tick += 1;

        for system in &mut self.critical {
            system.update(state, dt);
        }

        self.cosmetic_accum += dt;
        let cosmetic_dt = if self.tick % u64::from(self.cosmetic_period) == 0 {
            let cosmetic_dt = std::mem::take(&mut self.cosmetic_accum);
            for system in &mut self.cosmetic {
                system.update(state, cosmetic_dt);
            }
            Some(cosmetic_dt)
        } else {
            None
        };

        Ok(FrameReport {
            tick: self.tick,
            dt,
            cosmetic_dt,
            frozen: self.frozen,
            clamped,
        })
    }
}
