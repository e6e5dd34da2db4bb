//! One running game client
//!
//! `SessionState` is the single state struct every system mutates. The
//! scheduler owns the systems:
//!
//! | tier     | systems                              |
//! |----------|--------------------------------------|
//! | critical | input, simulation, camera            |
//! | cosmetic | lighting, particles, impact flush    |

use glam::{Mat4, Vec2, Vec3};

use crate::camera::FollowCamera;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::feedback::{react_to_events, Anchors, HostCommand, ImpactLog, Outbox, Output, Sound};
use crate::fsm::{FsmState, GameAction, GameFsm};
use crate::input::{Action, InputEvent, InputQueue, InputState};
use crate::lighting::{Light, LightRig};
use crate::particles::{ParticleField, ParticleView};
use crate::perf::{PerfMonitor, PerfSnapshot};
use crate::scheduler::{FrameReport, System, Tier, TieredScheduler};
use crate::simulation::{to_world, Control, Match};

pub struct SessionState {
    pub config: ClientConfig,
    pub fsm: GameFsm,
    pub input: InputState,
    pub queue: InputQueue,
    pub game: Match,
    pub camera: FollowCamera,
    pub particles: ParticleField,
    pub lights: LightRig,
    pub impacts: ImpactLog,
    pub outbox: Outbox,
    pub perf: PerfMonitor,
    /// Movement axis of the player's paddle, resolved from input each frame
    pub player_axis: f32,
    /// Let the AI drive the player's paddle too
    pub autoplay: bool,
    anchors: Anchors,
}

impl SessionState {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let game = Match::new(config.game.clone(), config.seed);
        let ball = game.ball_world();
        let camera = FollowCamera::new(config.camera.clone(), game.map.width, game.map.height);
        let particles = ParticleField::new(config.particles.clone(), config.seed.wrapping_add(1));
        let lights = LightRig::new(config.lighting.clone(), ball);
        let perf = PerfMonitor::new(&config.perf);
        let anchors = Anchors {
            goals: [
                to_world(Vec2::new(0.0, game.map.height / 2.0)),
                to_world(Vec2::new(game.map.width, game.map.height / 2.0)),
            ],
            max_speed: game.config.ball_speed_max,
        };

        Ok(Self {
            config,
            fsm: GameFsm::new(),
            input: InputState::new(),
            queue: InputQueue::new(),
            game,
            camera,
            particles,
            lights,
            impacts: ImpactLog::new(),
            outbox: Outbox::new(),
            perf,
            player_axis: 0.0,
            autoplay: false,
            anchors,
        })
    }

    fn clear_cosmetics(&mut self) {
        self.particles.clear();
        self.lights.clear_flashes();
        self.impacts.clear();
        self.camera.snap(self.game.ball_world());
    }

    fn start_match(&mut self) {
        self.game.reset();
        self.clear_cosmetics();
        self.outbox.sound(Sound::Start, self.game.ball_world(), 1.0);
        log::info!("match started");
    }

    /// Leave a paused or finished match; false when not allowed from here
    fn quit_to_menu(&mut self) -> bool {
        if !self.fsm.transition(GameAction::Quit).success {
            return false;
        }
        self.game.reset();
        self.player_axis = 0.0;
        self.clear_cosmetics();
        log::info!("back to menu");
        true
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Start => {
                if self.fsm.transition(GameAction::Start).success {
                    self.start_match();
                }
            }
            Action::Pause => {
                let action = match self.fsm.state() {
                    FsmState::Death | FsmState::Win => {
                        self.quit_to_menu();
                        return;
                    }
                    FsmState::Paused => GameAction::Resume,
                    _ => GameAction::Pause,
                };
                let result = self.fsm.transition(action);
                if !result.success {
                    return;
                }
                let ball = self.game.ball_world();
                match result.to_state {
                    FsmState::Paused => self.outbox.sound(Sound::Pause, ball, 0.8),
                    FsmState::Playing => self.outbox.sound(Sound::Resume, ball, 0.8),
                    _ => {}
                }
            }
            Action::Quit => {
                self.quit_to_menu();
            }
            Action::FocusLost => {
                if self.fsm.transition(GameAction::FocusLost).success {
                    log::info!("focus lost, match paused");
                }
            }
            Action::ToggleFullscreen => {
                self.outbox.push(Output::Host(HostCommand::ToggleFullscreen));
            }
            Action::TogglePerfMode => {
                self.perf.toggle();
            }
        }
    }

    fn finish_match(&mut self, winner: u8) {
        let ball = self.game.ball_world();
        let (action, sound) = if winner == 0 {
            (GameAction::PlayerWon, Sound::MatchWon)
        } else {
            (GameAction::PlayerLost, Sound::MatchLost)
        };
        if self.fsm.transition(action).success {
            self.outbox.sound(sound, ball, 1.0);
            log::info!(
                "match over: {} ({} - {})",
                if winner == 0 { "win" } else { "death" },
                self.game.score.left,
                self.game.score.right
            );
        }
    }
}

/// Drains queued input events and resolves the paddle axis
struct InputSystem;

impl System<SessionState> for InputSystem {
    fn name(&self) -> &'static str {
        "input"
    }

    fn update(&mut self, state: &mut SessionState, _dt: f32) {
        let events: Vec<InputEvent> = state.queue.drain().collect();
        for event in events {
            if let Some(action) = state.input.apply(event) {
                state.handle_action(action);
            }
        }
        state.player_axis = state.input.move_axis(state.config.input.stick_deadzone);
    }
}

/// Advances the match and turns its events into feedback
struct SimulationSystem;

impl System<SessionState> for SimulationSystem {
    fn name(&self) -> &'static str {
        "simulation"
    }

    fn update(&mut self, state: &mut SessionState, dt: f32) {
        if !state.fsm.is_playing() || dt <= 0.0 {
            return;
        }

        let control = if state.autoplay {
            Control::Ai
        } else {
            Control::Human(state.player_axis)
        };
        let winner = state.game.step(control, dt);

        react_to_events(
            &state.game.events,
            &state.anchors,
            &state.config.haptics,
            state.input.gamepad_connected(),
            &mut state.impacts,
            &mut state.outbox,
        );

        if let Some(winner) = winner {
            state.finish_match(winner);
        }
    }
}

struct CameraSystem;

impl System<SessionState> for CameraSystem {
    fn name(&self) -> &'static str {
        "camera"
    }

    fn update(&mut self, state: &mut SessionState, dt: f32) {
        let ball = state.game.ball_world();
        state.camera.update(ball, dt);
    }
}

struct LightingSystem;

impl System<SessionState> for LightingSystem {
    fn name(&self) -> &'static str {
        "lighting"
    }

    fn update(&mut self, state: &mut SessionState, dt: f32) {
        for impact in state.impacts.pending() {
            state.lights.react(impact);
        }
        let ball = state.game.ball_world();
        state.lights.update(ball, dt);
    }
}

struct ParticleSystem;

impl System<SessionState> for ParticleSystem {
    fn name(&self) -> &'static str {
        "particles"
    }

    fn update(&mut self, state: &mut SessionState, dt: f32) {
        for impact in state.impacts.pending() {
            state.particles.react(impact);
        }
        state.particles.update(dt);
    }
}

/// Last cosmetic system: every consumer has seen the pending impacts
struct ImpactFlush;

impl System<SessionState> for ImpactFlush {
    fn name(&self) -> &'static str {
        "impact_flush"
    }

    fn update(&mut self, state: &mut SessionState, _dt: f32) {
        state.impacts.clear();
    }
}

/// Everything the external renderer and UI need for one frame
#[derive(Debug, Clone)]
pub struct RenderView {
    pub tick: u64,
    pub state: FsmState,
    pub score: (u8, u8),
    pub ball: Vec3,
    pub paddles: [Vec3; 2],
    pub camera_eye: Vec3,
    pub view_proj: Mat4,
    pub lights: Vec<Light>,
    pub particles: Vec<ParticleView>,
    pub perf: Option<PerfSnapshot>,
}

pub struct Session {
    scheduler: TieredScheduler<SessionState>,
    state: SessionState,
}

impl Session {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut scheduler = TieredScheduler::new(&config.scheduler)?;
        let state = SessionState::new(config)?;

        scheduler
            .add_system(Tier::Critical, InputSystem)
            .add_system(Tier::Critical, SimulationSystem)
            .add_system(Tier::Critical, CameraSystem)
            .add_system(Tier::Cosmetic, LightingSystem)
            .add_system(Tier::Cosmetic, ParticleSystem)
            .add_system(Tier::Cosmetic, ImpactFlush);

        log::info!(
            "session ready: cosmetic systems every {} frames",
            scheduler.cosmetic_period()
        );
        Ok(Self { scheduler, state })
    }

    /// Queue an input event for the next frame
    pub fn push_input(&mut self, event: InputEvent) {
        self.state.queue.push(event);
    }

    /// Run one frame with the host's elapsed time in seconds
    pub fn frame(&mut self, dt: f32) -> Result<FrameReport> {
        self.scheduler.set_frozen(!self.state.fsm.is_playing());
        let report = self.scheduler.run_frame(&mut self.state, dt).map_err(|e| {
            log::warn!("frame skipped: {}", e);
            e
        })?;

        self.state.perf.record(
            dt,
            self.state.particles.len(),
            self.state.lights.lights().len(),
        );
        Ok(report)
    }

    /// Sounds, rumble and host commands queued since the last drain
    pub fn drain_outputs(&mut self) -> Vec<Output> {
        self.state.outbox.drain()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn game_state(&self) -> FsmState {
        self.state.fsm.state()
    }

    pub fn tick(&self) -> u64 {
        self.scheduler.tick()
    }

    pub fn is_frozen(&self) -> bool {
        self.scheduler.is_frozen()
    }

    /// Host-side "back to menu" for a paused or finished match
    ///
    /// Returns false when no match is paused or over.
    pub fn quit_to_menu(&mut self) -> bool {
        self.state.quit_to_menu()
    }

    pub fn set_autoplay(&mut self, autoplay: bool) {
        self.state.autoplay = autoplay;
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.state.camera.set_aspect(aspect);
    }

    pub fn render_view(&self) -> RenderView {
        let state = &self.state;
        RenderView {
            tick: self.scheduler.tick(),
            state: state.fsm.state(),
            score: (state.game.score.left, state.game.score.right),
            ball: state.game.ball_world(),
            paddles: [state.game.paddle_world(0), state.game.paddle_world(1)],
            camera_eye: state.camera.eye,
            view_proj: state.camera.view_proj(),
            lights: state.lights.lights().to_vec(),
            particles: state.particles.views(),
            perf: state.perf.last(),
        }
    }
}
