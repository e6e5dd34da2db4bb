//! Client core for 3D Pong
//!
//! Everything between the host (window, canvas, audio device) and the
//! simulation in `game_core`: input mapping, the game state machine, a
//! tiered frame scheduler and the cosmetic layers (camera, lights,
//! particles). Rendering and audio playback stay with the host, which reads
//! `Session::render_view` and drains `Session::drain_outputs` each frame.

pub mod camera;
pub mod config;
pub mod error;
pub mod feedback;
pub mod fsm;
pub mod input;
pub mod lighting;
pub mod logging;
pub mod particles;
pub mod perf;
pub mod scheduler;
pub mod session;
pub mod simulation;

pub use camera::FollowCamera;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use feedback::{AudioCue, HostCommand, Output, Rumble, Sound};
pub use fsm::{FsmState, GameAction, GameFsm};
pub use input::{GamepadAxis, GamepadButton, InputEvent, Key};
pub use logging::{init_logging, LoggingConfig};
pub use scheduler::{FnSystem, FrameReport, System, Tier, TieredScheduler};
pub use session::{RenderView, Session};
pub use simulation::{Control, Match};
