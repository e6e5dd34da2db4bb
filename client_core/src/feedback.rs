//! Outputs for the host: sound cues, gamepad rumble, window commands
//!
//! The spatial audio engine, the gamepad API and the window live outside this
//! crate. The session only queues requests; the host drains them each frame.

use game_core::{Events, GameEvent};
use glam::Vec3;

use crate::config::HapticsConfig;
use crate::simulation::to_world;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    PaddleHit,
    WallHit,
    Serve,
    PointWon,
    PointLost,
    MatchWon,
    MatchLost,
    Start,
    Pause,
    Resume,
}

/// A positioned sound request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioCue {
    pub sound: Sound,
    pub position: Vec3,
    pub volume: f32,
}

/// Dual-motor vibration request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rumble {
    pub strong: f32,
    pub weak: f32,
    pub duration_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    ToggleFullscreen,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Output {
    Audio(AudioCue),
    Rumble(Rumble),
    Host(HostCommand),
}

#[derive(Debug, Default)]
pub struct Outbox {
    outputs: Vec<Output>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, output: Output) {
        self.outputs.push(output);
    }

    pub fn sound(&mut self, sound: Sound, position: Vec3, volume: f32) {
        self.push(Output::Audio(AudioCue {
            sound,
            position,
            volume: volume.clamp(0.0, 1.0),
        }));
    }

    pub fn drain(&mut self) -> Vec<Output> {
        std::mem::take(&mut self.outputs)
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactKind {
    Paddle { player_id: u8 },
    Wall,
    Score { player_id: u8 },
    Serve,
}

/// A simulation event the cosmetic tier reacts to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    pub kind: ImpactKind,
    pub position: Vec3,
    /// 0..1, relative to the maximum ball speed
    pub strength: f32,
}

/// Impacts waiting for the next cosmetic run
#[derive(Debug, Default)]
pub struct ImpactLog {
    pending: Vec<Impact>,
}

impl ImpactLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, impact: Impact) {
        self.pending.push(impact);
    }

    pub fn pending(&self) -> &[Impact] {
        &self.pending
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

/// Where to place feedback that has no position of its own
#[derive(Debug, Clone, Copy)]
pub struct Anchors {
    /// Back wall of each side
    pub goals: [Vec3; 2],
    pub max_speed: f32,
}

/// Turn one step's simulation events into impacts, sounds and rumble
///
/// Rumble fires only for the player's own paddle hits and points conceded.
pub fn react_to_events(
    events: &Events,
    anchors: &Anchors,
    haptics: &HapticsConfig,
    gamepad_connected: bool,
    impacts: &mut ImpactLog,
    outbox: &mut Outbox,
) {
    let rumble = haptics.enabled && gamepad_connected;

    for event in events.iter() {
        match *event {
            GameEvent::PaddleHit {
                player_id,
                pos,
                speed,
            } => {
                let strength = (speed / anchors.max_speed).clamp(0.0, 1.0);
                let position = to_world(pos);
                impacts.push(Impact {
                    kind: ImpactKind::Paddle { player_id },
                    position,
                    strength,
                });
                outbox.sound(Sound::PaddleHit, position, 0.5 + 0.5 * strength);
                if rumble && player_id == 0 {
                    outbox.push(Output::Rumble(Rumble {
                        strong: haptics.paddle_strong * strength,
                        weak: haptics.paddle_weak,
                        duration_ms: haptics.paddle_ms,
                    }));
                }
            }
            GameEvent::WallHit { pos } => {
                let position = to_world(pos);
                impacts.push(Impact {
                    kind: ImpactKind::Wall,
                    position,
                    strength: 0.3,
                });
                outbox.sound(Sound::WallHit, position, 0.4);
            }
            GameEvent::Scored { player_id } => {
                // The ball went out past the loser's paddle
                let conceded_by = if player_id == 0 { 1 } else { 0 };
                let position = anchors.goals[conceded_by];
                impacts.push(Impact {
                    kind: ImpactKind::Score { player_id },
                    position,
                    strength: 1.0,
                });
                if player_id == 0 {
                    outbox.sound(Sound::PointWon, position, 1.0);
                } else {
                    outbox.sound(Sound::PointLost, position, 1.0);
                    if rumble {
                        outbox.push(Output::Rumble(Rumble {
                            strong: haptics.point_lost_strong,
                            weak: haptics.point_lost_strong,
                            duration_ms: haptics.point_lost_ms,
                        }));
                    }
                }
            }
            GameEvent::Served { pos, .. } => {
                let position = to_world(pos);
                impacts.push(Impact {
                    kind: ImpactKind::Serve,
                    position,
                    strength: 0.2,
                });
                outbox.sound(Sound::Serve, position, 0.6);
            }
        }
    }
}
