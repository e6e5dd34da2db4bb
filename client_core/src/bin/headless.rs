//! Headless AI-vs-AI match.
//! Usage: pong3d-headless [frames] [config.json]

use std::env;
use std::process::ExitCode;

use client_core::{
    init_logging, ClientConfig, FsmState, InputEvent, Key, LoggingConfig, Output, Session,
};

const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_FRAMES: u64 = 60 * 60 * 5;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let frames = match args.first().map(|a| a.parse::<u64>()) {
        None => DEFAULT_FRAMES,
        Some(Ok(frames)) => frames,
        Some(Err(_)) => {
            eprintln!("usage: pong3d-headless [frames] [config.json]");
            return ExitCode::FAILURE;
        }
    };

    let config = match args.get(1) {
        Some(path) => match ClientConfig::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[headless] {e}");
                return ExitCode::FAILURE;
            }
        },
        None => ClientConfig::default(),
    };

    init_logging(LoggingConfig {
        env_filter: config.log_filter.clone(),
        ..LoggingConfig::default()
    });

    let mut session = match Session::new(config) {
        Ok(session) => session,
        Err(e) => {
            log::error!("failed to start session: {}", e);
            return ExitCode::FAILURE;
        }
    };
    session.set_autoplay(true);
    session.push_input(InputEvent::Key {
        key: Key::Space,
        pressed: true,
    });

    let mut cosmetic_frames = 0u64;
    for _ in 0..frames {
        let report = match session.frame(FRAME_DT) {
            Ok(report) => report,
            Err(e) => {
                log::error!("frame failed: {}", e);
                return ExitCode::FAILURE;
            }
        };
        if report.ran_cosmetic() {
            cosmetic_frames += 1;
        }

        for output in session.drain_outputs() {
            match output {
                Output::Audio(cue) => log::debug!(
                    "tick {}: {:?} at ({:.1}, {:.1})",
                    report.tick,
                    cue.sound,
                    cue.position.x,
                    cue.position.z
                ),
                other => log::debug!("tick {}: {:?}", report.tick, other),
            }
        }

        if matches!(session.game_state(), FsmState::Win | FsmState::Death) {
            break;
        }
    }

    let view = session.render_view();
    log::info!(
        "finished after {} frames ({} cosmetic): {:?}, score {} - {}",
        view.tick,
        cosmetic_frames,
        view.state,
        view.score.0,
        view.score.1
    );
    ExitCode::SUCCESS
}
