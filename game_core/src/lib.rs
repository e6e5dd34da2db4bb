pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run the deterministic Pong game simulation
///
/// `events` is cleared on entry and holds everything that happened across
/// all micro-steps of this call, in order.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    intents: &mut IntentQueue,
    rng: &mut GameRng,
    serve: &mut ServeState,
) {
    events.clear();

    // Clamp dt to prevent large jumps
    let clamped_dt = if time.dt.is_finite() {
        time.dt.clamp(0.0, Params::MAX_DT)
    } else {
        0.0
    };

    // Inputs apply once per call; intents persist across micro-steps
    ingest_inputs(world, intents);

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 1. Move paddles based on intents
        move_paddles(world, &step_time, map, config);

        // 2. Move ball
        move_ball(world, &step_time);

        // 3. Serve a parked ball once the delay runs out
        serve_tick(world, &step_time, map, config, serve, events, rng);

        // 4. Check collisions (ball vs paddles, walls)
        check_collisions(world, map, config, events);

        // 5. Check scoring (ball exited arena)
        check_scoring(world, map, score, events, serve, config);
    }

    // Update time
    time.now += clamped_dt;
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, player_id: u8, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(player_id, y), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Spawn both paddles at their start positions and a parked ball
///
/// The ball is served after `config.serve_delay` through `serve`.
pub fn setup_match(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    serve: &mut ServeState,
) -> MatchEntities {
    world.clear();
    let left = create_paddle(world, 0, map.paddle_spawn(0).y);
    let right = create_paddle(world, 1, map.paddle_spawn(1).y);
    let ball = create_ball(world, map.ball_spawn(), glam::Vec2::ZERO);
    serve.start_delay(config.serve_delay);
    MatchEntities { left, right, ball }
}

/// Entity handles created by [`setup_match`]
#[derive(Debug, Clone, Copy)]
pub struct MatchEntities {
    pub left: hecs::Entity,
    pub right: hecs::Entity,
    pub ball: hecs::Entity,
}
