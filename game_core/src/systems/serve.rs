use crate::{Ball, Config, Events, GameEvent, GameMap, GameRng, ServeState, Time};
use hecs::World;

/// Count down the serve delay and put the ball back in play
pub fn serve_tick(
    world: &mut World,
    time: &Time,
    map: &GameMap,
    config: &Config,
    serve: &mut ServeState,
    events: &mut Events,
    rng: &mut GameRng,
) {
    if !serve.pending {
        return;
    }

    serve.update(time.dt);
    if !serve.can_serve() {
        return;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.serve(map.ball_spawn(), config.ball_speed_initial, rng);
        events.push(GameEvent::Served {
            pos: ball.pos,
            vel: ball.vel,
        });
    }
    serve.finish();
}
