use crate::{Ball, Config, Events, GameEvent, GameMap, Score, ServeState};
use hecs::World;

/// Check if ball left the arena (scoring)
///
/// The ball is parked at the centre and the serve delay starts.
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    score: &mut Score,
    events: &mut Events,
    serve: &mut ServeState,
    config: &Config,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.x < 0.0 {
            // Past the player's paddle
            score.increment_right();
            1
        } else if ball.pos.x > map.width {
            score.increment_left();
            0
        } else {
            continue;
        };

        log::debug!("player {} scored ({} - {})", scorer, score.left, score.right);
        events.push(GameEvent::Scored { player_id: scorer });
        ball.park(map.ball_spawn());
        serve.start_delay(config.serve_delay);
    }
}
