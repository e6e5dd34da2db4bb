use crate::{Ball, Config, Events, GameEvent, GameMap, Paddle, PaddleIntent, Params};
use glam::Vec2;
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    // Copy the ball out so paddle queries don't overlap a mutable borrow
    let ball_data = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| (ball.pos, ball.vel));

    let (mut ball_pos, mut ball_vel) = match ball_data {
        Some(data) => data,
        None => return, // No ball in world
    };

    let mut changed = bounce_off_walls(&mut ball_pos, &mut ball_vel, map, config, events);

    let paddles: Vec<(u8, f32, f32)> = world
        .query::<(&Paddle, &PaddleIntent)>()
        .iter()
        .map(|(_e, (p, intent))| (p.player_id, p.y, intent.axis))
        .collect();

    for (player_id, paddle_y, paddle_axis) in paddles {
        if bounce_off_paddle(
            &mut ball_pos,
            &mut ball_vel,
            player_id,
            paddle_y,
            paddle_axis,
            config,
        ) {
            events.push(GameEvent::PaddleHit {
                player_id,
                pos: ball_pos,
                speed: ball_vel.length(),
            });
            changed = true;
            break;
        }
    }

    if changed {
        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            ball.pos = ball_pos;
            ball.vel = ball_vel;
        }
    }
}

fn bounce_off_walls(
    pos: &mut Vec2,
    vel: &mut Vec2,
    map: &GameMap,
    config: &Config,
    events: &mut Events,
) -> bool {
    let radius = config.ball_radius;
    let hit_low = pos.y - radius <= 0.0 && vel.y < 0.0;
    let hit_high = pos.y + radius >= map.height && vel.y > 0.0;
    if !(hit_low || hit_high) {
        return false;
    }

    vel.y = -vel.y;
    // Clamp position to prevent sticking in the wall
    pos.y = pos.y.clamp(radius, map.height - radius);
    events.push(GameEvent::WallHit { pos: *pos });
    true
}

fn bounce_off_paddle(
    pos: &mut Vec2,
    vel: &mut Vec2,
    player_id: u8,
    paddle_y: f32,
    paddle_axis: f32,
    config: &Config,
) -> bool {
    let paddle_x = config.paddle_x(player_id);
    let paddle_half_width = config.paddle_width / 2.0;
    let paddle_half_height = config.paddle_height / 2.0;
    let reach_x = paddle_half_width + config.ball_radius - config.ball_paddle_overlap;

    let dx = (pos.x - paddle_x).abs();
    let dy = (pos.y - paddle_y).abs();
    if dx >= reach_x || dy >= paddle_half_height + config.ball_radius {
        return false;
    }

    // Only bounce when travelling toward the paddle
    let toward = (player_id == 0 && vel.x < 0.0) || (player_id != 0 && vel.x > 0.0);
    if !toward {
        return false;
    }

    // Relative hit position from -1 (low edge) to 1 (high edge)
    let hit_relative_y = ((pos.y - paddle_y) / paddle_half_height).clamp(-1.0, 1.0);

    let new_speed = (vel.length() * config.ball_speed_increase).min(config.ball_speed_max);
    let y_deflection = hit_relative_y * Params::MAX_DEFLECTION * new_speed;
    let paddle_influence = paddle_axis * config.paddle_speed * Params::PADDLE_INFLUENCE;

    // Always away from the paddle that was hit
    let new_vx = if player_id == 0 { new_speed } else { -new_speed };
    *vel = Vec2::new(new_vx, y_deflection + paddle_influence).normalize() * new_speed;

    // Push the ball out to the overlap point
    pos.x = if player_id == 0 {
        paddle_x + reach_x
    } else {
        paddle_x - reach_x
    };
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};

    fn setup_world() -> (hecs::World, Config, GameMap, Events) {
        let world = hecs::World::new();
        let config = Config::new();
        let map = GameMap::new();
        let events = Events::new();
        (world, config, map, events)
    }

    fn ball(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .expect("ball exists")
    }

    #[test]
    fn test_ball_bounces_off_low_wall() {
        let (mut world, config, map, mut events) = setup_world();
        let ball_vel = Vec2::new(8.0, -4.0);
        create_ball(&mut world, Vec2::new(16.0, config.ball_radius - 0.1), ball_vel);

        check_collisions(&mut world, &map, &config, &mut events);

        let ball = ball(&world);
        assert!(ball.vel.y > 0.0, "Ball should bounce back into the arena");
        assert_eq!(ball.vel.x, ball_vel.x, "X velocity should be unchanged");
        assert!(ball.pos.y >= config.ball_radius, "Pushed out of wall");
        assert!(events.ball_hit_wall());
    }

    #[test]
    fn test_ball_bounces_off_high_wall() {
        let (mut world, config, map, mut events) = setup_world();
        create_ball(
            &mut world,
            Vec2::new(16.0, map.height - config.ball_radius + 0.1),
            Vec2::new(8.0, 4.0),
        );

        check_collisions(&mut world, &map, &config, &mut events);

        let ball = ball(&world);
        assert!(ball.vel.y < 0.0);
        assert!(ball.pos.y <= map.height - config.ball_radius);
        assert!(events.ball_hit_wall());
    }

    #[test]
    fn test_wall_contact_moving_inward_is_ignored() {
        let (mut world, config, map, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(16.0, 0.2), Vec2::new(8.0, 4.0));

        check_collisions(&mut world, &map, &config, &mut events);

        assert!(ball(&world).vel.y > 0.0, "No double reflection");
        assert!(!events.ball_hit_wall());
    }

    #[test]
    fn test_ball_collides_with_player_paddle() {
        let (mut world, config, map, mut events) = setup_world();
        let paddle_x = config.paddle_x(0);
        create_paddle(&mut world, 0, 12.0);
        let ball_pos = Vec2::new(
            paddle_x + config.paddle_width / 2.0 - config.ball_radius * 0.5,
            12.0,
        );
        create_ball(&mut world, ball_pos, Vec2::new(-8.0, 0.0));

        check_collisions(&mut world, &map, &config, &mut events);

        let ball = ball(&world);
        assert!(ball.vel.x > 0.0, "Ball should head back toward the AI");
        assert!(ball.pos.x > paddle_x, "Ball should be pushed out of paddle");
        assert!(matches!(
            events.list[0],
            GameEvent::PaddleHit { player_id: 0, .. }
        ));
    }

    #[test]
    fn test_ball_collides_with_ai_paddle() {
        let (mut world, config, map, mut events) = setup_world();
        let paddle_x = config.paddle_x(1);
        create_paddle(&mut world, 1, 12.0);
        let ball_pos = Vec2::new(
            paddle_x - config.paddle_width / 2.0 + config.ball_radius * 0.5,
            12.0,
        );
        create_ball(&mut world, ball_pos, Vec2::new(8.0, 0.0));

        check_collisions(&mut world, &map, &config, &mut events);

        let ball = ball(&world);
        assert!(ball.vel.x < 0.0);
        assert!(ball.pos.x < paddle_x);
        assert!(events.ball_hit_paddle());
    }

    #[test]
    fn test_ball_speed_increases_and_caps() {
        let (mut world, config, map, mut events) = setup_world();
        let paddle_x = config.paddle_x(0);
        create_paddle(&mut world, 0, 12.0);
        let ball_pos = Vec2::new(paddle_x + 0.2, 12.0);
        create_ball(&mut world, ball_pos, Vec2::new(-8.0, 0.0));

        check_collisions(&mut world, &map, &config, &mut events);
        let expected = 8.0 * config.ball_speed_increase;
        assert!((ball(&world).vel.length() - expected).abs() < 0.01);

        world.clear();
        create_paddle(&mut world, 0, 12.0);
        create_ball(
            &mut world,
            ball_pos,
            Vec2::new(-(config.ball_speed_max - 0.1), 0.0),
        );
        check_collisions(&mut world, &map, &config, &mut events);
        assert!(ball(&world).vel.length() <= config.ball_speed_max + 1e-4);
    }

    #[test]
    fn test_ball_trajectory_affected_by_hit_position() {
        let (mut world, config, map, mut events) = setup_world();
        let paddle_x = config.paddle_x(0);
        let half_height = config.paddle_height / 2.0;
        create_paddle(&mut world, 0, 12.0);
        create_ball(
            &mut world,
            Vec2::new(paddle_x + 0.2, 12.0 - half_height + 0.1),
            Vec2::new(-8.0, 0.0),
        );

        check_collisions(&mut world, &map, &config, &mut events);
        assert!(ball(&world).vel.y < 0.0, "Low-edge hit deflects low");

        world.clear();
        create_paddle(&mut world, 0, 12.0);
        create_ball(
            &mut world,
            Vec2::new(paddle_x + 0.2, 12.0 + half_height - 0.1),
            Vec2::new(-8.0, 0.0),
        );

        check_collisions(&mut world, &map, &config, &mut events);
        assert!(ball(&world).vel.y > 0.0, "High-edge hit deflects high");
    }

    #[test]
    fn test_moving_paddle_adds_spin() {
        let (mut world, config, map, mut events) = setup_world();
        let paddle_x = config.paddle_x(0);
        let paddle = create_paddle(&mut world, 0, 12.0);
        world.get::<&mut PaddleIntent>(paddle).unwrap().set(1.0);
        create_ball(&mut world, Vec2::new(paddle_x + 0.2, 12.0), Vec2::new(-8.0, 0.0));

        check_collisions(&mut world, &map, &config, &mut events);

        assert!(ball(&world).vel.y > 0.0, "Centre hit picks up paddle motion");
    }

    #[test]
    fn test_ball_does_not_bounce_when_moving_away_from_paddle() {
        let (mut world, config, map, mut events) = setup_world();
        let paddle_x = config.paddle_x(0);
        create_paddle(&mut world, 0, 12.0);
        create_ball(&mut world, Vec2::new(paddle_x + 0.2, 12.0), Vec2::new(8.0, 0.0));

        check_collisions(&mut world, &map, &config, &mut events);

        assert_eq!(ball(&world).vel.x, 8.0);
        assert!(!events.ball_hit_paddle());
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, 0, 12.0);

        check_collisions(&mut world, &map, &config, &mut events);

        assert!(events.is_empty());
    }

    #[test]
    fn test_ball_paddle_overlap() {
        let (mut world, config, map, mut events) = setup_world();
        let paddle_x = config.paddle_x(0);
        create_paddle(&mut world, 0, 12.0);

        let reach = config.paddle_width / 2.0 + config.ball_radius - config.ball_paddle_overlap;
        create_ball(
            &mut world,
            Vec2::new(paddle_x + reach + 0.01, 12.0),
            Vec2::new(-8.0, 0.0),
        );

        check_collisions(&mut world, &map, &config, &mut events);
        assert!(!events.ball_hit_paddle(), "Just outside the overlap threshold");

        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.pos.x -= 0.02;
        }

        check_collisions(&mut world, &map, &config, &mut events);
        assert!(events.ball_hit_paddle());
        let expected_x = paddle_x + reach;
        assert!(
            (ball(&world).pos.x - expected_x).abs() < 0.001,
            "Ball should be pushed out to the overlap point"
        );
    }
}
