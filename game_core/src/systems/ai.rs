use crate::{Ball, Config, GameMap, Paddle, Params, Score};
use hecs::World;

/// AI speed factor for the current score
///
/// Starts at `ai_speed_base` and gains `ai_speed_per_point` for every point
/// the opponent has scored, capped at full paddle speed.
pub fn ai_speed_factor(config: &Config, opponent_points: u8) -> f32 {
    (config.ai_speed_base + config.ai_speed_per_point * opponent_points as f32).clamp(0.0, 1.0)
}

/// Difficulty for the paddle of `player_id` given the match score
pub fn ai_difficulty(config: &Config, score: &Score, player_id: u8) -> f32 {
    let opponent_points = if player_id == 0 {
        score.right
    } else {
        score.left
    };
    ai_speed_factor(config, opponent_points)
}

/// Calculate an AI movement axis for the paddle of `player_id`
///
/// Strategy:
/// 1. If the ball is moving towards us, predict where it crosses our line,
///    folding in wall bounces, and lead slightly in the direction of travel.
/// 2. If the ball is moving away (or parked), return to centre to cover the
///    most area.
///
/// The result is scaled by `speed_factor` so weaker AIs move slower.
pub fn ai_axis(
    world: &World,
    map: &GameMap,
    config: &Config,
    player_id: u8,
    speed_factor: f32,
) -> f32 {
    let ball_data = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| (ball.pos, ball.vel));
    let paddle_y = world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.player_id == player_id)
        .map(|(_e, p)| p.y);

    let (Some((ball_pos, ball_vel)), Some(paddle_y)) = (ball_data, paddle_y) else {
        return 0.0;
    };

    let paddle_x = config.paddle_x(player_id);
    let approaching = if player_id == 0 {
        ball_vel.x < 0.0
    } else {
        ball_vel.x > 0.0
    };

    let dir = if approaching {
        let time_to_reach = ((paddle_x - ball_pos.x) / ball_vel.x).max(0.0);
        let raw_y = ball_pos.y + ball_vel.y * time_to_reach;
        let predicted_y = fold_into(raw_y, config.ball_radius, map.height - config.ball_radius);
        let target_y = predicted_y + ball_vel.y * Params::AI_LEAD;
        steer(target_y - paddle_y, Params::AI_DEADZONE)
    } else {
        steer(map.center().y - paddle_y, Params::AI_RECENTER_DEADZONE)
    };

    dir * speed_factor.clamp(0.0, 1.0)
}

fn steer(diff: f32, deadzone: f32) -> f32 {
    if diff > deadzone {
        1.0
    } else if diff < -deadzone {
        -1.0
    } else {
        0.0
    }
}

/// Reflect `y` back into `[lo, hi]` as if it bounced off both ends
fn fold_into(y: f32, lo: f32, hi: f32) -> f32 {
    let span = hi - lo;
    if span <= 0.0 {
        return lo;
    }
    let t = (y - lo).rem_euclid(2.0 * span);
    if t > span {
        hi - (t - span)
    } else {
        lo + t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    #[test]
    fn test_fold_into() {
        assert_eq!(fold_into(5.0, 0.0, 10.0), 5.0);
        assert_eq!(fold_into(12.0, 0.0, 10.0), 8.0);
        assert_eq!(fold_into(-3.0, 0.0, 10.0), 3.0);
        assert_eq!(fold_into(23.0, 0.0, 10.0), 3.0);
    }

    #[test]
    fn test_ai_tracks_approaching_ball() {
        let mut world = World::new();
        let config = Config::new();
        let map = GameMap::new();
        create_paddle(&mut world, 1, 12.0);
        create_ball(&mut world, Vec2::new(16.0, 4.0), Vec2::new(10.0, 0.0));

        let axis = ai_axis(&world, &map, &config, 1, 1.0);

        assert_eq!(axis, -1.0, "Ball will arrive low, move down the axis");
    }

    #[test]
    fn test_ai_recenters_when_ball_moves_away() {
        let mut world = World::new();
        let config = Config::new();
        let map = GameMap::new();
        create_paddle(&mut world, 1, 4.0);
        create_ball(&mut world, Vec2::new(16.0, 4.0), Vec2::new(-10.0, 0.0));

        assert_eq!(ai_axis(&world, &map, &config, 1, 1.0), 1.0);
    }

    #[test]
    fn test_ai_holds_inside_deadzone() {
        let mut world = World::new();
        let config = Config::new();
        let map = GameMap::new();
        create_paddle(&mut world, 0, 12.0);
        create_ball(&mut world, Vec2::new(16.0, 12.0), Vec2::new(-10.0, 0.0));

        assert_eq!(ai_axis(&world, &map, &config, 0, 1.0), 0.0);
    }

    #[test]
    fn test_speed_factor_scales_axis() {
        let mut world = World::new();
        let config = Config::new();
        let map = GameMap::new();
        create_paddle(&mut world, 1, 20.0);
        create_ball(&mut world, Vec2::new(16.0, 4.0), Vec2::new(10.0, 0.0));

        assert_eq!(ai_axis(&world, &map, &config, 1, 0.5), -0.5);
    }

    #[test]
    fn test_difficulty_curve_rises_and_caps() {
        let config = Config::new();
        let mut score = Score::new();
        let easy = ai_difficulty(&config, &score, 1);
        score.left = 3;
        let harder = ai_difficulty(&config, &score, 1);
        assert!(harder > easy);
        assert_eq!(ai_speed_factor(&config, 200), 1.0);
    }

    #[test]
    fn test_no_ball_no_motion() {
        let mut world = World::new();
        create_paddle(&mut world, 1, 3.0);
        assert_eq!(ai_axis(&world, &GameMap::new(), &Config::new(), 1, 1.0), 0.0);
    }
}
