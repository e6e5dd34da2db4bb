use game_core::{
    systems::{ai_axis, ai_difficulty}, setup_match, step, Ball, Config, Events, GameMap, GameRng,
    IntentQueue, MatchEntities, Paddle, Score, ServeState, Time,
};
use glam::{Vec2, Vec3};
use hecs::World;

/// Height of the ball's centre above the table, in world units
pub const BALL_HEIGHT: f32 = 0.5;

/// Map a point on the simulation plane into the 3D world (`y` up)
pub fn to_world(p: Vec2) -> Vec3 {
    Vec3::new(p.x, BALL_HEIGHT, p.y)
}

/// Who drives a paddle this step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Control {
    Human(f32),
    Ai,
}

/// A single local match against the AI
pub struct Match {
    pub world: World,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub intents: IntentQueue,
    pub rng: GameRng,
    pub serve: ServeState,
    entities: MatchEntities,
}

impl Match {
    pub fn new(config: Config, seed: u64) -> Self {
        let map = GameMap::from_config(&config);
        let mut world = World::new();
        let mut serve = ServeState::new();
        let entities = setup_match(&mut world, &map, &config, &mut serve);

        Self {
            world,
            time: Time::new(0.0, 0.0),
            map,
            config,
            score: Score::new(),
            events: Events::new(),
            intents: IntentQueue::new(),
            rng: GameRng::new(seed),
            serve,
            entities,
        }
    }

    /// Start over with fresh paddles, score and a pending serve
    ///
    /// The RNG is not reseeded so consecutive matches differ.
    pub fn reset(&mut self) {
        self.entities = setup_match(&mut self.world, &self.map, &self.config, &mut self.serve);
        self.score.reset();
        self.events.clear();
        self.intents.clear();
        self.time = Time::new(0.0, 0.0);
    }

    /// Advance the match by `dt` seconds
    ///
    /// The near paddle (player 0) follows `player`; the far paddle is always
    /// the AI. Returns the winner once someone reaches the winning score.
    pub fn step(&mut self, player: Control, dt: f32) -> Option<u8> {
        let left_axis = match player {
            Control::Human(axis) => axis,
            Control::Ai => {
                let skill = ai_difficulty(&self.config, &self.score, 0);
                ai_axis(&self.world, &self.map, &self.config, 0, skill)
            }
        };
        let skill = ai_difficulty(&self.config, &self.score, 1);
        let right_axis = ai_axis(&self.world, &self.map, &self.config, 1, skill);

        self.intents.push_input(0, left_axis);
        self.intents.push_input(1, right_axis);

        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.map,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.intents,
            &mut self.rng,
            &mut self.serve,
        );

        self.score.has_winner(self.config.win_score)
    }

    pub fn ball(&self) -> Ball {
        self.world
            .get::<&Ball>(self.entities.ball)
            .map(|b| *b)
            .unwrap_or_else(|_| Ball::new(self.map.ball_spawn(), Vec2::ZERO))
    }

    pub fn paddle_y(&self, player_id: u8) -> f32 {
        let entity = if player_id == 0 {
            self.entities.left
        } else {
            self.entities.right
        };
        self.world
            .get::<&Paddle>(entity)
            .map(|p| p.y)
            .unwrap_or(self.map.height / 2.0)
    }

    /// Paddle centre in world space
    pub fn paddle_world(&self, player_id: u8) -> Vec3 {
        to_world(Vec2::new(
            self.config.paddle_x(player_id),
            self.paddle_y(player_id),
        ))
    }

    pub fn ball_world(&self) -> Vec3 {
        to_world(self.ball().pos)
    }
}
