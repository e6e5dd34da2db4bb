use glam::Vec2;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Player score
    pub right: u8, // AI score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left = self.left.saturating_add(1);
    }

    pub fn increment_right(&mut self) {
        self.right = self.right.saturating_add(1);
    }

    pub fn has_winner(&self, win_score: u8) -> Option<u8> {
        if self.left >= win_score {
            Some(0) // Player wins
        } else if self.right >= win_score {
            Some(1) // AI wins
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Something that happened during a `step` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    PaddleHit { player_id: u8, pos: Vec2, speed: f32 },
    WallHit { pos: Vec2 },
    Scored { player_id: u8 },
    Served { pos: Vec2, vel: Vec2 },
}

/// Events that occurred during one `step` call, in order
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub list: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.list.push(event);
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.list.iter()
    }

    pub fn ball_hit_paddle(&self) -> bool {
        self.list
            .iter()
            .any(|e| matches!(e, GameEvent::PaddleHit { .. }))
    }

    pub fn ball_hit_wall(&self) -> bool {
        self.list.iter().any(|e| matches!(e, GameEvent::WallHit { .. }))
    }

    pub fn scored(&self, player_id: u8) -> bool {
        self.list
            .iter()
            .any(|e| matches!(e, GameEvent::Scored { player_id: p } if *p == player_id))
    }
}

/// Serve delay after a point is scored
#[derive(Debug, Clone, Copy, Default)]
pub struct ServeState {
    pub timer: f32,    // Time remaining before the ball is served (0 = ready)
    pub pending: bool, // Ball is parked waiting for a serve
}

impl ServeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_delay(&mut self, delay: f32) {
        self.timer = delay.max(0.0);
        self.pending = true;
    }

    pub fn update(&mut self, dt: f32) {
        if self.timer > 0.0 {
            self.timer = (self.timer - dt).max(0.0);
        }
    }

    pub fn can_serve(&self) -> bool {
        self.pending && self.timer <= 0.0
    }

    pub fn finish(&mut self) {
        self.pending = false;
        self.timer = 0.0;
    }
}

/// Pending paddle inputs for the next step
#[derive(Debug, Clone, Default)]
pub struct IntentQueue {
    pub inputs: Vec<(u8, f32)>, // (player_id, axis)
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push_input(&mut self, player_id: u8, axis: f32) {
        self.inputs.push((player_id, axis));
    }

    pub fn pop_inputs(&mut self) -> Vec<(u8, f32)> {
        std::mem::take(&mut self.inputs)
    }
}
