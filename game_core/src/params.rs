/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 32.0;
    pub const ARENA_HEIGHT: f32 = 24.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 0.8;
    pub const PADDLE_HEIGHT: f32 = 4.0;
    pub const PADDLE_SPEED: f32 = 18.0; // units per second
    pub const PADDLE_INSET: f32 = 1.5; // distance from the back wall

    // Ball
    pub const BALL_RADIUS: f32 = 0.5;
    pub const BALL_SPEED_INITIAL: f32 = 12.0;
    pub const BALL_SPEED_MAX: f32 = 24.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply speed on paddle hit
    pub const BALL_PADDLE_OVERLAP: f32 = 0.4;
    pub const MAX_DEFLECTION: f32 = 0.785; // ~45 degrees
    pub const PADDLE_INFLUENCE: f32 = 0.3;

    // Serve
    pub const SERVE_DELAY: f32 = 1.0; // seconds between a point and the next serve

    // AI
    pub const AI_DEADZONE: f32 = 0.3;
    pub const AI_RECENTER_DEADZONE: f32 = 0.5;
    pub const AI_LEAD: f32 = 0.3; // fraction of ball vy added to the predicted intercept
    pub const AI_SPEED_BASE: f32 = 0.7;
    pub const AI_SPEED_PER_POINT: f32 = 0.06;

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins

    // Physics
    pub const FIXED_DT: f32 = 0.0166; // ~60 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
