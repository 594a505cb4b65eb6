/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 600.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 60.0;
    pub const PADDLE_SPEED: f32 = 300.0; // units per second
    pub const PADDLE_INSET: f32 = 20.0; // gap between wall and paddle face

    // Ball
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED: f32 = 240.0; // units per second
    pub const BALL_SPIN: f32 = 0.075; // y velocity per unit of off-center contact

    // Opponent AI
    pub const AI_REACTION_MIN: u32 = 4; // ticks between decisions
    pub const AI_REACTION_MAX: u32 = 12;
    pub const AI_REACTION_CEILING: u32 = 30; // cap for the focused (tripled) latency
    pub const AI_HIT_ZONE_MIN: u32 = 0;
    pub const AI_HIT_ZONE_MAX: u32 = 20;
    pub const AI_FOCUS_MIN_Y_SPEED: f32 = 1.0; // |vy| above this is worth predicting
    pub const AI_FOCUS_GAP: f32 = 30.0; // prediction stops this close to the AI's wall
    pub const AI_NEAR_DISTANCE: f32 = 120.0; // inside this, track the live ball
    pub const AI_PREDICTION_STEPS: u32 = 10_000;

    // Timing
    pub const FIXED_DT: f32 = 1.0 / 60.0; // ~60 Hz
}
