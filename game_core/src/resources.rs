use crate::Side;

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
            dt: crate::Params::FIXED_DT,
            now: 0.0,
        }
    }
}

/// Random number generator, passed explicitly so every run is reproducible
/// from its seed
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

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,  // ball left through the right edge ("point lost" for the right paddle)
    pub right_scored: bool, // ball left through the left edge ("point" for the right paddle)
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn scored(&self) -> Option<Side> {
        if self.left_scored {
            Some(Side::Left)
        } else if self.right_scored {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Input intent from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Paddle direction: -1 = up, 0 = stop, 1 = down
    Move { side: Side, dir: i8 },
    /// Serve the ball; ignored while a rally is in play
    Launch,
}

/// Inputs queued between ticks
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<Input>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push(&mut self, input: Input) {
        self.inputs.push(input);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, Input> {
        self.inputs.drain(..)
    }
}

/// Whether a ball is currently in play
#[derive(Debug, Clone, Copy, Default)]
pub struct Rally {
    pub in_play: bool,
    pub count: u32, // rallies launched this session
}
