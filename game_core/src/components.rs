use glam::Vec2;

/// Which end of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign of the x velocity of a ball travelling toward this side
    pub fn incoming_sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Shared movable shape for paddles and the ball.
///
/// `vel` holds a direction per axis (unit steps, or the spin value the
/// ball picks up off a paddle); the distance covered in a tick is
/// `vel * speed * dt`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub size: Vec2,
    pub pos: Vec2,
    pub vel: Vec2,
    pub speed: f32,
}

impl Kinematics {
    pub fn new(size: Vec2, pos: Vec2, speed: f32) -> Self {
        Self {
            size,
            pos,
            vel: Vec2::ZERO,
            speed,
        }
    }

    pub fn with_vel(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Position after `dt` at the current velocity, unclamped
    pub fn candidate(&self, dt: f32) -> Vec2 {
        self.pos + self.vel * self.speed * dt
    }
}

/// Paddle component - a side's bat and its running score
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub score: u32,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self { side, score: 0 }
    }
}

/// Ball marker component. A fresh entity is spawned for every rally.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ball;

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
