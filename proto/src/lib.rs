//! Presentation protocol for Pong
//!
//! Commands flow from the input layer into the simulation; frames flow out
//! to whatever renders them or plays sounds. Uses postcard for compact
//! binary serialization.

use postcard::{from_bytes, to_allocvec};

// ============================================================================
// Commands (presentation -> simulation)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Command {
    /// Paddle input: -1 = up, 0 = stop, 1 = down
    Move {
        side: u8, // 0 = left, 1 = right
        paddle_dir: i8,
    },

    /// Serve a new ball
    Launch,
}

// ============================================================================
// Frames (simulation -> presentation)
// ============================================================================

/// Sound/visual cues raised during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameEvents {
    pub wall_hit: bool,
    pub bat_hit: bool,
    /// Side that won the point this tick: 0 = left, 1 = right
    pub scored: Option<u8>,
}

/// Per-tick state snapshot
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    pub tick: u32,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_vx: f32,
    pub ball_vy: f32,
    pub paddle_left_y: f32,
    pub paddle_right_y: f32,
    pub score_left: u32,
    pub score_right: u32,
    pub in_play: bool,
    pub events: FrameEvents,
}

/// A recorded session
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Replay {
    pub seed: u64,
    pub dt: f32,
    pub frames: Vec<Frame>,
}

impl Replay {
    pub fn new(seed: u64, dt: f32) -> Self {
        Self {
            seed,
            dt,
            frames: Vec::new(),
        }
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Frames on which a point was scored
    pub fn points(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter().filter(|f| f.events.scored.is_some())
    }
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl Command {
    /// Serialize command to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize command from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl Frame {
    /// Serialize frame to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize frame from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl Replay {
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}
