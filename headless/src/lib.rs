//! Headless match runner
//!
//! Drives a [`game_core::Match`] without rendering or frame pacing: the
//! left paddle is always the opponent AI, the right paddle is a second AI,
//! a scripted chaser, or idle. Every rally is served automatically.

pub mod runner;
pub mod settings;

pub use runner::*;
pub use settings::*;
