use glam::Vec2;
use serde::Deserialize;

use crate::{Arena, ConfigError, Params, Side};

/// Game configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub ball_spin: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            ball_spin: Params::BALL_SPIN,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    /// Get X position (left edge) for the paddle on `side`
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.arena_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Paddle spawn: vertically centered at its side's inset
    pub fn paddle_spawn(&self, side: Side) -> Vec2 {
        Vec2::new(
            self.paddle_x(side),
            (self.arena_height - self.paddle_height) / 2.0,
        )
    }

    /// Ball spawn: centered in the arena
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            (self.arena_width - self.ball_size) / 2.0,
            (self.arena_height - self.ball_size) / 2.0,
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("arena_width", self.arena_width)?;
        positive("arena_height", self.arena_height)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("paddle_speed", self.paddle_speed)?;
        positive("ball_size", self.ball_size)?;
        positive("ball_speed", self.ball_speed)?;

        if self.paddle_height > self.arena_height {
            return Err(ConfigError::DoesNotFit {
                field: "paddle_height",
            });
        }
        if self.paddle_inset < 0.0
            || 2.0 * (self.paddle_inset + self.paddle_width) > self.arena_width
        {
            return Err(ConfigError::DoesNotFit {
                field: "paddle_inset",
            });
        }
        if self.ball_size > self.arena_width || self.ball_size > self.arena_height {
            return Err(ConfigError::DoesNotFit { field: "ball_size" });
        }
        Ok(())
    }
}

/// Opponent AI tuning
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Reaction latency range in ticks, both ends inclusive
    pub reaction_min: u32,
    pub reaction_max: u32,
    /// Upper bound for the tripled latency while focused
    pub reaction_ceiling: u32,
    pub hit_zone_min: u32,
    pub hit_zone_max: u32,
    pub focus_min_y_speed: f32,
    pub focus_gap: f32,
    pub near_distance: f32,
    pub prediction_steps: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            reaction_min: Params::AI_REACTION_MIN,
            reaction_max: Params::AI_REACTION_MAX,
            reaction_ceiling: Params::AI_REACTION_CEILING,
            hit_zone_min: Params::AI_HIT_ZONE_MIN,
            hit_zone_max: Params::AI_HIT_ZONE_MAX,
            focus_min_y_speed: Params::AI_FOCUS_MIN_Y_SPEED,
            focus_gap: Params::AI_FOCUS_GAP,
            near_distance: Params::AI_NEAR_DISTANCE,
            prediction_steps: Params::AI_PREDICTION_STEPS,
        }
    }
}

impl AiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reaction_min > self.reaction_max {
            return Err(ConfigError::InvertedRange {
                field: "reaction",
                min: self.reaction_min as f32,
                max: self.reaction_max as f32,
            });
        }
        if self.hit_zone_min > self.hit_zone_max {
            return Err(ConfigError::InvertedRange {
                field: "hit_zone",
                min: self.hit_zone_min as f32,
                max: self.hit_zone_max as f32,
            });
        }
        if self.reaction_ceiling < self.reaction_max {
            return Err(ConfigError::InvertedRange {
                field: "reaction_ceiling",
                min: self.reaction_max as f32,
                max: self.reaction_ceiling as f32,
            });
        }
        if self.prediction_steps == 0 {
            return Err(ConfigError::NonPositive {
                field: "prediction_steps",
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field })
    }
}
