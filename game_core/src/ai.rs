//! Choppy opponent AI.
//!
//! The controller only re-decides every `reaction_time` ticks and tracks the
//! ball loosely within a randomly drifting hit zone. When a fast shot comes
//! toward its side it switches to a focused mode that aims at a predicted
//! intercept instead of the live ball.

use rand::Rng;
use tracing::debug;

use crate::physics::predict_intercept;
use crate::{AiConfig, Arena, ConfigError, GameRng, Kinematics, Side};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AiState {
    Tracking,
    /// Predicting; `intercept` is held until the next unfocus
    Focused { intercept: Kinematics },
}

#[derive(Debug, Clone)]
pub struct OpponentAi {
    side: Side,
    config: AiConfig,
    state: AiState,
    frames_since_decision: u32,
    base_reaction_time: u32,
    reaction_time: u32,
    hit_zone: u32,
}

impl OpponentAi {
    pub fn new(side: Side, config: AiConfig, rng: &mut GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut ai = Self {
            side,
            config,
            state: AiState::Tracking,
            frames_since_decision: 0,
            base_reaction_time: 0,
            reaction_time: 0,
            hit_zone: 0,
        };
        ai.set_reaction_time(rng);
        ai.roll_hit_zone(rng);
        Ok(ai)
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn state(&self) -> AiState {
        self.state
    }

    pub fn is_focused(&self) -> bool {
        matches!(self.state, AiState::Focused { .. })
    }

    pub fn intercept(&self) -> Option<Kinematics> {
        match self.state {
            AiState::Focused { intercept } => Some(intercept),
            AiState::Tracking => None,
        }
    }

    pub fn reaction_time(&self) -> u32 {
        self.reaction_time
    }

    pub fn hit_zone(&self) -> u32 {
        self.hit_zone
    }

    pub fn frames_since_decision(&self) -> u32 {
        self.frames_since_decision
    }

    /// Roll a new reaction latency and restart the wait
    pub fn set_reaction_time(&mut self, rng: &mut GameRng) {
        self.base_reaction_time = rng
            .0
            .gen_range(self.config.reaction_min..=self.config.reaction_max);
        self.reaction_time = self.base_reaction_time;
        self.frames_since_decision = 0;
    }

    /// Rally start: drop any prediction and re-roll latency and hit zone
    pub fn launch_reset(&mut self, rng: &mut GameRng) {
        self.unfocus();
        self.set_reaction_time(rng);
        self.roll_hit_zone(rng);
    }

    /// Leave focused mode, discarding the intercept and the slowed latency
    pub fn unfocus(&mut self) {
        if self.is_focused() {
            debug!(side = ?self.side, "ai unfocused");
        }
        self.state = AiState::Tracking;
        self.reaction_time = self.base_reaction_time;
    }

    /// One tick of the controller. Returns the paddle direction command:
    /// -1 up, 0 hold, 1 down.
    pub fn decide(
        &mut self,
        paddle: &Kinematics,
        ball: &Kinematics,
        arena: &Arena,
        dt: f32,
        rng: &mut GameRng,
    ) -> i8 {
        self.update_focus(ball, arena, dt);

        self.frames_since_decision += 1;
        if self.frames_since_decision < self.reaction_time {
            return 0;
        }
        self.frames_since_decision = 0;

        let target = self.target(paddle, ball);
        let command = evaluate_move(paddle, &target, self.hit_zone as f32);
        self.drift_hit_zone(rng);
        command
    }

    /// What the paddle is currently lining up with: the predicted intercept
    /// while focused and the ball is still far off, otherwise the live ball.
    pub fn target(&self, paddle: &Kinematics, ball: &Kinematics) -> Kinematics {
        match self.state {
            AiState::Focused { intercept }
                if (ball.center().x - paddle.center().x).abs() > self.config.near_distance =>
            {
                intercept
            }
            _ => *ball,
        }
    }

    fn update_focus(&mut self, ball: &Kinematics, arena: &Arena, dt: f32) {
        let heading = ball.vel.x * self.side.incoming_sign();
        match self.state {
            AiState::Tracking => {
                if heading > 0.0 && ball.vel.y.abs() > self.config.focus_min_y_speed {
                    self.focus(ball, arena, dt);
                }
            }
            AiState::Focused { .. } => {
                if heading < 0.0 {
                    self.unfocus();
                }
            }
        }
    }

    fn focus(&mut self, ball: &Kinematics, arena: &Arena, dt: f32) {
        self.reaction_time = self
            .base_reaction_time
            .saturating_mul(3)
            .min(self.config.reaction_ceiling);

        let goal_x = match self.side {
            Side::Left => self.config.focus_gap,
            Side::Right => arena.width - self.config.focus_gap - ball.size.x,
        };
        let intercept = predict_intercept(
            ball,
            arena,
            self.side,
            goal_x,
            dt,
            self.config.prediction_steps,
        );
        debug!(
            side = ?self.side,
            x = intercept.pos.x,
            y = intercept.pos.y,
            reaction_time = self.reaction_time,
            "ai focused"
        );
        self.state = AiState::Focused { intercept };
    }

    fn roll_hit_zone(&mut self, rng: &mut GameRng) {
        self.hit_zone = rng
            .0
            .gen_range(self.config.hit_zone_min..=self.config.hit_zone_max);
    }

    /// Re-roll the hit zone when a fresh draw lands on the current value
    fn drift_hit_zone(&mut self, rng: &mut GameRng) {
        let draw = rng
            .0
            .gen_range(self.config.hit_zone_min..=self.config.hit_zone_max);
        if draw == self.hit_zone {
            self.roll_hit_zone(rng);
        }
    }
}

/// Compare paddle and target centers, allowing `hit_zone` of slack
fn evaluate_move(paddle: &Kinematics, target: &Kinematics, hit_zone: f32) -> i8 {
    let paddle_mid = paddle.center().y;
    let target_mid = target.center().y;
    if target.vel.y >= 0.0 && paddle_mid + hit_zone < target_mid {
        1
    } else if target.vel.y <= 0.0 && paddle_mid - hit_zone > target_mid {
        -1
    } else {
        0
    }
}
