//! Kinematic integration, ball collisions and dead-ball detection.
//!
//! Everything here works on plain [`Kinematics`] records so the systems,
//! the opponent AI and the tests can share it without touching the world.

use glam::Vec2;

use crate::{Arena, Kinematics, Side};

/// Collisions resolved while advancing the ball one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contact {
    pub wall_hit: bool,
    pub bat_hit: bool,
}

/// Result of the dead-ball check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InPlay,
    /// Ball left through the right edge
    LeftScored,
    /// Ball left through the left edge
    RightScored,
}

impl Outcome {
    pub fn scorer(self) -> Option<Side> {
        match self {
            Outcome::InPlay => None,
            Outcome::LeftScored => Some(Side::Left),
            Outcome::RightScored => Some(Side::Right),
        }
    }
}

/// Integrate a paddle-like body and clamp it to the arena.
///
/// Velocity is left untouched, so a body pressed against a wall stays there
/// until its direction changes.
pub fn advance(body: &mut Kinematics, arena: &Arena, dt: f32) -> Vec2 {
    body.pos = arena.clamp(body.candidate(dt), body.size);
    body.pos
}

/// Integrate the ball, resolving paddle and wall contact against the
/// candidate position before it is committed.
///
/// Only one paddle can be hit per tick; the right paddle wins if both spans
/// overlap the candidate. Horizontal position is never clamped so the ball
/// can leave the arena and go dead.
pub fn advance_ball(
    ball: &mut Kinematics,
    left: &Kinematics,
    right: &Kinematics,
    arena: &Arena,
    spin: f32,
    dt: f32,
) -> Contact {
    let mut contact = Contact::default();

    let candidate = ball.candidate(dt);
    if hits_right_paddle(candidate, ball.size, right) {
        ball.vel.x = -1.0;
        ball.vel.y = spin_off(ball, right, spin);
        contact.bat_hit = true;
    } else if hits_left_paddle(candidate, left) {
        ball.vel.x = 1.0;
        ball.vel.y = spin_off(ball, left, spin);
        contact.bat_hit = true;
    }

    // Wall test uses the post-paddle velocity so spin that would carry the
    // ball out of the arena is reflected in the same tick.
    let max_y = arena.max_y(ball.size);
    let candidate_y = ball.candidate(dt).y;
    if candidate_y < 0.0 || candidate_y > max_y {
        ball.vel.y = -ball.vel.y;
        contact.wall_hit = true;
    }

    let next = ball.candidate(dt);
    ball.pos = Vec2::new(next.x, next.y.clamp(0.0, max_y));
    contact
}

/// Dead-ball check. Crossing the right edge scores for the left paddle,
/// crossing the left edge scores for the right paddle.
pub fn dead_ball(ball: &Kinematics, arena: &Arena) -> Outcome {
    if ball.pos.x > arena.width {
        Outcome::LeftScored
    } else if ball.pos.x < 0.0 {
        Outcome::RightScored
    } else {
        Outcome::InPlay
    }
}

/// Forward-simulate a detached copy of the ball toward `toward` until its
/// x reaches `goal_x`, bouncing off the top and bottom walls only.
///
/// A ball that is not heading toward `toward`, or that cannot move, never
/// reaches the goal; its current state is returned as the intercept. The
/// loop is also capped at `max_steps`, returning wherever the copy got to.
pub fn predict_intercept(
    ball: &Kinematics,
    arena: &Arena,
    toward: Side,
    goal_x: f32,
    dt: f32,
    max_steps: u32,
) -> Kinematics {
    let mut sim = *ball;
    if sim.vel.x * toward.incoming_sign() <= 0.0 || sim.speed <= 0.0 || dt <= 0.0 {
        return sim;
    }

    let max_y = arena.max_y(sim.size);
    for _ in 0..max_steps {
        if reached(sim.pos.x, toward, goal_x) {
            break;
        }
        sim.pos = sim.candidate(dt);
        if sim.pos.y < 0.0 {
            sim.pos.y = 1.0_f32.min(max_y);
            sim.vel.y = -sim.vel.y;
        } else if sim.pos.y > max_y {
            sim.pos.y = (max_y - 1.0).max(0.0);
            sim.vel.y = -sim.vel.y;
        }
    }
    sim
}

fn reached(x: f32, toward: Side, goal_x: f32) -> bool {
    match toward {
        Side::Left => x <= goal_x,
        Side::Right => x >= goal_x,
    }
}

fn hits_right_paddle(candidate: Vec2, ball_size: Vec2, paddle: &Kinematics) -> bool {
    candidate.x > paddle.pos.x - ball_size.x
        && candidate.x < paddle.pos.x + paddle.size.x
        && within_vertical_span(candidate.y, paddle)
}

fn hits_left_paddle(candidate: Vec2, paddle: &Kinematics) -> bool {
    candidate.x < paddle.pos.x + paddle.size.x
        && candidate.x > paddle.pos.x
        && within_vertical_span(candidate.y, paddle)
}

fn within_vertical_span(y: f32, paddle: &Kinematics) -> bool {
    y > paddle.pos.y && y < paddle.pos.y + paddle.size.y
}

/// New y direction from how far off the paddle's center the ball struck
fn spin_off(ball: &Kinematics, paddle: &Kinematics, spin: f32) -> f32 {
    (ball.center().y - paddle.center().y) * spin
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPIN: f32 = 0.075;

    fn arena() -> Arena {
        Arena::new(600.0, 600.0)
    }

    fn paddle(x: f32, y: f32) -> Kinematics {
        Kinematics::new(Vec2::new(10.0, 60.0), Vec2::new(x, y), 300.0)
    }

    fn ball(pos: Vec2, vel: Vec2, speed: f32) -> Kinematics {
        Kinematics::new(Vec2::splat(10.0), pos, speed).with_vel(vel)
    }

    // Paddles parked at the far top so they never interfere.
    fn parked() -> (Kinematics, Kinematics) {
        (paddle(20.0, 0.0), paddle(570.0, 0.0))
    }

    #[test]
    fn test_advance_moves_by_velocity_speed_dt() {
        let mut body = paddle(20.0, 200.0).with_vel(Vec2::new(0.0, 1.0));
        let pos = advance(&mut body, &arena(), 0.1);
        assert_eq!(pos, Vec2::new(20.0, 230.0));
        assert_eq!(body.pos, pos);
    }

    #[test]
    fn test_advance_clamps_without_zeroing_velocity() {
        let mut body = paddle(20.0, 530.0).with_vel(Vec2::new(0.0, 1.0));
        advance(&mut body, &arena(), 1.0);
        assert_eq!(body.pos.y, 540.0, "Paddle should stop at the bottom wall");
        assert_eq!(body.vel.y, 1.0, "Velocity should be kept");

        body.vel.y = -1.0;
        advance(&mut body, &arena(), 10.0);
        assert_eq!(body.pos.y, 0.0, "Paddle should stop at the top wall");
    }

    #[test]
    fn test_advance_clamp_invariant() {
        let arena = arena();
        let dirs = [-1.0, 0.0, 1.0];
        for &vx in &dirs {
            for &vy in &dirs {
                for dt in [0.0, 0.016, 1.0, 50.0] {
                    let mut body = paddle(300.0, 300.0).with_vel(Vec2::new(vx, vy));
                    advance(&mut body, &arena, dt);
                    assert!(
                        arena.contains(body.pos, body.size),
                        "Position {:?} out of bounds for vel ({vx}, {vy}) dt {dt}",
                        body.pos
                    );
                }
            }
        }
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (left, right) = parked();
        let mut b = ball(Vec2::new(300.0, -1.0), Vec2::new(1.0, -1.0), 1.0);

        let contact = advance_ball(&mut b, &left, &right, &arena(), SPIN, 1.0);

        assert!(contact.wall_hit, "Should report wall hit");
        assert!(!contact.bat_hit);
        assert_eq!(b.vel.y, 1.0, "Y direction should flip");
        assert_eq!(b.pos.y, 0.0, "Y position should clamp to the top");
        assert_eq!(b.vel.x, 1.0, "X direction should be unchanged");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (left, right) = parked();
        let mut b = ball(Vec2::new(300.0, 588.0), Vec2::new(-1.0, 1.0), 4.0);

        let contact = advance_ball(&mut b, &left, &right, &arena(), SPIN, 1.0);

        assert!(contact.wall_hit);
        assert_eq!(b.vel.y, -1.0);
        assert_eq!(b.pos, Vec2::new(296.0, 584.0));
    }

    #[test]
    fn test_wall_bounce_preserves_spin_magnitude() {
        let (left, right) = parked();
        let mut b = ball(Vec2::new(300.0, 2.0), Vec2::new(1.0, -1.75), 4.0);

        advance_ball(&mut b, &left, &right, &arena(), SPIN, 1.0);

        assert_eq!(b.vel.y, 1.75, "Inverted, not reset to a unit value");
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let left = paddle(20.0, 0.0);
        let right = paddle(570.0, 270.0);
        // Ball center 10 below paddle center, closing in from the left.
        let mut b = ball(Vec2::new(556.0, 305.0), Vec2::new(1.0, -0.5), 10.0);

        let contact = advance_ball(&mut b, &left, &right, &arena(), SPIN, 1.0);

        assert!(contact.bat_hit, "Should report bat hit");
        assert!(!contact.wall_hit);
        assert_eq!(b.vel.x, -1.0, "Ball should bounce left");
        assert!((b.vel.y - 10.0 * SPIN).abs() < 1e-6);
        assert!((b.pos.x - 546.0).abs() < 1e-4);
    }

    #[test]
    fn test_right_paddle_spin_ignores_incoming_y_velocity() {
        let left = paddle(20.0, 0.0);
        let right = paddle(570.0, 270.0);
        let mut up = ball(Vec2::new(556.0, 285.0), Vec2::new(1.0, -1.0), 10.0);
        let mut down = ball(Vec2::new(556.0, 285.0), Vec2::new(1.0, 1.0), 10.0);

        advance_ball(&mut up, &left, &right, &arena(), SPIN, 1.0);
        advance_ball(&mut down, &left, &right, &arena(), SPIN, 1.0);

        assert_eq!(up.vel.y, down.vel.y);
        assert!((up.vel.y - (-10.0 * SPIN)).abs() < 1e-6);
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let left = paddle(20.0, 270.0);
        let right = paddle(570.0, 0.0);
        let mut b = ball(Vec2::new(34.0, 295.0), Vec2::new(-1.0, 0.0), 10.0);

        let contact = advance_ball(&mut b, &left, &right, &arena(), SPIN, 1.0);

        assert!(contact.bat_hit);
        assert_eq!(b.vel.x, 1.0, "Ball should bounce right");
        assert_eq!(b.vel.y, 0.0, "Dead-center hit carries no spin");
        assert_eq!(b.pos.x, 44.0);
    }

    #[test]
    fn test_right_paddle_wins_when_both_spans_overlap() {
        let arena = Arena::new(40.0, 600.0);
        let left = paddle(10.0, 270.0);
        let right = paddle(12.0, 270.0);
        let mut b = ball(Vec2::new(14.0, 295.0), Vec2::new(1.0, 0.0), 1.0);

        let contact = advance_ball(&mut b, &left, &right, &arena, SPIN, 1.0);

        assert!(contact.bat_hit);
        assert_eq!(b.vel.x, -1.0, "Right paddle check takes precedence");
    }

    #[test]
    fn test_ball_misses_paddle_outside_vertical_span() {
        let left = paddle(20.0, 0.0);
        let right = paddle(570.0, 100.0);
        let mut b = ball(Vec2::new(556.0, 400.0), Vec2::new(1.0, 0.0), 10.0);

        let contact = advance_ball(&mut b, &left, &right, &arena(), SPIN, 1.0);

        assert!(!contact.bat_hit);
        assert_eq!(b.vel.x, 1.0);
        assert_eq!(b.pos.x, 566.0);
    }

    #[test]
    fn test_dead_ball_right_edge_scores_left() {
        let b = ball(Vec2::new(601.0, 300.0), Vec2::new(1.0, 0.0), 1.0);
        assert_eq!(dead_ball(&b, &arena()), Outcome::LeftScored);
        assert_eq!(Outcome::LeftScored.scorer(), Some(Side::Left));
    }

    #[test]
    fn test_dead_ball_left_edge_scores_right() {
        let b = ball(Vec2::new(-1.0, 300.0), Vec2::new(-1.0, 0.0), 1.0);
        assert_eq!(dead_ball(&b, &arena()), Outcome::RightScored);
        assert_eq!(Outcome::RightScored.scorer(), Some(Side::Right));
    }

    #[test]
    fn test_ball_on_edges_is_in_play() {
        for x in [0.0, 600.0] {
            let b = ball(Vec2::new(x, 300.0), Vec2::ZERO, 1.0);
            assert_eq!(dead_ball(&b, &arena()), Outcome::InPlay);
        }
    }

    #[test]
    fn test_predict_straight_line() {
        let b = ball(Vec2::new(300.0, 300.0), Vec2::new(-1.0, 0.0), 10.0);
        let p = predict_intercept(&b, &arena(), Side::Left, 30.0, 1.0, 1000);
        assert_eq!(p.pos, Vec2::new(30.0, 300.0));
        assert_eq!(b.pos, Vec2::new(300.0, 300.0), "Input must be untouched");
    }

    #[test]
    fn test_predict_bounces_off_top_wall() {
        let b = ball(Vec2::new(300.0, 50.0), Vec2::new(-1.0, -1.0), 10.0);
        let p = predict_intercept(&b, &arena(), Side::Left, 100.0, 1.0, 1000);

        // Crosses y = 0 on step 6 and is pinned to 1, then climbs back down.
        assert!(p.vel.y > 0.0, "Y direction should flip after the wall");
        assert!(p.pos.x <= 100.0);
        assert_eq!(p.pos.y, 141.0);
    }

    #[test]
    fn test_predict_toward_right_side() {
        let b = ball(Vec2::new(100.0, 300.0), Vec2::new(1.0, 0.0), 25.0);
        let p = predict_intercept(&b, &arena(), Side::Right, 540.0, 1.0, 1000);
        assert!(p.pos.x >= 540.0);
        assert_eq!(p.pos.y, 300.0);
    }

    #[test]
    fn test_predict_zero_x_velocity_returns_current_position() {
        let b = ball(Vec2::new(300.0, 300.0), Vec2::new(0.0, 1.0), 10.0);
        let p = predict_intercept(&b, &arena(), Side::Left, 30.0, 1.0, 1000);
        assert_eq!(p, b);
    }

    #[test]
    fn test_predict_receding_ball_returns_current_position() {
        let b = ball(Vec2::new(300.0, 300.0), Vec2::new(1.0, 1.0), 10.0);
        let p = predict_intercept(&b, &arena(), Side::Left, 30.0, 1.0, 1000);
        assert_eq!(p, b);
    }

    #[test]
    fn test_predict_respects_step_cap() {
        let b = ball(Vec2::new(300.0, 300.0), Vec2::new(-1.0, 0.0), 1.0);
        let p = predict_intercept(&b, &arena(), Side::Left, 30.0, 1.0, 5);
        assert_eq!(p.pos.x, 295.0);
    }
}
