use hecs::World;
use tracing::info;

use crate::physics::dead_ball;
use crate::{create_ball, find_ball, Config, Events, OpponentAi, Paddle, Rally, Side};

/// Check if ball left the arena (scoring).
///
/// A dead ball is despawned and replaced by a fresh, centered, motionless
/// one; the rally ends until the next launch.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    ais: &mut [OpponentAi],
    rally: &mut Rally,
) {
    let Some((entity, ball)) = find_ball(world) else {
        return;
    };
    let Some(scorer) = dead_ball(&ball, &config.arena()).scorer() else {
        return;
    };

    let mut scores = (0, 0);
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == scorer {
            paddle.score += 1;
        }
        match paddle.side {
            Side::Left => scores.0 = paddle.score,
            Side::Right => scores.1 = paddle.score,
        }
    }

    match scorer {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }

    for ai in ais.iter_mut() {
        ai.unfocus();
    }

    let _ = world.despawn(entity);
    create_ball(world, config);
    rally.in_play = false;

    info!(
        scorer = ?scorer,
        left = scores.0,
        right = scores.1,
        rally = rally.count,
        "point scored"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, find_paddle, find_paddle_score, AiConfig, Ball, GameRng, Kinematics};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Events, Rally) {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, &config, Side::Left);
        create_paddle(&mut world, &config, Side::Right);
        create_ball(&mut world, &config);
        let rally = Rally {
            in_play: true,
            count: 1,
        };
        (world, config, Events::new(), rally)
    }

    fn set_ball(world: &mut World, pos: Vec2, vel: Vec2) {
        for (_e, (_b, body)) in world.query_mut::<(&Ball, &mut Kinematics)>() {
            body.pos = pos;
            body.vel = vel;
        }
    }

    #[test]
    fn test_left_scores_when_ball_exits_right() {
        let (mut world, config, mut events, mut rally) = setup_world();
        set_ball(&mut world, Vec2::new(601.0, 300.0), Vec2::new(1.0, 0.0));

        check_scoring(&mut world, &config, &mut events, &mut [], &mut rally);

        assert_eq!(find_paddle_score(&world, Side::Left), Some(1));
        assert_eq!(find_paddle_score(&world, Side::Right), Some(0));
        assert!(events.left_scored, "Right paddle lost the point");
        assert!(!events.right_scored);
    }

    #[test]
    fn test_right_scores_when_ball_exits_left() {
        let (mut world, config, mut events, mut rally) = setup_world();
        set_ball(&mut world, Vec2::new(-1.0, 300.0), Vec2::new(-1.0, 0.0));

        check_scoring(&mut world, &config, &mut events, &mut [], &mut rally);

        assert_eq!(find_paddle_score(&world, Side::Right), Some(1));
        assert_eq!(find_paddle_score(&world, Side::Left), Some(0));
        assert!(events.right_scored);
    }

    #[test]
    fn test_dead_ball_is_replaced_and_rally_ends() {
        let (mut world, config, mut events, mut rally) = setup_world();
        let (old, _) = find_ball(&world).unwrap();
        set_ball(&mut world, Vec2::new(-1.0, 300.0), Vec2::new(-1.0, 0.5));

        check_scoring(&mut world, &config, &mut events, &mut [], &mut rally);

        let (new, ball) = find_ball(&world).unwrap();
        assert_ne!(old, new, "A fresh ball entity is spawned");
        assert!(!world.contains(old));
        assert_eq!(ball.pos, config.ball_spawn());
        assert_eq!(ball.vel, Vec2::ZERO);
        assert!(!rally.in_play);
        assert_eq!(world.query::<&Ball>().iter().count(), 1);
    }

    #[test]
    fn test_dead_ball_unfocuses_ai() {
        let (mut world, config, mut events, mut rally) = setup_world();
        let mut rng = GameRng::new(11);
        let mut ai = OpponentAi::new(Side::Left, AiConfig::new(), &mut rng).unwrap();
        let left = find_paddle(&world, Side::Left).unwrap();
        let incoming = Kinematics::new(Vec2::splat(10.0), Vec2::new(400.0, 300.0), 240.0)
            .with_vel(Vec2::new(-1.0, 2.0));
        ai.decide(&left, &incoming, &config.arena(), 1.0 / 60.0, &mut rng);
        assert!(ai.is_focused());

        set_ball(&mut world, Vec2::new(-1.0, 300.0), Vec2::new(-1.0, 2.0));
        let mut ais = vec![ai];
        check_scoring(&mut world, &config, &mut events, &mut ais, &mut rally);

        assert!(!ais[0].is_focused());
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut events, mut rally) = setup_world();
        set_ball(&mut world, Vec2::new(300.0, 300.0), Vec2::new(1.0, 1.0));

        check_scoring(&mut world, &config, &mut events, &mut [], &mut rally);

        assert_eq!(find_paddle_score(&world, Side::Left), Some(0));
        assert_eq!(find_paddle_score(&world, Side::Right), Some(0));
        assert_eq!(events, Events::default());
        assert!(rally.in_play);
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut events, mut rally) = setup_world();
        for _ in 0..2 {
            set_ball(&mut world, Vec2::new(601.0, 300.0), Vec2::new(1.0, 0.0));
            check_scoring(&mut world, &config, &mut events, &mut [], &mut rally);
            events.clear();
        }

        assert_eq!(find_paddle_score(&world, Side::Left), Some(2), "Scores should accumulate");
        assert_eq!(find_paddle_score(&world, Side::Right), Some(0));
    }
}
