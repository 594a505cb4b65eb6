use hecs::World;

use crate::{find_ball, find_paddle, Arena, GameRng, OpponentAi, Paddle, PaddleIntent, Time};

/// Let each AI read the ball and its own paddle, then write the paddle intent
pub fn drive_opponents(
    world: &mut World,
    ais: &mut [OpponentAi],
    arena: &Arena,
    time: &Time,
    rng: &mut GameRng,
) {
    let Some((_entity, ball)) = find_ball(world) else {
        return;
    };

    for ai in ais.iter_mut() {
        let Some(paddle) = find_paddle(world, ai.side()) else {
            continue;
        };
        let dir = ai.decide(&paddle, &ball, arena, time.dt, rng);

        for (_entity, (p, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
            if p.side == ai.side() {
                intent.dir = dir;
            }
        }
    }
}
