use hecs::World;
use rand::Rng;
use tracing::debug;

use crate::{Ball, GameRng, Input, InputQueue, Kinematics, OpponentAi, Paddle, PaddleIntent, Rally};

/// Apply queued inputs: move intents to paddles, launch to the waiting ball
pub fn ingest_inputs(
    world: &mut World,
    inputs: &mut InputQueue,
    rally: &mut Rally,
    ais: &mut [OpponentAi],
    rng: &mut GameRng,
) {
    for input in inputs.drain() {
        match input {
            Input::Move { side, dir } => {
                for (_entity, (paddle, intent)) in
                    world.query_mut::<(&Paddle, &mut PaddleIntent)>()
                {
                    if paddle.side == side {
                        intent.dir = dir.signum();
                    }
                }
            }
            Input::Launch => {
                if rally.in_play {
                    continue;
                }
                let dir_x = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
                let dir_y = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
                for (_entity, (_ball, body)) in world.query_mut::<(&Ball, &mut Kinematics)>() {
                    body.vel = glam::Vec2::new(dir_x, dir_y);
                }
                for ai in ais.iter_mut() {
                    ai.launch_reset(rng);
                }
                rally.in_play = true;
                rally.count += 1;
                debug!(rally = rally.count, dir_x, dir_y, "ball launched");
            }
        }
    }
}
