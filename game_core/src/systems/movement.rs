use hecs::World;

use crate::physics::{advance, advance_ball};
use crate::{find_paddle, Ball, Config, Events, Kinematics, Paddle, PaddleIntent, Side, Time};

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, time: &Time, config: &Config) {
    let arena = config.arena();
    for (_entity, (_paddle, intent, body)) in
        world.query_mut::<(&Paddle, &PaddleIntent, &mut Kinematics)>()
    {
        body.vel.y = intent.dir as f32;
        advance(body, &arena, time.dt);
    }
}

/// Move ball, bouncing off paddles and walls
pub fn move_ball(world: &mut World, time: &Time, config: &Config, events: &mut Events) {
    let (Some(left), Some(right)) = (find_paddle(world, Side::Left), find_paddle(world, Side::Right))
    else {
        return;
    };

    let arena = config.arena();
    for (_entity, (_ball, body)) in world.query_mut::<(&Ball, &mut Kinematics)>() {
        let contact = advance_ball(body, &left, &right, &arena, config.ball_spin, time.dt);
        events.ball_hit_paddle |= contact.bat_hit;
        events.ball_hit_wall |= contact.wall_hit;
    }
}
