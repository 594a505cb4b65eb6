pub mod ai;
pub mod arena;
pub mod components;
pub mod config;
pub mod error;
pub mod match_loop;
pub mod params;
pub mod physics;
pub mod resources;
pub mod systems;

pub use ai::*;
pub use arena::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use match_loop::*;
pub use params::*;
pub use physics::{Contact, Outcome};
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation.
///
/// Order is fixed: inputs, AI decisions, paddle integration, ball
/// integration with collisions, then the dead-ball check.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    events: &mut Events,
    inputs: &mut InputQueue,
    ais: &mut [OpponentAi],
    rally: &mut Rally,
    rng: &mut GameRng,
) {
    // Negative dt would run the simulation backwards
    time.dt = time.dt.max(0.0);

    // Clear events at start of tick
    events.clear();

    // 1. Ingest inputs (paddle intents, launch)
    ingest_inputs(world, inputs, rally, ais, rng);

    // 2. AI decides and writes its paddle intent
    drive_opponents(world, ais, &config.arena(), time, rng);

    // 3. Move paddles based on intents
    move_paddles(world, time, config);

    // 4. Move ball (walls, paddles)
    move_ball(world, time, config, events);

    // 5. Check scoring (ball exited arena)
    check_scoring(world, config, events, ais, rally);

    time.now += time.dt;
}

/// Helper to create a paddle entity at its side's spawn point
pub fn create_paddle(world: &mut World, config: &Config, side: Side) -> hecs::Entity {
    let body = Kinematics::new(
        glam::Vec2::new(config.paddle_width, config.paddle_height),
        config.paddle_spawn(side),
        config.paddle_speed,
    );
    world.spawn((Paddle::new(side), body, PaddleIntent::new()))
}

/// Helper to create a centered, motionless ball entity
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    let body = Kinematics::new(
        glam::Vec2::splat(config.ball_size),
        config.ball_spawn(),
        config.ball_speed,
    );
    world.spawn((Ball, body))
}

pub fn find_ball(world: &World) -> Option<(hecs::Entity, Kinematics)> {
    world
        .query::<(&Ball, &Kinematics)>()
        .iter()
        .next()
        .map(|(entity, (_ball, body))| (entity, *body))
}

pub fn find_paddle(world: &World, side: Side) -> Option<Kinematics> {
    world
        .query::<(&Paddle, &Kinematics)>()
        .iter()
        .find(|(_e, (paddle, _))| paddle.side == side)
        .map(|(_e, (_paddle, body))| *body)
}

pub fn find_paddle_score(world: &World, side: Side) -> Option<u32> {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, paddle)| paddle.side == side)
        .map(|(_e, paddle)| paddle.score)
}
