use hecs::World;

use crate::{
    create_ball, create_paddle, find_ball, find_paddle, find_paddle_score, step, AiConfig, Config,
    ConfigError, Events, GameRng, Input, InputQueue, Kinematics, OpponentAi, Rally, Side, Time,
};

/// Read-only view of a tick's state for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub tick: u32,
    pub ball: Kinematics,
    pub left: Kinematics,
    pub right: Kinematics,
    pub score_left: u32,
    pub score_right: u32,
    pub in_play: bool,
}

/// A session: both paddles, the current ball, and the AI opponents
pub struct Match {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub events: Events,
    pub inputs: InputQueue,
    pub rng: GameRng,
    pub rally: Rally,
    pub ais: Vec<OpponentAi>,
    pub tick: u32,
}

impl Match {
    /// Human on the right, AI on the left
    pub fn new(config: Config, ai_config: AiConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_opponents(config, ai_config, seed, &[Side::Left])
    }

    /// One AI per listed side; unlisted sides are driven by [`Input::Move`]
    pub fn with_opponents(
        config: Config,
        ai_config: AiConfig,
        seed: u64,
        ai_sides: &[Side],
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = GameRng::new(seed);
        let ais = ai_sides
            .iter()
            .map(|&side| OpponentAi::new(side, ai_config.clone(), &mut rng))
            .collect::<Result<Vec<_>, _>>()?;

        let mut world = World::new();
        create_paddle(&mut world, &config, Side::Left);
        create_paddle(&mut world, &config, Side::Right);
        create_ball(&mut world, &config);

        Ok(Self {
            world,
            time: Time::default(),
            config,
            events: Events::new(),
            inputs: InputQueue::new(),
            rng,
            rally: Rally::default(),
            ais,
            tick: 0,
        })
    }

    pub fn push_input(&mut self, input: Input) {
        self.inputs.push(input);
    }

    pub fn launch(&mut self) {
        self.push_input(Input::Launch);
    }

    pub fn set_direction(&mut self, side: Side, dir: i8) {
        self.push_input(Input::Move { side, dir });
    }

    pub fn in_play(&self) -> bool {
        self.rally.in_play
    }

    /// Advance one tick by `dt` and return what happened
    pub fn step(&mut self, dt: f32) -> Events {
        self.time.dt = dt;
        self.tick += 1;

        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.events,
            &mut self.inputs,
            &mut self.ais,
            &mut self.rally,
            &mut self.rng,
        );

        self.events
    }

    pub fn ball(&self) -> Option<Kinematics> {
        find_ball(&self.world).map(|(_entity, body)| body)
    }

    pub fn paddle(&self, side: Side) -> Option<Kinematics> {
        find_paddle(&self.world, side)
    }

    pub fn score(&self, side: Side) -> u32 {
        find_paddle_score(&self.world, side).unwrap_or(0)
    }

    pub fn ai(&self, side: Side) -> Option<&OpponentAi> {
        self.ais.iter().find(|ai| ai.side() == side)
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        Some(Snapshot {
            tick: self.tick,
            ball: self.ball()?,
            left: self.paddle(Side::Left)?,
            right: self.paddle(Side::Right)?,
            score_left: self.score(Side::Left),
            score_right: self.score(Side::Right),
            in_play: self.rally.in_play,
        })
    }
}
