use anyhow::{bail, Result};
use game_core::{Events, Input, Match, Side, Snapshot};
use proto::{Command, Frame, FrameEvents, Replay};
use tracing::info;

use crate::Settings;

/// Who plays the right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RightPlayer {
    /// A second opponent AI
    Ai,
    /// Scripted input that chases the ball every tick
    Follow,
    /// Never moves
    Idle,
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub seed: u64,
    pub ticks: u32,
    /// Stop early once either side reaches this score
    pub points: Option<u32>,
    pub dt: f32,
    pub right: RightPlayer,
    pub record: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            seed: 12345,
            ticks: 36_000,
            points: None,
            dt: game_core::Params::FIXED_DT,
            right: RightPlayer::Follow,
            record: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub ticks: u32,
    pub rallies: u32,
    pub score_left: u32,
    pub score_right: u32,
    pub bat_hits: u32,
    pub wall_hits: u32,
}

#[derive(Debug)]
pub struct RunResult {
    pub summary: Summary,
    pub replay: Option<Replay>,
}

/// Play a match with the AI on the left, auto-serving every rally
pub fn run(settings: &Settings, opts: &RunOptions) -> Result<RunResult> {
    if opts.ticks == 0 {
        bail!("ticks must be > 0");
    }
    if opts.dt.is_nan() || opts.dt <= 0.0 {
        bail!("dt must be > 0");
    }

    let ai_sides: &[Side] = match opts.right {
        RightPlayer::Ai => &[Side::Left, Side::Right],
        RightPlayer::Follow | RightPlayer::Idle => &[Side::Left],
    };
    let mut game = Match::with_opponents(
        settings.game.clone(),
        settings.ai.clone(),
        opts.seed,
        ai_sides,
    )?;

    let mut summary = Summary::default();
    let mut replay = opts.record.then(|| Replay::new(opts.seed, opts.dt));

    while summary.ticks < opts.ticks {
        if !game.in_play() {
            issue(&mut game, Command::Launch)?;
        }
        if opts.right == RightPlayer::Follow {
            let paddle_dir = follow_ball(&game);
            issue(
                &mut game,
                Command::Move {
                    side: side_id(Side::Right),
                    paddle_dir,
                },
            )?;
        }

        let events = game.step(opts.dt);
        summary.ticks += 1;
        summary.bat_hits += events.ball_hit_paddle as u32;
        summary.wall_hits += events.ball_hit_wall as u32;

        let Some(snap) = game.snapshot() else {
            bail!("match lost its entities at tick {}", summary.ticks);
        };
        if let Some(replay) = replay.as_mut() {
            replay.push(to_frame(&snap, &events));
        }

        if summary.ticks % 600 == 0 {
            info!(
                tick = summary.ticks,
                left = snap.score_left,
                right = snap.score_right,
                "match running"
            );
        }

        if let Some(points) = opts.points {
            if snap.score_left >= points || snap.score_right >= points {
                break;
            }
        }
    }

    summary.rallies = game.rally.count;
    summary.score_left = game.score(Side::Left);
    summary.score_right = game.score(Side::Right);
    info!(
        ticks = summary.ticks,
        rallies = summary.rallies,
        left = summary.score_left,
        right = summary.score_right,
        "match finished"
    );

    Ok(RunResult { summary, replay })
}

/// Scripted right-paddle input: head for the ball's center with a small deadzone
fn follow_ball(game: &Match) -> i8 {
    let (Some(ball), Some(paddle)) = (game.ball(), game.paddle(Side::Right)) else {
        return 0;
    };
    let diff = ball.center().y - paddle.center().y;
    let deadzone = paddle.size.y / 6.0;
    if diff > deadzone {
        1
    } else if diff < -deadzone {
        -1
    } else {
        0
    }
}

/// Translate a wire command into a simulation input
pub fn to_input(command: Command) -> Result<Input> {
    match command {
        Command::Move { side, paddle_dir } => {
            let side = match side {
                0 => Side::Left,
                1 => Side::Right,
                other => bail!("unknown paddle side {other}"),
            };
            Ok(Input::Move {
                side,
                dir: paddle_dir,
            })
        }
        Command::Launch => Ok(Input::Launch),
    }
}

/// Queue a command for the next tick
pub fn issue(game: &mut Match, command: Command) -> Result<()> {
    game.push_input(to_input(command)?);
    Ok(())
}

fn side_id(side: Side) -> u8 {
    match side {
        Side::Left => 0,
        Side::Right => 1,
    }
}

pub fn to_frame(snap: &Snapshot, events: &Events) -> Frame {
    Frame {
        tick: snap.tick,
        ball_x: snap.ball.pos.x,
        ball_y: snap.ball.pos.y,
        ball_vx: snap.ball.vel.x,
        ball_vy: snap.ball.vel.y,
        paddle_left_y: snap.left.pos.y,
        paddle_right_y: snap.right.pos.y,
        score_left: snap.score_left,
        score_right: snap.score_right,
        in_play: snap.in_play,
        events: FrameEvents {
            wall_hit: events.ball_hit_wall,
            bat_hit: events.ball_hit_paddle,
            scored: events.scored().map(side_id),
        },
    }
}
