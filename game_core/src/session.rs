//! Game session: owns every piece of mutable game state
//!
//! A session is created Idle with the start layout on screen. `start`
//! resets scores and positions and enters Playing; `frame` advances one
//! display refresh while Playing; reaching the win score moves to Finished,
//! after which nothing changes until the next `start`.

use glam::Vec2;
use hecs::{Entity, World};

use crate::systems::{apply_pointer, reset_positions, track_ball};
use crate::{
    create_ball, create_paddle, step, AudioCue, AudioCues, Ball, Config, Events, GameRng, Paddle,
    Score, SessionAction, SessionFsm, SessionState, Side, TransitionResult,
};

pub struct Session {
    config: Config,
    world: World,
    player: Entity,
    ai: Entity,
    ball: Entity,
    score: Score,
    events: Events,
    rng: GameRng,
    fsm: SessionFsm,
}

impl Session {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        // Create paddles
        let player = create_paddle(&mut world, Side::Player, config.paddle_start_y());
        let ai = create_paddle(&mut world, Side::Ai, config.paddle_start_y());

        // Create ball
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.reset(&config, &mut rng);
        let ball = create_ball(&mut world, ball.pos, ball.vel);

        Self {
            config,
            world,
            player,
            ai,
            ball,
            score: Score::new(),
            events: Events::new(),
            rng,
            fsm: SessionFsm::new(),
        }
    }

    /// Start (or restart) a game from the initial layout at 0-0
    pub fn start(&mut self) -> TransitionResult {
        let result = self.fsm.transition(SessionAction::Start);
        if result.success {
            self.score = Score::new();
            self.events.clear();
            reset_positions(&mut self.world, &self.config, &mut self.rng);
        }
        result
    }

    /// Pointer moved to `y` (relative to the top of the playfield)
    pub fn pointer_moved(&mut self, y: f32) {
        if !self.fsm.is_playing() {
            return;
        }
        apply_pointer(&mut self.world, &self.config, y);
    }

    /// Advance one frame; a no-op unless Playing
    pub fn frame(&mut self, audio: &mut impl AudioCues) -> SessionState {
        if !self.fsm.is_playing() {
            return self.fsm.state();
        }

        let scored = step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );

        for _ in 0..self.events.bounces() {
            audio.play(AudioCue::Bounce);
        }

        if scored.is_some() {
            audio.play(AudioCue::Score);
        }

        if let Some(winner) = self.score.has_winner(self.config.win_score) {
            self.fsm.transition(SessionAction::Win);
            log::info!(
                "{:?} wins {}-{}",
                winner,
                self.score.get(winner),
                self.score.get(winner.opponent())
            );
        } else {
            track_ball(&mut self.world, &self.config);
        }

        self.fsm.state()
    }

    pub fn state(&self) -> SessionState {
        self.fsm.state()
    }

    pub fn is_playing(&self) -> bool {
        self.fsm.is_playing()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events raised by the most recent frame
    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Winner by final score, once Finished
    pub fn winner(&self) -> Option<Side> {
        self.fsm.is_finished().then_some(self.score.leader())
    }

    /// Label for the start control, `None` while it should be hidden
    pub fn start_label(&self) -> Option<&'static str> {
        match self.fsm.state() {
            SessionState::Idle => Some("Play"),
            SessionState::Playing => None,
            SessionState::Finished => Some("Play Again"),
        }
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        let entity = match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        };
        self.world
            .get::<&Paddle>(entity)
            .map(|paddle| *paddle)
            .unwrap_or_else(|_| Paddle::new(side, self.config.paddle_start_y()))
    }

    pub fn ball(&self) -> Ball {
        self.world
            .get::<&Ball>(self.ball)
            .map(|ball| *ball)
            .unwrap_or_else(|_| Ball::new(self.config.ball_spawn(), Vec2::ZERO))
    }

    /// Place the ball directly, e.g. to set up a rally in tests
    pub fn set_ball(&mut self, ball: Ball) {
        if let Ok(mut current) = self.world.get::<&mut Ball>(self.ball) {
            *current = ball;
        }
    }

    /// Place a paddle directly, clamped to the arena
    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        let entity = match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        };
        if let Ok(mut paddle) = self.world.get::<&mut Paddle>(entity) {
            paddle.y = self.config.clamp_paddle_y(y);
        }
    }
}
