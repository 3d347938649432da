//! Session state machine
//!
//! A single owned `Session` is the only thing the driver talks to. Every
//! operation returns a [`NextFrame`] telling the driver whether to keep
//! requesting display frames; pausing and ending are simply "stop asking".

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::input::{Attempt, InputGate, PointerEvent};
use super::physics;
use super::state::{Arena, Ball, GameEvent, SessionState, Snapshot};
use crate::consts::*;
use crate::effects::{PaletteCursor, ParticleField};
use crate::highscores::ScoreLedger;

/// Scheduling hint returned to the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NextFrame {
    /// Keep requesting frames
    Request,
    /// Stop requesting frames
    Halt,
}

impl NextFrame {
    /// Frame hint matching a session state
    pub fn for_state(state: SessionState) -> Self {
        if state.is_running() {
            NextFrame::Request
        } else {
            NextFrame::Halt
        }
    }
}

/// One player's game: ball, score and lifecycle
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    arena: Arena,
    ball: Ball,
    score: u32,
    gate: InputGate,
    palette: PaletteCursor,
    particles: ParticleField,
    particles_enabled: bool,
    ledger: ScoreLedger,
    events: Vec<GameEvent>,
    rng: Pcg32,
    /// Ticks simulated in the current session
    ticks: u64,
}

impl Session {
    /// Create an idle session. `seed` drives the cosmetic particle RNG.
    pub fn new(arena: Arena, ledger: ScoreLedger, seed: u64) -> Self {
        Self {
            state: SessionState::Idle,
            ball: Ball::spawn(&arena),
            arena,
            score: 0,
            gate: InputGate::new(),
            palette: PaletteCursor::default(),
            particles: ParticleField::new(),
            particles_enabled: true,
            ledger,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            ticks: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.ledger.best()
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Current ball color (0xRRGGBB)
    pub fn color(&self) -> u32 {
        self.palette.color()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            ball: self.ball,
            arena: self.arena,
            score: self.score,
            best_score: self.ledger.best(),
            color: self.palette.color(),
        }
    }

    /// Hand pending effect notifications to the presentation layer
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Turn hit particles on or off. Existing particles are dropped when off.
    pub fn set_particles_enabled(&mut self, enabled: bool) {
        self.particles_enabled = enabled;
        if !enabled {
            self.particles.clear();
        }
    }

    /// Begin a fresh session from Idle or Ended
    pub fn start(&mut self) -> NextFrame {
        if !self.state.can_start() {
            log::debug!("Start ignored while {:?}", self.state);
            return NextFrame::for_state(self.state);
        }

        // The input cooldown carries over between sessions
        self.score = 0;
        self.ball = Ball::spawn(&self.arena);
        self.palette.reset();
        self.particles.clear();
        self.ticks = 0;
        self.state = SessionState::Running;
        log::info!(
            "Session started in {}x{} arena",
            self.arena.width(),
            self.arena.height()
        );
        NextFrame::Request
    }

    /// Freeze a running session. Does nothing in any other state.
    pub fn pause(&mut self) -> NextFrame {
        if self.state == SessionState::Running {
            self.state = SessionState::Paused;
            log::info!("Paused at score {}", self.score);
        }
        NextFrame::for_state(self.state)
    }

    /// Continue a paused session. Does nothing in any other state.
    pub fn resume(&mut self) -> NextFrame {
        if self.state == SessionState::Paused {
            self.state = SessionState::Running;
            log::info!("Resumed");
        }
        NextFrame::for_state(self.state)
    }

    /// Pause if running, resume if paused
    pub fn toggle_pause(&mut self) -> NextFrame {
        match self.state {
            SessionState::Running => self.pause(),
            SessionState::Paused => self.resume(),
            SessionState::Idle | SessionState::Ended => NextFrame::Halt,
        }
    }

    /// End the session at the player's request (running or paused)
    pub fn stop(&mut self) -> NextFrame {
        match self.state {
            SessionState::Running | SessionState::Paused => self.finish(),
            SessionState::Idle | SessionState::Ended => {}
        }
        NextFrame::Halt
    }

    /// Advance one display frame
    pub fn tick(&mut self) -> NextFrame {
        if !self.state.is_running() {
            return NextFrame::Halt;
        }

        let bounce = physics::step(&mut self.ball, &self.arena);
        if bounce.reflected() {
            log::trace!("Bounce at ({:.1}, {:.1})", self.ball.pos.x, self.ball.pos.y);
        }
        self.particles.update();
        self.ticks += 1;
        NextFrame::Request
    }

    /// Route a pointer event. Returns `None` when the session is not running
    /// and the event was ignored outright.
    pub fn pointer(&mut self, event: &PointerEvent) -> Option<Attempt> {
        if !self.state.is_running() {
            return None;
        }

        let attempt = self.gate.accept(event, &self.ball);
        match attempt {
            Attempt::Hit => self.register_hit(),
            Attempt::Miss => {
                log::info!(
                    "Missed at ({:.1}, {:.1}), ball at ({:.1}, {:.1})",
                    event.pos.x,
                    event.pos.y,
                    self.ball.pos.x,
                    self.ball.pos.y
                );
                self.finish();
            }
            Attempt::RateLimited => {}
        }
        Some(attempt)
    }

    /// Apply a new arena size. Bad dimensions are clamped; the ball is
    /// re-centered and re-scaled to the new size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.arena = Arena::clamped(width, height);
        self.ball.fit_to(&self.arena);
        log::debug!(
            "Arena resized to {}x{}",
            self.arena.width(),
            self.arena.height()
        );
    }

    fn register_hit(&mut self) {
        self.score = self.score.saturating_add(1);
        // No speed cap: every hit compounds
        self.ball.vel *= SPEED_GROWTH;
        self.ball.hit_scale = HIT_SCALE_BOOST;
        let color = self.palette.advance();

        if self.particles_enabled {
            self.particles.burst(&mut self.rng, self.ball.pos, color);
        }
        self.events.push(GameEvent::Hit {
            pos: self.ball.pos,
            color,
        });
        log::debug!(
            "Hit #{} - speed now ({:.2}, {:.2})",
            self.score,
            self.ball.vel.x,
            self.ball.vel.y
        );
    }

    fn finish(&mut self) {
        self.state = SessionState::Ended;
        let new_record = self.ledger.record(self.score);
        self.events.push(GameEvent::SessionEnded {
            final_score: self.score,
            new_record,
        });
        log::info!(
            "Session ended with score {} after {} ticks{}",
            self.score,
            self.ticks,
            if new_record { " (new best)" } else { "" }
        );
    }
}
