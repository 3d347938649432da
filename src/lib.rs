//! Tap Ball - tap the bouncing ball before it gets away
//!
//! Core modules:
//! - `sim`: Deterministic simulation (arena, ball physics, input gate, session)
//! - `effects`: Cosmetic hit particles and the ball palette
//! - `highscores`: Best-score ledger on top of a pluggable store
//! - `persistence`: Best-score storage backends
//! - `platform`: Viewport sizing and pointer coordinate mapping
//! - `settings`: Player preferences

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod effects;
pub mod error;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::{ArenaError, StoreError};
pub use highscores::ScoreLedger;
pub use settings::Settings;
pub use sim::{Arena, Attempt, Ball, GameEvent, NextFrame, Session, SessionState, Snapshot};

/// Game configuration constants
pub mod consts {
    /// Nominal display refresh period (ms), used by the headless driver and tests
    pub const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Largest arena the viewport may produce
    pub const MAX_ARENA_WIDTH: f32 = 400.0;
    pub const MAX_ARENA_HEIGHT: f32 = 600.0;
    /// Share of the window the arena may occupy
    pub const VIEWPORT_WIDTH_FRACTION: f32 = 0.9;
    pub const VIEWPORT_HEIGHT_FRACTION: f32 = 0.7;
    /// Resize events never shrink the arena below this
    pub const MIN_ARENA_DIMENSION: f32 = 1.0;

    /// Ball radius at the reference arena width (scales linearly with width)
    pub const BALL_BASE_RADIUS: f32 = 20.0;
    pub const BALL_REFERENCE_WIDTH: f32 = 400.0;
    /// Initial speed per axis (pixels per tick)
    pub const BALL_START_SPEED: f32 = 2.0;

    /// Minimum spacing between two accepted pointer events (ms)
    pub const CLICK_COOLDOWN_MS: f64 = 100.0;
    /// Clickable radius multiplier
    pub const HIT_TOLERANCE: f32 = 1.5;
    /// Velocity multiplier per hit. Compounds without a cap.
    pub const SPEED_GROWTH: f32 = 1.03;

    /// Scale pop on hit, and its per-tick decay
    pub const HIT_SCALE_BOOST: f32 = 1.2;
    pub const HIT_SCALE_DECAY: f32 = 0.05;

    /// Particle burst on hit
    pub const PARTICLES_PER_HIT: usize = 10;
    pub const PARTICLE_LIFE_TICKS: u32 = 30;
    pub const PARTICLE_MIN_RADIUS: f32 = 1.0;
    pub const PARTICLE_MAX_RADIUS: f32 = 4.0;
    /// Each velocity component is drawn from [-PARTICLE_MAX_SPEED, PARTICLE_MAX_SPEED)
    pub const PARTICLE_MAX_SPEED: f32 = 2.0;
    pub const PARTICLE_SHRINK: f32 = 0.95;
}
