//! Arena, ball and session data types
//!
//! Plain data shared by the physics step, the input gate and the session.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ArenaError;

/// Bounded play area, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Arena {
    width: f32,
    height: f32,
}

impl Arena {
    /// Create an arena, rejecting non-finite sides or sides below
    /// [`MIN_ARENA_DIMENSION`]
    pub fn new(width: f32, height: f32) -> Result<Self, ArenaError> {
        if is_valid_dimension(width) && is_valid_dimension(height) {
            Ok(Self { width, height })
        } else {
            Err(ArenaError::InvalidDimension { width, height })
        }
    }

    /// Create an arena from externally reported dimensions, clamping bad values
    /// up to [`MIN_ARENA_DIMENSION`]
    pub fn clamped(width: f32, height: f32) -> Self {
        Self::new(width, height).unwrap_or_else(|err| {
            log::warn!("{err}; clamping");
            Self {
                width: clamp_dimension(width),
                height: clamp_dimension(height),
            }
        })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Ball radius for this arena size
    #[inline]
    pub fn ball_radius(&self) -> f32 {
        BALL_BASE_RADIUS * (self.width / BALL_REFERENCE_WIDTH)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: MAX_ARENA_WIDTH,
            height: MAX_ARENA_HEIGHT,
        }
    }
}

fn is_valid_dimension(d: f32) -> bool {
    d.is_finite() && d >= MIN_ARENA_DIMENSION
}

fn clamp_dimension(d: f32) -> f32 {
    if d.is_finite() {
        d.max(MIN_ARENA_DIMENSION)
    } else if d == f32::INFINITY {
        f32::MAX
    } else {
        MIN_ARENA_DIMENSION
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub radius: f32,
    /// Transient scale pop after a hit, decays to 1.0
    pub hit_scale: f32,
}

impl Ball {
    /// A fresh ball centered in the arena, moving down-right at the start speed
    pub fn spawn(arena: &Arena) -> Self {
        Self {
            pos: arena.center(),
            vel: Vec2::splat(BALL_START_SPEED),
            radius: arena.ball_radius(),
            hit_scale: 1.0,
        }
    }

    /// Radius as drawn, including the hit pop
    #[inline]
    pub fn visual_radius(&self) -> f32 {
        self.radius * self.hit_scale
    }

    /// Re-center and re-scale for a new arena size, keeping velocity and scale
    pub fn fit_to(&mut self, arena: &Arena) {
        self.pos = arena.center();
        self.radius = arena.ball_radius();
    }
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionState {
    /// Nothing played yet
    #[default]
    Idle,
    /// Ball moving, pointer events scored
    Running,
    /// Frozen mid-session
    Paused,
    /// Session over, final score still readable
    Ended,
}

impl SessionState {
    /// Whether the driver should keep requesting frames
    #[inline]
    pub fn is_running(self) -> bool {
        self == SessionState::Running
    }

    /// States a new session may start from
    #[inline]
    pub fn can_start(self) -> bool {
        matches!(self, SessionState::Idle | SessionState::Ended)
    }
}

/// Fire-and-forget notifications for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball was hit; play the tap sound and burst particles
    Hit { pos: Vec2, color: u32 },
    /// Session finalized
    SessionEnded { final_score: u32, new_record: bool },
}

/// Read-only view of the session for drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub state: SessionState,
    pub ball: Ball,
    pub arena: Arena,
    pub score: u32,
    pub best_score: u32,
    /// Current ball color (0xRRGGBB)
    pub color: u32,
}
