//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per display frame, no wall-clock reads
//! - Seeded RNG only (and only for cosmetic particles)
//! - No rendering or platform dependencies

pub mod input;
pub mod physics;
pub mod session;
pub mod state;

pub use input::{Attempt, InputGate, Millis, PointerEvent, is_hit};
pub use physics::{StepResult, step, stepped};
pub use session::{NextFrame, Session};
pub use state::{Arena, Ball, GameEvent, SessionState, Snapshot};
