//! Pointer input gate
//!
//! Turns a pointer event into a hit attempt. Events closer together than the
//! cooldown are dropped; the rest are hit-tested against the ball.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Ball;
use crate::consts::{CLICK_COOLDOWN_MS, HIT_TOLERANCE};

/// Wall-clock milliseconds
pub type Millis = f64;

/// A click or tap in arena-local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub pos: Vec2,
    pub timestamp: Millis,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32, timestamp: Millis) -> Self {
        Self {
            pos: Vec2::new(x, y),
            timestamp,
        }
    }
}

/// Outcome of a gated pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attempt {
    /// Too soon after the previous accepted event; nothing happened
    RateLimited,
    /// Within the tolerance radius of the ball
    Hit,
    /// Accepted but outside the tolerance radius
    Miss,
}

/// Cooldown and hit-test
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputGate {
    last_accepted: Option<Millis>,
}

impl InputGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timestamp of the last event that passed the cooldown
    pub fn last_accepted(&self) -> Option<Millis> {
        self.last_accepted
    }

    /// Gate and hit-test an event against the ball
    pub fn accept(&mut self, event: &PointerEvent, ball: &Ball) -> Attempt {
        if self.in_cooldown(event.timestamp) {
            log::debug!("Pointer event at {:.0}ms rate limited", event.timestamp);
            return Attempt::RateLimited;
        }
        // Accepted for cooldown purposes whether or not it scores
        self.last_accepted = Some(event.timestamp);

        if is_hit(event.pos, ball) {
            Attempt::Hit
        } else {
            Attempt::Miss
        }
    }

    /// An event stamped before the last accepted one is also inside the cooldown
    fn in_cooldown(&self, now: Millis) -> bool {
        self.last_accepted
            .is_some_and(|last| now - last < CLICK_COOLDOWN_MS)
    }
}

/// Whether a point lands within the enlarged hit radius
#[inline]
pub fn is_hit(point: Vec2, ball: &Ball) -> bool {
    point.distance(ball.pos) <= ball.radius * HIT_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball() -> Ball {
        Ball {
            pos: Vec2::new(200.0, 300.0),
            vel: Vec2::new(2.0, 2.0),
            radius: 20.0,
            hit_scale: 1.0,
        }
    }

    #[test]
    fn test_center_is_hit() {
        let mut gate = InputGate::new();
        let outcome = gate.accept(&PointerEvent::new(200.0, 300.0, 1000.0), &ball());
        assert_eq!(outcome, Attempt::Hit);
        assert_eq!(gate.last_accepted(), Some(1000.0));
    }

    #[test]
    fn test_tolerance_boundary() {
        let b = ball();
        // 1.5 * 20 = 30
        assert!(is_hit(Vec2::new(230.0, 300.0), &b));
        assert!(!is_hit(Vec2::new(232.0, 300.0), &b));
        assert!(is_hit(Vec2::new(200.0, 271.0), &b));
    }

    #[test]
    fn test_miss_updates_timestamp() {
        let mut gate = InputGate::new();
        let outcome = gate.accept(&PointerEvent::new(0.0, 0.0, 500.0), &ball());
        assert_eq!(outcome, Attempt::Miss);
        assert_eq!(gate.last_accepted(), Some(500.0));
    }

    #[test]
    fn test_cooldown_ignores_position() {
        let mut gate = InputGate::new();
        gate.accept(&PointerEvent::new(200.0, 300.0, 1000.0), &ball());

        let outcome = gate.accept(&PointerEvent::new(200.0, 300.0, 1099.0), &ball());
        assert_eq!(outcome, Attempt::RateLimited);
        let outcome = gate.accept(&PointerEvent::new(-500.0, 9000.0, 1050.0), &ball());
        assert_eq!(outcome, Attempt::RateLimited);

        // Rate limited events do not extend the cooldown
        assert_eq!(gate.last_accepted(), Some(1000.0));
        let outcome = gate.accept(&PointerEvent::new(200.0, 300.0, 1100.0), &ball());
        assert_eq!(outcome, Attempt::Hit);
    }

    #[test]
    fn test_backwards_clock_is_rate_limited() {
        let mut gate = InputGate::new();
        gate.accept(&PointerEvent::new(200.0, 300.0, 10_000.0), &ball());

        let outcome = gate.accept(&PointerEvent::new(200.0, 300.0, 9_950.0), &ball());
        assert_eq!(outcome, Attempt::RateLimited);
        // Far in the past, off the ball: still dropped, never a miss
        let outcome = gate.accept(&PointerEvent::new(0.0, 0.0, 2_000.0), &ball());
        assert_eq!(outcome, Attempt::RateLimited);
        assert_eq!(gate.last_accepted(), Some(10_000.0));

        let outcome = gate.accept(&PointerEvent::new(200.0, 300.0, 10_100.0), &ball());
        assert_eq!(outcome, Attempt::Hit);
    }
}
