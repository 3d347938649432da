//! Platform helpers
//!
//! Pure conversions between browser geometry and arena space, so the web
//! frontend stays thin and the math stays testable natively.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{Arena, Millis, PointerEvent};

/// Arena size for a window of the given inner size
pub fn viewport_arena(inner_width: f32, inner_height: f32) -> Arena {
    let width = (inner_width * VIEWPORT_WIDTH_FRACTION).min(MAX_ARENA_WIDTH);
    let height = (inner_height * VIEWPORT_HEIGHT_FRACTION).min(MAX_ARENA_HEIGHT);
    Arena::clamped(width, height)
}

/// Map client (page) coordinates into arena-local coordinates, given the
/// canvas bounding rect origin
#[inline]
pub fn to_arena_local(client: Vec2, rect_origin: Vec2) -> Vec2 {
    client - rect_origin
}

/// Build a pointer event from client coordinates
pub fn pointer_event(client_x: f32, client_y: f32, rect_origin: Vec2, now: Millis) -> PointerEvent {
    PointerEvent {
        pos: to_arena_local(Vec2::new(client_x, client_y), rect_origin),
        timestamp: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_caps_at_max() {
        let arena = viewport_arena(1920.0, 1080.0);
        assert_eq!(arena.width(), 400.0);
        assert_eq!(arena.height(), 600.0);
    }

    #[test]
    fn test_viewport_small_screen() {
        let arena = viewport_arena(360.0, 640.0);
        assert!((arena.width() - 324.0).abs() < 0.001);
        assert!((arena.height() - 448.0).abs() < 0.001);
        assert!((arena.ball_radius() - 16.2).abs() < 0.001);
    }

    #[test]
    fn test_viewport_zero_window() {
        let arena = viewport_arena(0.0, 0.0);
        assert_eq!(arena.width(), MIN_ARENA_DIMENSION);
        assert_eq!(arena.height(), MIN_ARENA_DIMENSION);
    }

    #[test]
    fn test_pointer_event_is_rect_relative() {
        let event = pointer_event(250.0, 410.0, Vec2::new(50.0, 110.0), 1234.0);
        assert_eq!(event.pos, Vec2::new(200.0, 300.0));
        assert_eq!(event.timestamp, 1234.0);
    }
}
