//! Property tests for the simulation invariants

use glam::Vec2;
use proptest::prelude::*;

use tap_ball::ScoreLedger;
use tap_ball::consts::CLICK_COOLDOWN_MS;
use tap_ball::persistence::MemoryStore;
use tap_ball::sim::{Arena, Attempt, Ball, InputGate, PointerEvent, Session, SessionState, step};

#[derive(Debug, Clone)]
enum Op {
    Tick,
    /// Click the ball center `dt` ms after the previous event
    ClickBall(f64),
    /// Click an arbitrary point
    ClickAt(f32, f32, f64),
    Pause,
    Resume,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => Just(Op::Tick),
        3 => (0.0f64..300.0).prop_map(Op::ClickBall),
        1 => (-100.0f32..500.0, -100.0f32..700.0, 0.0f64..300.0)
            .prop_map(|(x, y, dt)| Op::ClickAt(x, y, dt)),
        1 => Just(Op::Pause),
        1 => Just(Op::Resume),
    ]
}

fn ball() -> impl Strategy<Value = Ball> {
    (
        0.0f32..400.0,
        0.0f32..600.0,
        -15.0f32..15.0,
        -15.0f32..15.0,
        5.0f32..40.0,
        1.0f32..1.2,
    )
        .prop_map(|(x, y, vx, vy, radius, hit_scale)| Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            radius,
            hit_scale,
        })
}

fn new_session() -> Session {
    let arena = Arena::new(400.0, 600.0).unwrap();
    Session::new(arena, ScoreLedger::load(MemoryStore::new()), 42)
}

proptest! {
    #[test]
    fn reflection_preserves_speed(mut b in ball()) {
        let arena = Arena::new(400.0, 600.0).unwrap();
        let before = b.vel;
        let result = step(&mut b, &arena);

        prop_assert_eq!(b.vel.x.abs(), before.x.abs());
        prop_assert_eq!(b.vel.y.abs(), before.y.abs());
        let expected_vx = if result.reflected_x { -before.x } else { before.x };
        let expected_vy = if result.reflected_y { -before.y } else { before.y };
        prop_assert_eq!(b.vel, Vec2::new(expected_vx, expected_vy));
    }

    #[test]
    fn hit_scale_never_below_one(mut b in ball(), ticks in 1usize..40) {
        let arena = Arena::new(400.0, 600.0).unwrap();
        let mut last = b.hit_scale;
        for _ in 0..ticks {
            step(&mut b, &arena);
            prop_assert!(b.hit_scale >= 1.0);
            prop_assert!(b.hit_scale <= last);
            last = b.hit_scale;
        }
    }

    #[test]
    fn second_event_inside_cooldown_is_rate_limited(
        b in ball(),
        t0 in 0.0f64..1e9,
        dt in -1e6f64..(CLICK_COOLDOWN_MS - 0.001),
        x in -1000.0f32..1000.0,
        y in -1000.0f32..1000.0,
    ) {
        let mut gate = InputGate::new();
        let first = gate.accept(&PointerEvent::new(x, y, t0), &b);
        prop_assert_ne!(first, Attempt::RateLimited);

        let second = gate.accept(&PointerEvent { pos: b.pos, timestamp: t0 + dt }, &b);
        prop_assert_eq!(second, Attempt::RateLimited);
        prop_assert_eq!(gate.last_accepted(), Some(t0));
    }

    #[test]
    fn score_never_decreases_while_running(ops in prop::collection::vec(op(), 1..200)) {
        let mut s = new_session();
        s.start();
        prop_assert_eq!(s.score(), 0);

        let mut now = 0.0;
        let mut last_score = 0;
        let mut last_scale = s.ball().hit_scale;
        for op in ops {
            match op {
                Op::Tick => { s.tick(); }
                Op::ClickBall(dt) => {
                    now += dt;
                    let pos = s.ball().pos;
                    s.pointer(&PointerEvent { pos, timestamp: now });
                }
                Op::ClickAt(x, y, dt) => {
                    now += dt;
                    s.pointer(&PointerEvent::new(x, y, now));
                }
                Op::Pause => { s.pause(); }
                Op::Resume => { s.resume(); }
            }

            let scale = s.ball().hit_scale;
            prop_assert!(scale >= 1.0);
            if s.score() == last_score {
                // Only a hit may raise the scale
                prop_assert!(scale <= last_scale);
            }
            prop_assert!(s.score() >= last_score);
            last_score = s.score();
            last_scale = scale;

            if s.state() == SessionState::Ended {
                break;
            }
        }

        if s.state() == SessionState::Ended {
            prop_assert_eq!(s.best_score(), s.score());
            s.start();
            prop_assert_eq!(s.score(), 0);
        }
    }

    #[test]
    fn pause_twice_is_idempotent(ticks in 0usize..50) {
        let mut s = new_session();
        s.start();
        for _ in 0..ticks {
            s.tick();
        }
        s.pause();
        let snap = s.snapshot();
        s.pause();
        prop_assert_eq!(s.snapshot(), snap);
        prop_assert_eq!(s.state(), SessionState::Paused);
    }

    #[test]
    fn miss_distance_ends_session(angle in 0.0f32..std::f32::consts::TAU, factor in 1.51f32..5.0) {
        let mut s = new_session();
        s.start();
        let b = *s.ball();
        let pos = b.pos + Vec2::from_angle(angle) * b.radius * factor;

        prop_assert_eq!(s.pointer(&PointerEvent { pos, timestamp: 0.0 }), Some(Attempt::Miss));
        prop_assert_eq!(s.state(), SessionState::Ended);
        prop_assert_eq!(s.best_score(), 0);
    }
}
