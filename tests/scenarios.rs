//! End-to-end gameplay scenarios through the public API

use glam::Vec2;

use tap_ball::ScoreLedger;
use tap_ball::persistence::MemoryStore;
use tap_ball::sim::{
    Arena, Attempt, Ball, GameEvent, NextFrame, PointerEvent, Session, SessionState, stepped,
};

fn arena() -> Arena {
    Arena::new(400.0, 600.0).unwrap()
}

#[test]
fn ball_flies_freely_in_open_space() {
    let ball = Ball {
        pos: Vec2::new(200.0, 300.0),
        vel: Vec2::new(2.0, 2.0),
        radius: 20.0,
        hit_scale: 1.0,
    };
    let next = stepped(&ball, &arena());
    assert_eq!(next.pos, Vec2::new(202.0, 302.0));
    assert_eq!(next.vel, Vec2::new(2.0, 2.0));
}

#[test]
fn ball_bounces_off_right_wall() {
    let ball = Ball {
        pos: Vec2::new(395.0, 300.0),
        vel: Vec2::new(2.0, 2.0),
        radius: 20.0,
        hit_scale: 1.0,
    };
    let next = stepped(&ball, &arena());
    assert_eq!(next.pos.x, 397.0);
    assert_eq!(next.vel, Vec2::new(-2.0, 2.0));
}

#[test]
fn tapping_the_center_scores_and_speeds_up() {
    let mut session = Session::new(arena(), ScoreLedger::load(MemoryStore::new()), 1);
    assert_eq!(session.start(), NextFrame::Request);
    for _ in 0..3 {
        session.tick();
    }
    let before = *session.ball();

    let outcome = session.pointer(&PointerEvent {
        pos: before.pos,
        timestamp: 5_000.0,
    });
    assert_eq!(outcome, Some(Attempt::Hit));
    assert_eq!(session.score(), 1);
    assert!((session.ball().vel.x - before.vel.x * 1.03).abs() < 1e-5);
    assert!((session.ball().vel.y - before.vel.y * 1.03).abs() < 1e-5);
}

#[test]
fn missing_ends_the_game_and_keeps_best() {
    let store = MemoryStore::with_best(3);
    let mut session = Session::new(arena(), ScoreLedger::load(store.clone()), 1);

    // First game: 2 hits, below the stored best
    session.start();
    for i in 0..2 {
        let pos = session.ball().pos;
        session.pointer(&PointerEvent {
            pos,
            timestamp: i as f64 * 200.0,
        });
        session.tick();
    }
    let b = *session.ball();
    let miss = PointerEvent {
        pos: b.pos + Vec2::new(b.radius * 1.6, 0.0),
        timestamp: 1_000.0,
    };
    assert_eq!(session.pointer(&miss), Some(Attempt::Miss));
    assert_eq!(session.state(), SessionState::Ended);
    assert_eq!(session.tick(), NextFrame::Halt);
    assert_eq!(session.best_score(), 3);
    assert_eq!(store.writes(), 0);

    // Second game: 4 hits beats it
    session.start();
    for i in 0..4 {
        let pos = session.ball().pos;
        session.pointer(&PointerEvent {
            pos,
            timestamp: 10_000.0 + i as f64 * 200.0,
        });
    }
    session.stop();
    assert_eq!(session.best_score(), 4);
    assert_eq!(store.stored(), Some(4));

    let ended: Vec<_> = session
        .drain_events()
        .filter(|e| matches!(e, GameEvent::SessionEnded { .. }))
        .collect();
    assert_eq!(
        ended,
        vec![
            GameEvent::SessionEnded {
                final_score: 2,
                new_record: false
            },
            GameEvent::SessionEnded {
                final_score: 4,
                new_record: true
            },
        ]
    );
}
