//! Per-tick ball physics
//!
//! Integrate, reflect off the arena walls, decay the hit pop. The reflection
//! only flips the velocity sign; the ball may sit partly outside the arena for
//! the tick on which it reflects and is carried back in on the next one.

use super::state::{Arena, Ball};
use crate::consts::HIT_SCALE_DECAY;

/// Which walls the ball bounced off during a step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepResult {
    /// Left or right wall
    pub reflected_x: bool,
    /// Top or bottom wall
    pub reflected_y: bool,
}

impl StepResult {
    pub fn reflected(&self) -> bool {
        self.reflected_x || self.reflected_y
    }
}

/// Advance the ball by one tick
pub fn step(ball: &mut Ball, arena: &Arena) -> StepResult {
    ball.pos += ball.vel;

    let reflected_x = overlaps_wall(ball.pos.x, ball.radius, arena.width());
    if reflected_x {
        ball.vel.x = -ball.vel.x;
    }
    let reflected_y = overlaps_wall(ball.pos.y, ball.radius, arena.height());
    if reflected_y {
        ball.vel.y = -ball.vel.y;
    }

    decay_hit_scale(ball);

    StepResult {
        reflected_x,
        reflected_y,
    }
}

/// Pure form of [`step`]
pub fn stepped(ball: &Ball, arena: &Arena) -> Ball {
    let mut next = *ball;
    step(&mut next, arena);
    next
}

#[inline]
fn overlaps_wall(center: f32, radius: f32, extent: f32) -> bool {
    center + radius > extent || center - radius < 0.0
}

fn decay_hit_scale(ball: &mut Ball) {
    if ball.hit_scale > 1.0 {
        ball.hit_scale = (ball.hit_scale - HIT_SCALE_DECAY).max(1.0);
    }
}
