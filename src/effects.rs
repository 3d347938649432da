//! Cosmetic hit effects
//!
//! Particle bursts and the ball color cycle. Nothing here affects scoring.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Ball colors, cycled on every hit (0xRRGGBB)
pub const BALL_PALETTE: [u32; 5] = [
    0x10b981, // Emerald
    0x3b82f6, // Blue
    0xf43f5e, // Rose
    0xf59e0b, // Amber
    0x8b5cf6, // Purple
];

/// Index into [`BALL_PALETTE`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteCursor(usize);

impl PaletteCursor {
    pub fn color(self) -> u32 {
        BALL_PALETTE[self.0 % BALL_PALETTE.len()]
    }

    /// Step to the next color, wrapping
    pub fn advance(&mut self) -> u32 {
        self.0 = (self.0 + 1) % BALL_PALETTE.len();
        self.color()
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

/// Format a 0xRRGGBB color for CSS / canvas styles
pub fn css_color(color: u32) -> String {
    format!("#{:06x}", color & 0xff_ffff)
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: u32,
    /// Ticks left
    pub life: u32,
}

impl Particle {
    /// Opacity, fading linearly with remaining life
    pub fn alpha(&self) -> f32 {
        self.life as f32 / PARTICLE_LIFE_TICKS as f32
    }
}

/// Live hit particles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a burst at `pos`
    pub fn burst<R: Rng + ?Sized>(&mut self, rng: &mut R, pos: Vec2, color: u32) {
        self.particles.reserve(PARTICLES_PER_HIT);
        for _ in 0..PARTICLES_PER_HIT {
            let vel = Vec2::new(
                rng.random_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
                rng.random_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
            );
            self.particles.push(Particle {
                pos,
                vel,
                radius: rng.random_range(PARTICLE_MIN_RADIUS..PARTICLE_MAX_RADIUS),
                color,
                life: PARTICLE_LIFE_TICKS,
            });
        }
    }

    /// Move, age and shrink every particle; drop the dead ones
    pub fn update(&mut self) {
        for p in self.particles.iter_mut() {
            p.pos += p.vel;
            p.life = p.life.saturating_sub(1);
            p.radius *= PARTICLE_SHRINK;
        }
        self.particles.retain(|p| p.life > 0);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
