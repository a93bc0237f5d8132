//! Short-lived visual particles spawned in bursts.

use std::f32::consts::TAU;

use rand::Rng;

use super::{PARTICLE_COLOR, PARTICLE_LIFE, PARTICLE_MAX_SPEED};

/// 8-bit RGBA colour, independent of the renderer's colour type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    /// Remaining ticks; the particle is dropped the tick this reaches 0.
    pub life: u32,
    pub color: Rgba,
    pub size: f32,
}

impl Particle {
    /// Advances one tick and fades the alpha linearly with remaining life.
    /// Returns false once the particle has expired.
    pub fn tick(&mut self) -> bool {
        if self.life == 0 {
            return false;
        }
        self.x += self.dx;
        self.y += self.dy;
        self.life -= 1;
        self.color.a = (self.life as f32 / PARTICLE_LIFE as f32 * 255.0) as u8;
        self.life > 0
    }
}

/// Spawns `count` particles at the origin, scattered in every direction.
pub fn create_burst<R: Rng>(x: f32, y: f32, count: usize, rng: &mut R) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let angle = rng.random_range(0.0..TAU);
            let speed = rng.random_range(0.0..=PARTICLE_MAX_SPEED);
            Particle {
                x,
                y,
                dx: angle.cos() * speed,
                dy: angle.sin() * speed,
                life: PARTICLE_LIFE,
                color: PARTICLE_COLOR,
                size: rng.random_range(1.0..4.0),
            }
        })
        .collect()
}

/// Ticks every particle, dropping expired ones while keeping the order of the rest.
pub fn update_particles(particles: &mut Vec<Particle>) {
    particles.retain_mut(Particle::tick);
}
