//! Ambient dust particles driven by a cheap sinusoidal force field.

use bevy::math::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ParticleTuning {
    /// Particles allocated per loaded level.
    pub count: usize,
    /// Shortest lifetime in frames.
    pub lifetime_min: i32,
    /// Lifetimes are drawn from [lifetime_min, lifetime_min + lifetime_range).
    pub lifetime_range: i32,
    pub thermal_strength: f32,
    pub turbulence: f32,
    pub drift: f32,
    /// Per-tick velocity damping factor.
    pub resistance: f32,
}

impl Default for ParticleTuning {
    fn default() -> Self {
        Self {
            count: 48,
            lifetime_min: 600,
            lifetime_range: 600,
            thermal_strength: 15.0,
            turbulence: 8.0,
            drift: 5.0,
            resistance: 0.92,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub frames_to_live: i32,
    /// Phase offset that keeps particles sharing one force field out of sync.
    pub seed: f32,
}

impl Particle {
    /// Spawn at rest somewhere inside `bounds` with a fresh lifetime and phase.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2, tuning: &ParticleTuning) -> Self {
        let x = rng.random_range(0.0..bounds.x.max(1.0));
        let y = rng.random_range(0.0..bounds.y.max(1.0));
        let jitter = if tuning.lifetime_range > 0 {
            rng.random_range(0..tuning.lifetime_range)
        } else {
            0
        };

        Self {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            frames_to_live: tuning.lifetime_min + jitter,
            seed: rng.random_range(0..=1000) as f32 * 0.01,
        }
    }

    /// Force acting on the particle at its current position. `drift_sign` flips the
    /// horizontal drift (+1 pushes right, -1 pushes left).
    pub fn force(&self, drift_sign: f32, tuning: &ParticleTuning) -> Vec2 {
        let px = self.position.x * 0.01;
        let py = self.position.y * 0.01;
        let seed = self.seed;

        let thermal = (py * 2.1 + seed).sin() * tuning.thermal_strength;
        let turbulence_x = (px * 3.7 + seed * 1.3).sin() * tuning.turbulence;
        let turbulence_y = (py * 2.9 + seed * 0.7).cos() * tuning.turbulence * 0.6;
        let drift = tuning.drift + (px * 1.5 + seed).sin() * tuning.drift * 0.3;

        Vec2::new(drift * drift_sign + turbulence_x, thermal + turbulence_y)
    }

    /// Damp velocity toward the force field, integrate, and burn one frame of lifetime.
    pub fn step(&mut self, delta: f32, drift_sign: f32, tuning: &ParticleTuning) {
        let force = self.force(drift_sign, tuning);
        self.velocity = self.velocity * tuning.resistance + force * delta;
        self.position += self.velocity * delta;
        self.frames_to_live -= 1;
    }

    pub fn is_expired(&self) -> bool {
        self.frames_to_live < 0
    }
}
