// Simple particle struct keeping track of position, velocity, spawn origin,
// radius, and display color

use crate::color::Color;
use vecmath::Vector2;

pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    /// Spawn position; the particle eases back here when the cursor is
    /// out of range. Never changes after creation.
    pub origin: Vector2<f64>,
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub const MIN_RADIUS: f64 = 1.0;
    pub const MAX_RADIUS: f64 = 3.0;
    /// Largest magnitude of a spawn velocity component.
    pub const MAX_SPEED: f64 = 0.25;

    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, radius: f64, color: Color) -> Particle {
        Particle {
            pos,
            vel,
            origin: pos,
            radius,
            color,
        }
    }

    /// Offset of the current position from the spawn origin.
    pub fn displacement(&self) -> Vector2<f64> {
        vecmath::vec2_sub(self.pos, self.origin)
    }
}
