// The particle field simulator: a fixed-size set of drifting points that
// scatter away from the cursor, ease back to their spawn points, and get
// joined by distance-faded connection lines.

use crate::color::{LINK_COLOR, PALETTE};
use crate::particle::Particle;
use crate::surface::Surface;
use nalgebra_glm as glm;
use rand::Rng;
use vecmath::Vector2;

/// Particle count used when the host doesn't ask for a specific one.
pub const DEFAULT_COUNT: usize = 50;

/// Distance inside which the cursor pushes particles away.
pub const INFLUENCE_RADIUS: f64 = 100.0;

/// Pairs closer than this get a connection line.
pub const LINK_DISTANCE: f64 = 100.0;

/// Positional push, in pixels, applied at zero cursor distance; decays
/// linearly to nothing at the influence boundary.
const REPULSION_STRENGTH: f64 = 5.0;

/// Fraction of the remaining offset recovered per frame when easing back
/// toward the spawn origin.
const RETURN_RATE: f64 = 0.05;

/// Per-axis offset below which a particle counts as settled and the
/// restoring pull stops.
const REST_THRESHOLD: f64 = 0.1;

/// Opacity of the line joining two particles `distance` apart: fades
/// linearly from the base opacity at zero separation to 0 at
/// [`LINK_DISTANCE`], and stays 0 beyond it.
pub fn link_opacity(distance: f64) -> f64 {
    if distance < LINK_DISTANCE {
        LINK_COLOR.a * (1.0 - distance / LINK_DISTANCE)
    } else {
        0.0
    }
}

pub struct ParticleField {
    width: f64,
    height: f64,
    count: usize,
    pub particles: Vec<Particle>,
}

impl ParticleField {
    /// Build a field of `count` particles scattered uniformly over a
    /// `width` x `height` viewport, inset by each particle's radius so
    /// nothing spawns off-canvas.
    pub fn new(width: f64, height: f64, count: usize, rng: &mut impl Rng) -> ParticleField {
        let mut field = ParticleField {
            width,
            height,
            count,
            particles: Vec::new(),
        };
        field.populate(rng);
        field
    }

    /// Replace the whole particle set for a new viewport size. Called on
    /// every resize event; repeat calls are full resets, never additive.
    pub fn reset(&mut self, width: f64, height: f64, rng: &mut impl Rng) {
        self.width = width;
        self.height = height;
        self.populate(rng);
    }

    fn populate(&mut self, rng: &mut impl Rng) {
        self.particles.clear();
        self.particles.reserve(self.count);
        for _ in 0..self.count {
            let radius = rng.gen::<f64>() * (Particle::MAX_RADIUS - Particle::MIN_RADIUS)
                + Particle::MIN_RADIUS;
            let span_x = (self.width - radius * 2.0).max(0.0);
            let span_y = (self.height - radius * 2.0).max(0.0);
            let pos = [
                rng.gen::<f64>() * span_x + radius,
                rng.gen::<f64>() * span_y + radius,
            ];
            let vel = [
                rng.gen::<f64>() * Particle::MAX_SPEED * 2.0 - Particle::MAX_SPEED,
                rng.gen::<f64>() * Particle::MAX_SPEED * 2.0 - Particle::MAX_SPEED,
            ];
            let color = PALETTE[(rng.gen::<f64>() * PALETTE.len() as f64) as usize];
            self.particles.push(Particle::new(pos, vel, radius, color));
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Advance the field one frame. The step order is load-bearing:
    /// repulsion or restoring pull first, then the velocity drift, then
    /// boundary reflection.
    pub fn update(&mut self, cursor: Vector2<f64>, influence_radius: f64) {
        for particle in &mut self.particles {
            let to_cursor = vecmath::vec2_sub(cursor, particle.pos);
            let distance = vecmath::vec2_len(to_cursor);

            if distance < influence_radius {
                // One-shot positional nudge directly away from the cursor,
                // strongest at contact, zero at the influence boundary.
                let force = (influence_radius - distance) / influence_radius;
                let away = if distance > 0.0 {
                    vecmath::vec2_normalized(to_cursor)
                } else {
                    // Cursor exactly on the particle; push along +x like
                    // the atan2(0, 0) = 0 angle the page originally used.
                    [1.0, 0.0]
                };
                let push = vecmath::vec2_scale(away, force * REPULSION_STRENGTH);
                particle.pos = vecmath::vec2_sub(particle.pos, push);
            } else {
                // Ease back toward the spawn origin, axis by axis, once
                // the offset is worth correcting.
                for axis in 0..2 {
                    let offset = particle.pos[axis] - particle.origin[axis];
                    if offset.abs() > REST_THRESHOLD {
                        particle.pos[axis] -= offset * RETURN_RATE;
                    }
                }
            }

            particle.pos = vecmath::vec2_add(particle.pos, particle.vel);

            // Reflect off the viewport edges. The clamp keeps the
            // containment invariant even when a repulsion nudge lands a
            // particle outside the canvas.
            if particle.pos[0] <= 0.0 || particle.pos[0] >= self.width {
                particle.vel[0] = -particle.vel[0];
                particle.pos[0] = particle.pos[0].max(0.0).min(self.width);
            }
            if particle.pos[1] <= 0.0 || particle.pos[1] >= self.height {
                particle.vel[1] = -particle.vel[1];
                particle.pos[1] = particle.pos[1].max(0.0).min(self.height);
            }
        }
    }

    /// Draw the current frame: every particle as a filled circle, then a
    /// line for each pair within [`LINK_DISTANCE`], faded by separation.
    /// The pair pass is O(n^2), fine at the ~50 particles this runs with.
    pub fn render<S: Surface>(&self, surface: &mut S) {
        surface.clear(self.width, self.height);

        for particle in &self.particles {
            surface.fill_circle(particle.pos, particle.radius, particle.color);
        }

        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = &self.particles[i];
                let b = &self.particles[j];
                let distance = glm::length(&glm::vec2(
                    a.pos[0] - b.pos[0],
                    a.pos[1] - b.pos[1],
                ));
                let opacity = link_opacity(distance);
                if opacity > 0.0 {
                    surface.stroke_line(a.pos, b.pos, LINK_COLOR.with_alpha(opacity));
                }
            }
        }
    }
}
