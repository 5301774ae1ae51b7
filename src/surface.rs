// Drawing abstraction so the field can render to a real canvas in the
// browser and to a recording double in headless tests

use crate::color::Color;
use vecmath::Vector2;

/// The three primitives the particle field needs from its drawing surface.
///
/// The surface is handed in explicitly at render time; the simulation never
/// touches the document itself.
pub trait Surface {
    /// Wipe the whole surface before a frame is drawn.
    fn clear(&mut self, width: f64, height: f64);

    /// Filled circle for a single particle.
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color);

    /// One-pixel-wide line between two particles.
    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, color: Color);
}
