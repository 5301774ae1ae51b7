mod utils;

pub mod color;
pub mod field;
pub mod particle;
pub mod renderer;
pub mod surface;

use field::{ParticleField, DEFAULT_COUNT, INFLUENCE_RADIUS};
use renderer::CanvasRenderer;
use vecmath::Vector2;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

/// Canvas-backed particle background.
///
/// The hosting page owns the canvas and the frame loop: it calls `update`
/// and then `render` once per `requestAnimationFrame` tick, and forwards
/// pointer-move and viewport-resize events through `set_cursor` and
/// `resize`. Nothing here touches the document.
#[wasm_bindgen]
pub struct ParticleCanvas {
    field: ParticleField,
    cursor: Vector2<f64>,
}

#[wasm_bindgen]
impl ParticleCanvas {
    pub fn new(width: f64, height: f64) -> ParticleCanvas {
        ParticleCanvas::with_count(width, height, DEFAULT_COUNT as u32)
    }

    pub fn with_count(width: f64, height: f64, count: u32) -> ParticleCanvas {
        let mut rng = rand::thread_rng();
        ParticleCanvas {
            field: ParticleField::new(width, height, count as usize, &mut rng),
            cursor: [0.0, 0.0],
        }
    }

    /// Viewport-resize handler: the particle set is regenerated from
    /// scratch for the new dimensions.
    pub fn resize(&mut self, width: f64, height: f64) {
        let mut rng = rand::thread_rng();
        self.field.reset(width, height, &mut rng);
    }

    /// Pointer-move handler. The stored position is read-only input to
    /// the next `update`.
    pub fn set_cursor(&mut self, x: f64, y: f64) {
        self.cursor = [x, y];
    }

    /// Advance the simulation one display frame.
    pub fn update(&mut self) {
        self.field.update(self.cursor, INFLUENCE_RADIUS);
    }

    /// Draw the current frame onto the page's 2D context.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        let mut renderer = CanvasRenderer::new(ctx);
        self.field.render(&mut renderer);
    }

    pub fn particle_count(&self) -> u32 {
        self.field.particles.len() as u32
    }
}
