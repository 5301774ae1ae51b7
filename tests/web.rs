#![cfg(target_arch = "wasm32")]

use particle_field::ParticleCanvas;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn canvas_wrapper_runs_frames() {
    let mut canvas = ParticleCanvas::new(640.0, 480.0);
    canvas.set_cursor(320.0, 240.0);
    for _ in 0..10 {
        canvas.update();
    }
    assert_eq!(canvas.particle_count(), 50);
}
