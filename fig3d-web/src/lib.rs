/// fig3d Web - WASM facade over a fig3d scene
///
/// JavaScript owns the WebGL context and the draw calls. This crate owns the
/// figures: it hands out vertex buffers once and fresh model matrices every
/// frame.
use std::time::Duration;

use fig3d_core::{Figure, ProjectionMode, Scene};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WebScene {
    scene: Scene,
}

#[wasm_bindgen]
impl WebScene {
    /// Demo scene with its clock starting at `now_ms`
    #[wasm_bindgen(constructor)]
    pub fn new(now_ms: f64) -> Result<WebScene, JsValue> {
        let scene = Scene::demo(to_duration(now_ms)).map_err(to_js_error)?;
        log::info!("web scene ready with {} figures", scene.len());
        Ok(WebScene { scene })
    }

    /// Advance every figure to `now_ms`, a `performance.now()` timestamp
    pub fn update(&mut self, now_ms: f64) {
        self.scene.update(to_duration(now_ms));
    }

    /// Advance every figure to the page's current time
    pub fn tick(&mut self) -> Result<(), JsValue> {
        let now_ms = web_sys::window()
            .and_then(|window| window.performance())
            .map(|performance| performance.now())
            .ok_or_else(|| JsValue::from_str("performance clock unavailable"))?;
        self.update(now_ms);
        Ok(())
    }

    #[wasm_bindgen(js_name = figureCount)]
    pub fn figure_count(&self) -> usize {
        self.scene.len()
    }

    /// Flat xyz vertex positions of figure `index`
    pub fn positions(&self, index: usize) -> Result<Vec<f32>, JsValue> {
        Ok(self.figure(index)?.mesh.flat_positions())
    }

    /// Flat rgb vertex colors of figure `index`
    pub fn colors(&self, index: usize) -> Result<Vec<f32>, JsValue> {
        Ok(self.figure(index)?.mesh.flat_colors())
    }

    pub fn indices(&self, index: usize) -> Result<Vec<u16>, JsValue> {
        Ok(self.figure(index)?.mesh.indices().to_vec())
    }

    /// GL primitive constant (`TRIANGLES` or `TRIANGLE_FAN`) for figure `index`
    #[wasm_bindgen(js_name = primitiveMode)]
    pub fn primitive_mode(&self, index: usize) -> Result<u32, JsValue> {
        Ok(self.figure(index)?.mesh.primitive().gl_mode())
    }

    /// Column-major model matrix of figure `index`
    pub fn transform(&self, index: usize) -> Result<Vec<f32>, JsValue> {
        Ok(self.figure(index)?.model().as_slice().to_vec())
    }

    /// Column-major projection times view matrix for a canvas of `aspect`
    pub fn projection(&self, aspect: f32) -> Vec<f32> {
        self.scene
            .camera(aspect)
            .view_projection()
            .as_slice()
            .to_vec()
    }

    #[wasm_bindgen(js_name = toggleProjection)]
    pub fn toggle_projection(&mut self) -> bool {
        let mode = self.scene.projection_mode().toggled();
        self.scene.set_projection_mode(mode);
        mode == ProjectionMode::Perspective
    }
}

impl WebScene {
    fn figure(&self, index: usize) -> Result<&Figure, JsValue> {
        self.scene.figure(index).ok_or_else(|| {
            JsValue::from_str(&format!(
                "figure index {} out of range ({} figures)",
                index,
                self.scene.len()
            ))
        })
    }
}

/// Negative or NaN timestamps clamp to zero
fn to_duration(ms: f64) -> Duration {
    if ms.is_finite() && ms > 0.0 {
        Duration::from_secs_f64(ms / 1000.0)
    } else {
        Duration::ZERO
    }
}

fn to_js_error(err: fig3d_core::FigureError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    Ok(())
}
