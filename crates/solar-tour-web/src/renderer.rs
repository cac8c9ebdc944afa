//! `Renderer` backed by a page canvas and a JS draw callback.
//!
//! Rust owns the scene; the page owns the GPU. Every frame the callback
//! receives the camera, the light, the packed mesh instances, the label
//! outlines and the loaded images and models those instances refer to:
//!
//! ```text
//! draw(camera: Float32Array[36], light: Float32Array[12],
//!      instances: Float32Array[24 * n], labels: Array<{ model, color, depth, contours }>,
//!      resources: { textures: Map<handle, HTMLImageElement>, models: Map<handle, Uint8Array> })
//! ```
//!
//! The callback runs while the runner is borrowed. It must not call any
//! `tour_*` export; everything it needs is in its arguments.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Float32Array, Function, Object, Reflect};
use solar_tour::components::light::LightKind;
use solar_tour::{DrawTiming, FrameData, Light, Renderer};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Performance};

use crate::assets::AssetStore;

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    draw: Function,
    store: Rc<RefCell<AssetStore>>,
    performance: Option<Performance>,
    disposed: bool,
    pixel_ratio: f32,
}

impl CanvasRenderer {
    pub fn new(
        canvas: HtmlCanvasElement,
        draw: Function,
        store: Rc<RefCell<AssetStore>>,
        pixel_ratio: f32,
    ) -> Self {
        let performance = web_sys::window().and_then(|w| w.performance());
        Self {
            canvas,
            draw,
            store,
            performance,
            disposed: false,
            pixel_ratio,
        }
    }

    fn now(&self) -> f64 {
        self.performance.as_ref().map_or(0.0, |p| p.now())
    }
}

/// kind (0 point, 1 directional) | color rgb | intensity | position xyz |
/// distance | decay | ambient | pad
fn light_floats(light: &Light) -> [f32; 12] {
    let (kind, distance, decay) = match light.kind {
        LightKind::Point { distance, decay } => (0.0, distance, decay),
        LightKind::Directional => (1.0, 0.0, 0.0),
    };
    let [r, g, b] = light.color.to_array();
    let [x, y, z] = light.position.to_array();
    [
        kind,
        r,
        g,
        b,
        light.intensity,
        x,
        y,
        z,
        distance,
        decay,
        light.ambient,
        0.0,
    ]
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    Reflect::set(target, &JsValue::from_str(key), value).map(|_| ())
}

fn label_objects(frame: &FrameData) -> Result<Array, JsValue> {
    let labels = Array::new();
    for label in frame.labels {
        let object = Object::new();
        set(&object, "model", &Float32Array::from(&label.model.to_cols_array()[..]))?;
        set(&object, "color", &Float32Array::from(&label.color.to_array()[..]))?;
        set(&object, "depth", &JsValue::from_f64(f64::from(label.geometry.depth)))?;
        let contours = Array::new();
        for contour in &label.geometry.contours {
            let points: &[f32] = bytemuck::cast_slice(contour.as_slice());
            contours.push(&Float32Array::from(points));
        }
        set(&object, "contours", &contours)?;
        labels.push(&object);
    }
    Ok(labels)
}

impl Renderer for CanvasRenderer {
    fn backend(&self) -> &'static str {
        "canvas"
    }

    fn draw(&mut self, frame: &FrameData) -> DrawTiming {
        if self.disposed {
            return DrawTiming::default();
        }
        let start = self.now();

        // view (16) | projection (16) | eye xyz + 1
        let camera: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&frame.camera));
        let camera = Float32Array::from(camera);
        let light = Float32Array::from(&light_floats(frame.light)[..]);
        let floats: &[f32] = bytemuck::cast_slice(frame.instances);
        let instances = Float32Array::from(floats);

        let resources = self.store.borrow().resources_for(frame.instances);
        let result = resources.and_then(|resources| {
            let labels = label_objects(frame)?;
            let args = Array::of5(&camera, &light, &instances, &labels, &resources);
            self.draw.apply(&JsValue::NULL, &args)
        });
        if let Err(err) = result {
            log::error!("draw callback failed: {err:?}");
        }

        DrawTiming {
            draw_us: ((self.now() - start) * 1000.0) as u32,
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        let style = self.canvas.style();
        let css = |v: u32| format!("{}px", v as f32 / self.pixel_ratio);
        if let Err(err) = style
            .set_property("width", &css(width))
            .and_then(|_| style.set_property("height", &css(height)))
        {
            log::warn!("canvas style update failed: {err:?}");
        }
    }

    fn dispose(&mut self) {
        self.disposed = true;
        // shrinking the backing store lets the browser drop it right away
        self.canvas.set_width(0);
        self.canvas.set_height(0);
    }
}
