#![cfg(target_arch = "wasm32")]
use laser_core::{setup_error, BeamRenderer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;
mod options;
mod render;

use events::PointerListener;
use frame::{FrameLoop, SharedRenderer};
use input::PointerState;
use render::GpuSurface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("laser-web loaded");
    Ok(())
}

/// Handle to a mounted beam effect. Obtained from [`mount_laser_flow`].
#[wasm_bindgen]
pub struct LaserFlow {
    container: web::HtmlElement,
    renderer: SharedRenderer,
    frame_loop: Option<FrameLoop>,
    pointer_listener: Option<PointerListener>,
}

/// Mount the effect into `container`, sized to it, with `options` read as a
/// plain object (see [`LaserFlow::update`]). Rejects when WebGPU is
/// unavailable or the device cannot be created; nothing is left attached.
#[wasm_bindgen(js_name = mountLaserFlow)]
pub async fn mount_laser_flow(
    container: web::HtmlElement,
    options: JsValue,
) -> Result<LaserFlow, JsValue> {
    mount(container, options).await.map_err(|e| {
        log::error!("[laser] mount failed: {:#}", e);
        JsValue::from_str(&format!("{:#}", e))
    })
}

async fn mount(container: web::HtmlElement, options: JsValue) -> anyhow::Result<LaserFlow> {
    let params = options::read_config(&options).to_parameters();
    let renderer: SharedRenderer = Rc::new(RefCell::new(BeamRenderer::new()));

    if !dom::has_webgpu() {
        return Err(setup_error("WebGPU is not available").into());
    }

    let canvas = dom::create_canvas(&container)?;
    let surface = GpuSurface::new(&canvas)
        .await
        .map_err(|e| setup_error(format!("{:#}", e)));
    if surface.is_err() {
        canvas.remove();
    }
    renderer.borrow_mut().initialize(surface, params)?;

    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let pointer_listener = PointerListener::attach(&container, &canvas, pointer.clone());
    let frame_loop = FrameLoop::start(renderer.clone(), pointer);

    Ok(LaserFlow {
        container,
        renderer,
        frame_loop: Some(frame_loop),
        pointer_listener: Some(pointer_listener),
    })
}

#[wasm_bindgen]
impl LaserFlow {
    /// Replace every option at once. Fields missing from `options` revert to
    /// their defaults. Takes effect on the next frame.
    pub fn update(&mut self, options: JsValue) {
        let params = options::read_config(&options).to_parameters();
        self.renderer.borrow_mut().update_parameters(params);
    }

    /// Resize to a CSS size; the backing store follows devicePixelRatio.
    pub fn resize(&mut self, css_width: f64, css_height: f64) {
        let (w, h) = input::backing_size(css_width, css_height, dom::device_pixel_ratio());
        self.renderer.borrow_mut().resize(w, h);
    }

    /// Re-measure the container and resize to it.
    pub fn fit(&mut self) {
        let (w, h) = dom::measured_backing_size(&self.container);
        self.renderer.borrow_mut().resize(w, h);
    }

    /// Stop frames, remove the pointer listener, release the GPU and detach
    /// the canvas. Safe to call repeatedly.
    pub fn dispose(&mut self) {
        if let Some(mut frame_loop) = self.frame_loop.take() {
            frame_loop.stop();
        }
        if let Some(mut listener) = self.pointer_listener.take() {
            listener.detach();
        }
        self.renderer.borrow_mut().dispose();
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.renderer.borrow().is_running()
    }
}

impl Drop for LaserFlow {
    fn drop(&mut self) {
        self.dispose();
    }
}
