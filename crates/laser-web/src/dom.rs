use crate::input::backing_size;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

#[inline]
pub fn measured_backing_size(el: &web::Element) -> (u32, u32) {
    let rect = el.get_bounding_client_rect();
    backing_size(rect.width(), rect.height(), device_pixel_ratio())
}

/// Append a full-size canvas to `container`, with its backing store sized to
/// the container's CSS size times devicePixelRatio.
pub fn create_canvas(container: &web::HtmlElement) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = container
        .owner_document()
        .ok_or_else(|| anyhow::anyhow!("container is not attached to a document"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let style = canvas.style();
    for (prop, value) in [
        ("display", "block"),
        ("width", "100%"),
        ("height", "100%"),
        ("pointer-events", "none"),
    ] {
        style
            .set_property(prop, value)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    }

    let (w, h) = measured_backing_size(container);
    canvas.set_width(w);
    canvas.set_height(h);
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    Ok(canvas)
}

/// WebGPU is exposed as `navigator.gpu`; absent on browsers without it.
pub fn has_webgpu() -> bool {
    web::window()
        .and_then(|w| js_sys::Reflect::get(&w.navigator(), &"gpu".into()).ok())
        .map(|gpu| !gpu.is_undefined() && !gpu.is_null())
        .unwrap_or(false)
}
