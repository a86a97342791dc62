use crate::input::{client_to_backing_px, PointerState};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const POINTER_MOVE: &str = "pointermove";

/// `pointermove` listener scoped to the mount container. Writes the latest
/// position in canvas backing pixels; removed on `detach` or drop.
pub struct PointerListener {
    target: web::HtmlElement,
    closure: Option<Closure<dyn FnMut(web::PointerEvent)>>,
}

impl PointerListener {
    pub fn attach(
        container: &web::HtmlElement,
        canvas: &web::HtmlCanvasElement,
        pointer: Rc<RefCell<PointerState>>,
    ) -> Self {
        let canvas_ptr = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let rect = canvas_ptr.get_bounding_client_rect();
            let pos = client_to_backing_px(
                Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
                Vec2::new(rect.left() as f32, rect.top() as f32),
                Vec2::new(rect.width() as f32, rect.height() as f32),
                (canvas_ptr.width(), canvas_ptr.height()),
            );
            pointer.borrow_mut().record(pos);
        }) as Box<dyn FnMut(web::PointerEvent)>);
        if let Err(e) = container
            .add_event_listener_with_callback(POINTER_MOVE, closure.as_ref().unchecked_ref())
        {
            log::warn!("[input] {} listener not attached: {:?}", POINTER_MOVE, e);
        }
        Self {
            target: container.clone(),
            closure: Some(closure),
        }
    }

    pub fn detach(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback(POINTER_MOVE, closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for PointerListener {
    fn drop(&mut self) {
        self.detach();
    }
}
