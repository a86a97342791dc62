use crate::input::PointerState;
use crate::render::GpuSurface;
use instant::Instant;
use laser_core::BeamRenderer;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedRenderer = Rc<RefCell<BeamRenderer<GpuSurface>>>;
type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame driver. Reschedules itself while the renderer keeps
/// drawing; a draw error or a non-running renderer ends the chain.
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl FrameLoop {
    pub fn start(renderer: SharedRenderer, pointer: Rc<RefCell<PointerState>>) -> Self {
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let started = Instant::now();

        let raf_tick = raf_id.clone();
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            raf_tick.set(None);
            let keep_going = {
                let mut r = renderer.borrow_mut();
                let p = *pointer.borrow();
                if p.seen {
                    r.set_pointer(p.x, p.y);
                }
                // the renderer logs the draw error itself
                r.render_frame(started.elapsed().as_secs_f32())
                    .unwrap_or(false)
            };
            if keep_going {
                raf_tick.set(request_frame(&tick_clone));
            } else {
                log::info!("[frame] loop ended");
            }
        }) as Box<dyn FnMut()>));

        raf_id.set(request_frame(&tick));
        Self { raf_id, tick }
    }

    /// Cancel the pending callback and drop the tick closure. Never called
    /// from inside the tick.
    pub fn stop(&mut self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let closure = slot.as_ref()?;
    w.request_animation_frame(closure.as_ref().unchecked_ref()).ok()
}
