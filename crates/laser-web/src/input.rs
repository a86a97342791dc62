use glam::Vec2;

/// Last known pointer position in canvas backing pixels, top-left origin.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub seen: bool,
}

impl PointerState {
    #[inline]
    pub fn record(&mut self, pos: Vec2) {
        self.x = pos.x;
        self.y = pos.y;
        self.seen = true;
    }
}

/// Map a client-space position onto the backing store of an element whose
/// bounding rect starts at `rect_origin` with CSS size `rect_size`.
#[inline]
pub fn client_to_backing_px(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    backing: (u32, u32),
) -> Vec2 {
    let local = client - rect_origin;
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return local;
    }
    Vec2::new(
        (local.x / rect_size.x) * backing.0 as f32,
        (local.y / rect_size.y) * backing.1 as f32,
    )
}

/// CSS size times device pixel ratio, never below 1x1.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let w = (css_width * dpr) as u32;
    let h = (css_height * dpr) as u32;
    (w.max(1), h.max(1))
}
