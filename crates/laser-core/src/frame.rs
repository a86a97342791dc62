use crate::params::RenderParameters;
use glam::Vec2;

/// Per-frame mutable state owned by the frame driver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameState {
    pub time: f32,
    pub flow_time: f32,
    pub fog_time: f32,
    pub resolution: Vec2,
    /// Pointer in surface pixels, y up from the bottom edge.
    pub pointer: Vec2,
}

impl FrameState {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            time: 0.0,
            flow_time: 0.0,
            fog_time: 0.0,
            resolution: clamp_size(width, height),
            pointer: Vec2::ZERO,
        }
    }

    /// Recompute the time uniforms from elapsed seconds and the current
    /// parameter snapshot.
    pub fn advance(&mut self, elapsed_sec: f32, params: &RenderParameters) {
        self.time = elapsed_sec;
        self.flow_time = elapsed_sec * params.flow_speed;
        self.fog_time = elapsed_sec * params.fog_fall_speed;
    }

    pub fn set_resolution(&mut self, width: u32, height: u32) {
        self.resolution = clamp_size(width, height);
    }

    /// Record a pointer position given in top-left-origin surface pixels.
    pub fn set_pointer_from_top_left(&mut self, x: f32, y_from_top: f32) {
        self.pointer = Vec2::new(x, self.resolution.y - y_from_top);
    }

    pub fn width(&self) -> u32 {
        self.resolution.x as u32
    }

    pub fn height(&self) -> u32 {
        self.resolution.y as u32
    }
}

#[inline]
fn clamp_size(width: u32, height: u32) -> Vec2 {
    Vec2::new(width.max(1) as f32, height.max(1) as f32)
}
