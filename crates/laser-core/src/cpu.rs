use crate::error::Result;
use crate::frame::FrameState;
use crate::params::RenderParameters;
use crate::renderer::BeamSurface;
use crate::shade::shade;
use glam::{Vec2, Vec3};

/// Software surface evaluating the color function per pixel. Row 0 is the
/// top of the image.
pub struct CpuSurface {
    width: u32,
    height: u32,
    pixels: Vec<Vec3>,
}

impl CpuSurface {
    pub fn new(width: u32, height: u32) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        Self {
            width,
            height,
            pixels: vec![Vec3::ZERO; pixel_count(width, height)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Vec3] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, row: u32) -> Vec3 {
        self.pixels[row as usize * self.width as usize + x as usize]
    }

    /// Clamp to [0, 1] and quantize to RGBA8 with opaque alpha.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for p in &self.pixels {
            let c = p.clamp(Vec3::ZERO, Vec3::ONE) * 255.0 + Vec3::splat(0.5);
            out.extend_from_slice(&[c.x as u8, c.y as u8, c.z as u8, 255]);
        }
        out
    }
}

impl BeamSurface for CpuSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.pixels = vec![Vec3::ZERO; pixel_count(self.width, self.height)];
    }

    fn draw(&mut self, frame: &FrameState, params: &RenderParameters) -> Result<()> {
        let w = self.width as usize;
        let h = self.height;
        for (row, line) in self.pixels.chunks_exact_mut(w).enumerate() {
            // flip to the bottom-left fragment origin
            let fy = (h as usize - 1 - row) as f32 + 0.5;
            for (x, px) in line.iter_mut().enumerate() {
                *px = shade(Vec2::new(x as f32 + 0.5, fy), frame, params);
            }
        }
        Ok(())
    }

    fn release(&mut self) {
        self.pixels = Vec::new();
    }
}

/// Buffer length for a `width` x `height` surface, computed in `usize` so
/// large snapshots cannot wrap.
#[inline]
pub(crate) fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// Render a single reference frame at `time_sec` on the CPU.
pub fn render_reference(
    width: u32,
    height: u32,
    time_sec: f32,
    params: &RenderParameters,
) -> CpuSurface {
    let mut surface = CpuSurface::new(width, height);
    let mut frame = FrameState::new(width, height);
    frame.advance(time_sec, params);
    // CPU drawing cannot fail
    let _ = surface.draw(&frame, params);
    surface
}
