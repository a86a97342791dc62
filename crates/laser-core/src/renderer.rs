use crate::error::{LaserError, Result};
use crate::frame::FrameState;
use crate::params::RenderParameters;

/// A drawable target for the beam effect: a WebGPU canvas, a native window,
/// or a CPU pixel buffer.
pub trait BeamSurface {
    /// Current drawable size in pixels.
    fn size(&self) -> (u32, u32);

    fn resize(&mut self, width: u32, height: u32);

    /// Draw and present one frame.
    fn draw(&mut self, frame: &FrameState, params: &RenderParameters) -> Result<()>;

    /// Release GPU objects and detach from the host. Called once.
    fn release(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RendererState {
    Uninitialized,
    Running,
    /// A draw failed mid-session; no further frames, resources still held.
    Failed,
    Disposed,
}

/// Lifecycle wrapper around a [`BeamSurface`]: owns the parameter snapshot
/// and frame state, and guarantees frames are produced only while running.
pub struct BeamRenderer<S: BeamSurface> {
    state: RendererState,
    surface: Option<S>,
    params: RenderParameters,
    frame: FrameState,
    frames_drawn: u64,
}

impl<S: BeamSurface> Default for BeamRenderer<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BeamSurface> BeamRenderer<S> {
    pub fn new() -> Self {
        Self {
            state: RendererState::Uninitialized,
            surface: None,
            params: RenderParameters::default(),
            frame: FrameState::new(1, 1),
            frames_drawn: 0,
        }
    }

    /// Take ownership of a freshly created surface and start running.
    ///
    /// A failed surface creation is reported back and leaves the renderer
    /// uninitialized and inert.
    pub fn initialize(&mut self, surface: Result<S>, params: RenderParameters) -> Result<()> {
        if self.state != RendererState::Uninitialized {
            log::warn!("[laser] initialize ignored in state {:?}", self.state);
            return Ok(());
        }
        let surface = match surface {
            Ok(s) => s,
            Err(e) => {
                log::error!("[laser] setup failed: {e}");
                return Err(e);
            }
        };
        let (w, h) = surface.size();
        self.frame = FrameState::new(w, h);
        self.params = params;
        self.surface = Some(surface);
        self.state = RendererState::Running;
        log::info!("[laser] running at {}x{}", self.frame.width(), self.frame.height());
        Ok(())
    }

    /// Replace the whole parameter snapshot; used from the next frame on.
    pub fn update_parameters(&mut self, params: RenderParameters) {
        if !self.is_live() {
            log::debug!("[laser] update ignored in state {:?}", self.state);
            return;
        }
        self.params = params;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if !self.is_live() {
            log::debug!("[laser] resize ignored in state {:?}", self.state);
            return;
        }
        self.frame.set_resolution(width, height);
        let (w, h) = (self.frame.width(), self.frame.height());
        if let Some(s) = self.surface.as_mut() {
            s.resize(w, h);
        }
    }

    /// Record the pointer in top-left-origin surface pixels.
    pub fn set_pointer(&mut self, x: f32, y_from_top: f32) {
        if self.is_live() {
            self.frame.set_pointer_from_top_left(x, y_from_top);
        }
    }

    /// Produce one frame for `elapsed_sec` since start.
    ///
    /// `Ok(true)` when a frame was drawn, `Ok(false)` when the renderer is not
    /// running. A draw error moves the renderer to `Failed` and is returned
    /// once; later calls yield `Ok(false)`.
    pub fn render_frame(&mut self, elapsed_sec: f32) -> Result<bool> {
        if self.state != RendererState::Running {
            return Ok(false);
        }
        let Some(surface) = self.surface.as_mut() else {
            return Ok(false);
        };
        self.frame.advance(elapsed_sec, &self.params);
        match surface.draw(&self.frame, &self.params) {
            Ok(()) => {
                self.frames_drawn += 1;
                Ok(true)
            }
            Err(e) => {
                log::error!("[laser] stopping after draw error: {e}");
                self.state = RendererState::Failed;
                Err(e)
            }
        }
    }

    /// Stop producing frames and release the surface. Repeated calls are
    /// harmless.
    pub fn dispose(&mut self) {
        if self.state == RendererState::Disposed {
            log::debug!("[laser] dispose called twice");
            return;
        }
        if let Some(mut s) = self.surface.take() {
            s.release();
        }
        self.state = RendererState::Disposed;
        log::info!("[laser] disposed after {} frames", self.frames_drawn);
    }

    pub fn state(&self) -> RendererState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RendererState::Running
    }

    pub fn parameters(&self) -> &RenderParameters {
        &self.params
    }

    pub fn frame(&self) -> &FrameState {
        &self.frame
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    fn is_live(&self) -> bool {
        matches!(self.state, RendererState::Running | RendererState::Failed)
    }
}

/// Helper for front-ends that detect a missing context before building a
/// surface.
pub fn setup_error(msg: impl Into<String>) -> LaserError {
    LaserError::Setup(msg.into())
}
