// Host-side lifecycle tests driving the renderer with the CPU surface.

use laser_core::{
    setup_error, BeamRenderer, BeamSurface, CpuSurface, FrameState, LaserConfig, LaserError,
    RenderParameters, RendererState,
};

fn defaults() -> RenderParameters {
    LaserConfig::default().to_parameters()
}

fn center(surface: &CpuSurface) -> glam::Vec3 {
    surface.pixel(surface.width() / 2, surface.height() / 2)
}

#[test]
fn full_lifecycle_at_800_by_500() {
    let mut r: BeamRenderer<CpuSurface> = BeamRenderer::new();
    r.initialize(Ok(CpuSurface::new(800, 500)), defaults())
        .expect("cpu surface never fails");
    assert_eq!(r.state(), RendererState::Running);

    assert_eq!(r.render_frame(0.0).unwrap(), true);
    let c = center(r.surface().unwrap());
    assert!(c.is_finite());
    assert!(c.length() > 0.0);

    r.resize(400, 250);
    assert_eq!(r.render_frame(0.016).unwrap(), true);
    let s = r.surface().unwrap();
    assert_eq!((s.width(), s.height()), (400, 250));
    assert_eq!(s.pixels().len(), 400 * 250);
    assert_eq!(r.frame().width(), 400);
    assert_eq!(r.frame().height(), 250);

    r.dispose();
    assert_eq!(r.state(), RendererState::Disposed);
    let before = *r.parameters();
    let mut changed = before;
    changed.fade = 0.0;
    r.update_parameters(changed);
    assert_eq!(*r.parameters(), before);
    assert_eq!(r.render_frame(0.032).unwrap(), false);
    assert_eq!(r.frames_drawn(), 2);
}

#[test]
fn nothing_is_drawn_before_initialize() {
    let mut r: BeamRenderer<CpuSurface> = BeamRenderer::new();
    r.resize(10, 10);
    r.update_parameters(defaults());
    r.set_pointer(3.0, 4.0);
    assert_eq!(r.render_frame(1.0).unwrap(), false);
    assert_eq!(r.frames_drawn(), 0);
    assert_eq!(r.state(), RendererState::Uninitialized);
    assert!(r.surface().is_none());
}

#[test]
fn setup_failure_leaves_renderer_inert() {
    let mut r: BeamRenderer<CpuSurface> = BeamRenderer::new();
    let err = r
        .initialize(Err(setup_error("no gpu context")), defaults())
        .unwrap_err();
    assert!(matches!(err, LaserError::Setup(_)));
    assert_eq!(r.state(), RendererState::Uninitialized);
    assert_eq!(r.render_frame(0.0).unwrap(), false);
}

#[test]
fn dispose_twice_is_harmless() {
    let mut r: BeamRenderer<CpuSurface> = BeamRenderer::new();
    r.initialize(Ok(CpuSurface::new(8, 8)), defaults()).unwrap();
    r.dispose();
    r.dispose();
    assert_eq!(r.state(), RendererState::Disposed);
    assert!(r.surface().is_none());
}

#[test]
fn dispose_before_initialize_is_terminal() {
    let mut r: BeamRenderer<CpuSurface> = BeamRenderer::new();
    r.dispose();
    r.initialize(Ok(CpuSurface::new(8, 8)), defaults()).unwrap();
    assert_eq!(r.state(), RendererState::Disposed);
    assert_eq!(r.render_frame(0.0).unwrap(), false);
}

#[test]
fn parameter_update_applies_on_next_frame() {
    let mut r: BeamRenderer<CpuSurface> = BeamRenderer::new();
    r.initialize(Ok(CpuSurface::new(16, 16)), defaults()).unwrap();
    r.render_frame(0.0).unwrap();
    assert!(center(r.surface().unwrap()).length() > 0.0);

    let mut dark = defaults();
    dark.fade = 0.0;
    r.update_parameters(dark);
    r.render_frame(0.1).unwrap();
    assert_eq!(center(r.surface().unwrap()), glam::Vec3::ZERO);
}

#[test]
fn time_uniforms_follow_current_speeds() {
    let mut r: BeamRenderer<CpuSurface> = BeamRenderer::new();
    r.initialize(Ok(CpuSurface::new(4, 4)), defaults()).unwrap();
    let mut p = defaults();
    p.flow_speed = 2.0;
    p.fog_fall_speed = 0.5;
    r.update_parameters(p);
    r.render_frame(3.0).unwrap();
    let f = r.frame();
    assert_eq!(f.time, 3.0);
    assert_eq!(f.flow_time, 6.0);
    assert_eq!(f.fog_time, 1.5);
}

#[test]
fn pointer_is_stored_bottom_up() {
    let mut r: BeamRenderer<CpuSurface> = BeamRenderer::new();
    r.initialize(Ok(CpuSurface::new(100, 50)), defaults()).unwrap();
    assert_eq!(r.frame().pointer, glam::Vec2::ZERO);
    r.set_pointer(10.0, 5.0);
    assert_eq!(r.frame().pointer, glam::Vec2::new(10.0, 45.0));
}

#[test]
fn zero_resize_clamps_to_one_pixel() {
    let mut r: BeamRenderer<CpuSurface> = BeamRenderer::new();
    r.initialize(Ok(CpuSurface::new(10, 10)), defaults()).unwrap();
    r.resize(0, 0);
    r.render_frame(0.0).unwrap();
    let s = r.surface().unwrap();
    assert_eq!((s.width(), s.height()), (1, 1));
}

struct LosingSurface {
    draws_left: u32,
}

impl BeamSurface for LosingSurface {
    fn size(&self) -> (u32, u32) {
        (2, 2)
    }

    fn resize(&mut self, _width: u32, _height: u32) {}

    fn draw(&mut self, _frame: &FrameState, _params: &RenderParameters) -> laser_core::Result<()> {
        if self.draws_left == 0 {
            return Err(LaserError::Draw("device lost".into()));
        }
        self.draws_left -= 1;
        Ok(())
    }

    fn release(&mut self) {}
}

#[test]
fn device_loss_stops_frames() {
    let mut r = BeamRenderer::new();
    r.initialize(
        Ok(LosingSurface { draws_left: 1 }),
        defaults(),
    )
    .unwrap();
    assert_eq!(r.render_frame(0.0).unwrap(), true);
    assert!(matches!(r.render_frame(0.1), Err(LaserError::Draw(_))));
    assert_eq!(r.state(), RendererState::Failed);
    assert_eq!(r.render_frame(0.2).unwrap(), false);
    assert_eq!(r.frames_drawn(), 1);

    // still disposable after a failure
    r.dispose();
    assert_eq!(r.state(), RendererState::Disposed);
}
