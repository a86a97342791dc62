use anyhow::Context;
use clap::Parser;
use laser_core::{render_reference, setup_error, BeamRenderer, LaserConfig};
use std::path::Path;
use std::time::Instant;
use winit::{dpi::PhysicalSize, event::*, event_loop::EventLoop, window::WindowBuilder};

mod cli;
mod gpu;

use gpu::WindowSurface;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = cli::Args::parse();
    let config = args.config();
    match &args.snapshot {
        Some(path) => write_snapshot(path, args.width, args.height, args.time, &config),
        None => run_window(args.width, args.height, &config),
    }
}

/// Render one CPU reference frame and save it as a PNG.
fn write_snapshot(
    path: &Path,
    width: u32,
    height: u32,
    time: f32,
    config: &LaserConfig,
) -> anyhow::Result<()> {
    let params = config.to_parameters();
    let surface = render_reference(width, height, time, &params);
    let img = image::RgbaImage::from_raw(surface.width(), surface.height(), surface.to_rgba8())
        .context("pixel buffer does not match the surface size")?;
    img.save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!(
        "[snapshot] {}x{} at t={:.2}s -> {}",
        surface.width(),
        surface.height(),
        time,
        path.display()
    );
    Ok(())
}

fn run_window(width: u32, height: u32, config: &LaserConfig) -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("laser-flow (native)")
        .with_inner_size(PhysicalSize::new(width.max(1), height.max(1)))
        .build(&event_loop)?;

    let surface = pollster::block_on(WindowSurface::new(&window))
        .map_err(|e| setup_error(format!("{:#}", e)));
    let mut renderer = BeamRenderer::new();
    renderer.initialize(surface, config.to_parameters())?;
    let window = &window;
    let start = Instant::now();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => renderer.resize(size.width, size.height),
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => renderer.set_pointer(position.x as f32, position.y as f32),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => {
            renderer.dispose();
            elwt.exit();
        }
        Event::AboutToWait => match renderer.render_frame(start.elapsed().as_secs_f32()) {
            Ok(true) => window.request_redraw(),
            Ok(false) => {}
            Err(_) => elwt.exit(),
        },
        _ => {}
    })?;
    Ok(())
}
