use laser_core::{BeamSurface, FrameState, LaserError, LaserUniforms, RenderParameters};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use web_sys as web;

use laser_core::gpu::{
    create_laser_resources, device_loss_is_fatal, draw_fullscreen, LaserResources,
};

// ===================== WebGPU canvas surface =====================

pub struct GpuSurface {
    canvas: web::HtmlCanvasElement,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    laser: LaserResources,
    device_lost: Arc<AtomicBool>,
    width: u32,
    height: u32,
}

impl GpuSurface {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits; older WebGPU implementations reject unknown fields
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("canvas reports no surface formats"))?;
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let device_lost = Arc::new(AtomicBool::new(false));
        let lost_flag = device_lost.clone();
        device.set_device_lost_callback(move |reason, msg| {
            if device_loss_is_fatal(reason) {
                log::error!("[gpu] device lost ({:?}): {}", reason, msg);
                lost_flag.store(true, Ordering::SeqCst);
            }
        });

        let laser = create_laser_resources(&device, format);
        log::info!("[gpu] surface {}x{} format={:?} alpha={:?}", width, height, format, alpha_mode);

        Ok(Self {
            canvas: canvas.clone(),
            surface,
            device,
            queue,
            config,
            laser,
            device_lost,
            width,
            height,
        })
    }
}

impl BeamSurface for GpuSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn draw(&mut self, frame: &FrameState, params: &RenderParameters) -> laser_core::Result<()> {
        if self.device_lost.load(Ordering::SeqCst) {
            return Err(LaserError::Draw("device lost".into()));
        }
        let uniforms = LaserUniforms::pack(frame, params);
        self.laser.write_uniforms(&self.queue, &uniforms);

        let output = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("[gpu] surface timeout, frame skipped");
                return Ok(());
            }
            Err(e) => return Err(LaserError::Draw(format!("{e:?}"))),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("laser_encoder"),
            });
        draw_fullscreen(&mut encoder, &view, wgpu::Color::TRANSPARENT, &self.laser);
        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }

    fn release(&mut self) {
        self.laser.uniform_buffer.destroy();
        self.device.destroy();
        self.canvas.remove();
        log::info!("[gpu] released");
    }
}
