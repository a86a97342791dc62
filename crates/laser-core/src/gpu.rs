//! wgpu pipeline for the full-screen beam pass, shared by the web and native
//! front-ends.

use crate::{LaserUniforms, LASER_FLOW_WGSL};
use wgpu::util::DeviceExt;

/// Additive color; destination alpha left untouched so a transparent canvas
/// stays transparent and the page compositor adds the beam over the page.
pub const ADDITIVE_KEEP_ALPHA: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::Zero,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

const UNIFORM_BINDING: u32 = 0;

pub struct LaserResources {
    pub pipeline: wgpu::RenderPipeline,
    pub uniform_buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

impl LaserResources {
    pub fn write_uniforms(&self, queue: &wgpu::Queue, uniforms: &LaserUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }
}

/// Losing the device because we destroyed it on release is expected; any
/// other reason means the session is over.
pub fn device_loss_is_fatal(reason: wgpu::DeviceLostReason) -> bool {
    !matches!(reason, wgpu::DeviceLostReason::Destroyed)
}

fn uniform_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    let entry = wgpu::BindGroupLayoutEntry {
        binding: UNIFORM_BINDING,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: wgpu::BufferSize::new(std::mem::size_of::<LaserUniforms>() as u64),
        },
        count: None,
    };
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("laser_bgl"),
        entries: &[entry],
    })
}

/// Vertex-less pipeline: `vs_fullscreen` emits one oversized triangle and
/// `fs_laser` shades every covered pixel.
fn fullscreen_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    target: wgpu::ColorTargetState,
) -> wgpu::RenderPipeline {
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("laser_flow.wgsl"),
        source: wgpu::ShaderSource::Wgsl(LASER_FLOW_WGSL.into()),
    });
    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("laser_pl"),
        bind_group_layouts: &[layout],
        push_constant_ranges: &[],
    });
    let targets = [Some(target)];
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("laser_pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &module,
            entry_point: Some("vs_fullscreen"),
            buffers: &[],
            compilation_options: Default::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &module,
            entry_point: Some("fs_laser"),
            targets: &targets,
            compilation_options: Default::default(),
        }),
        cache: None,
        multiview: None,
    })
}

pub fn create_laser_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> LaserResources {
    let layout = uniform_layout(device);
    let pipeline = fullscreen_pipeline(
        device,
        &layout,
        wgpu::ColorTargetState {
            format: color_format,
            blend: Some(ADDITIVE_KEEP_ALPHA),
            write_mask: wgpu::ColorWrites::ALL,
        },
    );
    // zeroed until the first frame packs real values
    let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("laser_uniforms"),
        contents: bytemuck::bytes_of(&<LaserUniforms as bytemuck::Zeroable>::zeroed()),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("laser_bg"),
        layout: &layout,
        entries: &[wgpu::BindGroupEntry {
            binding: UNIFORM_BINDING,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    LaserResources {
        pipeline,
        uniform_buffer,
        bind_group,
    }
}

/// Clear `target` and draw the beam over it in a single pass.
pub fn draw_fullscreen(
    encoder: &mut wgpu::CommandEncoder,
    target: &wgpu::TextureView,
    clear: wgpu::Color,
    res: &LaserResources,
) {
    let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("laser_pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear),
                store: wgpu::StoreOp::Store,
            },
        })],
        ..Default::default()
    });
    pass.set_pipeline(&res.pipeline);
    pass.set_bind_group(0, &res.bind_group, &[]);
    pass.draw(0..3, 0..1);
}
