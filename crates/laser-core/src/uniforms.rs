use crate::frame::FrameState;
use crate::params::RenderParameters;

/// Uniform block consumed by `laser_flow.wgsl`.
///
/// Layout mirrors the WGSL `LaserUniforms` struct: scalars packed in groups
/// of four, `color` starting on a 16-byte boundary and `fade` filling its
/// tail. 112 bytes total.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LaserUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub flow_time: f32,

    pub mouse: [f32; 4],

    pub fog_time: f32,
    pub wisp_density: f32,
    pub tilt_scale: f32,
    pub beam_x_frac: f32,

    pub beam_y_frac: f32,
    pub flow_speed: f32,
    pub v_len_factor: f32,
    pub h_len_factor: f32,

    pub fog_intensity: f32,
    pub fog_scale: f32,
    pub wisp_speed: f32,
    pub wisp_intensity: f32,

    pub flow_strength: f32,
    pub decay: f32,
    pub falloff_start: f32,
    pub fog_fall_speed: f32,

    pub color: [f32; 3],
    pub fade: f32,
}

impl LaserUniforms {
    pub fn pack(frame: &FrameState, params: &RenderParameters) -> Self {
        Self {
            resolution: frame.resolution.to_array(),
            time: frame.time,
            flow_time: frame.flow_time,
            mouse: [frame.pointer.x, frame.pointer.y, 0.0, 0.0],
            fog_time: frame.fog_time,
            wisp_density: params.wisp_density,
            tilt_scale: params.tilt_strength,
            beam_x_frac: params.beam_x_frac,
            beam_y_frac: params.beam_y_frac,
            flow_speed: params.flow_speed,
            v_len_factor: params.v_len_factor,
            h_len_factor: params.h_len_factor,
            fog_intensity: params.fog_intensity,
            fog_scale: params.fog_scale,
            wisp_speed: params.wisp_speed,
            wisp_intensity: params.wisp_intensity,
            flow_strength: params.flow_strength,
            decay: params.decay,
            falloff_start: params.falloff_start,
            fog_fall_speed: params.fog_fall_speed,
            color: params.color.to_array(),
            fade: params.fade,
        }
    }
}
