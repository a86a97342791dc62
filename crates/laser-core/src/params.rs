use crate::color::parse_hex_color;
use crate::constants::DEFAULT_COLOR_HEX;
use glam::Vec3;

/// Externally supplied options, one field per embedding-page option.
///
/// Every field has a default; front-ends fill only what the caller provided.
#[derive(Clone, Debug, PartialEq)]
pub struct LaserConfig {
    pub wisp_density: f32,
    pub mouse_tilt_strength: f32,
    pub horizontal_beam_offset: f32,
    pub vertical_beam_offset: f32,
    pub flow_speed: f32,
    pub vertical_sizing: f32,
    pub horizontal_sizing: f32,
    pub fog_intensity: f32,
    pub fog_scale: f32,
    pub wisp_speed: f32,
    pub wisp_intensity: f32,
    pub flow_strength: f32,
    pub decay: f32,
    pub falloff_start: f32,
    pub fog_fall_speed: f32,
    pub color: String,
    pub fade: f32,
}

impl Default for LaserConfig {
    fn default() -> Self {
        Self {
            wisp_density: 1.0,
            mouse_tilt_strength: 0.5,
            horizontal_beam_offset: 0.0,
            vertical_beam_offset: 0.0,
            flow_speed: 1.0,
            vertical_sizing: 1.0,
            horizontal_sizing: 1.0,
            fog_intensity: 0.3,
            fog_scale: 1.0,
            wisp_speed: 1.0,
            wisp_intensity: 1.0,
            flow_strength: 0.5,
            decay: 1.0,
            falloff_start: 1.0,
            fog_fall_speed: 1.0,
            color: DEFAULT_COLOR_HEX.to_string(),
            fade: 1.0,
        }
    }
}

impl LaserConfig {
    /// Resolve into the per-frame parameter snapshot. Numbers pass through
    /// unvalidated; only the color string is interpreted.
    pub fn to_parameters(&self) -> RenderParameters {
        RenderParameters {
            wisp_density: self.wisp_density,
            tilt_strength: self.mouse_tilt_strength,
            beam_x_frac: self.horizontal_beam_offset,
            beam_y_frac: self.vertical_beam_offset,
            flow_speed: self.flow_speed,
            v_len_factor: self.vertical_sizing,
            h_len_factor: self.horizontal_sizing,
            fog_intensity: self.fog_intensity,
            fog_scale: self.fog_scale,
            wisp_speed: self.wisp_speed,
            wisp_intensity: self.wisp_intensity,
            flow_strength: self.flow_strength,
            decay: self.decay,
            falloff_start: self.falloff_start,
            fog_fall_speed: self.fog_fall_speed,
            color: parse_hex_color(&self.color),
            fade: self.fade,
        }
    }
}

/// Snapshot of every uniform the color function reads besides time,
/// resolution and pointer. Replaced wholesale on update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderParameters {
    pub wisp_density: f32,
    pub tilt_strength: f32,
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
    pub color: Vec3,
    pub fade: f32,
}

impl Default for RenderParameters {
    fn default() -> Self {
        LaserConfig::default().to_parameters()
    }
}

impl From<&LaserConfig> for RenderParameters {
    fn from(config: &LaserConfig) -> Self {
        config.to_parameters()
    }
}
