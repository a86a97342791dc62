//! Command-line argument parsing.

use clap::Parser;
use laser_core::LaserConfig;
use std::path::PathBuf;

/// Command line arguments. Effect options left unset keep the same defaults
/// the web component uses.
#[derive(Parser, Debug)]
#[command(name = "laser-native")]
#[command(about = "Preview the laser-flow beam in a window, or render a PNG snapshot", long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Args {
    /// Window or snapshot width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Window or snapshot height in pixels
    #[arg(long, default_value_t = 500)]
    pub height: u32,

    /// Animation time for the snapshot
    #[arg(long, value_name = "SECONDS", default_value_t = 0.0)]
    pub time: f32,

    /// Render one frame on the CPU to this PNG instead of opening a window
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    #[arg(long)]
    pub wisp_density: Option<f32>,
    #[arg(long)]
    pub mouse_tilt_strength: Option<f32>,
    /// Beam x offset as a fraction of the 150-unit reference radius
    #[arg(long)]
    pub horizontal_beam_offset: Option<f32>,
    #[arg(long)]
    pub vertical_beam_offset: Option<f32>,
    #[arg(long)]
    pub flow_speed: Option<f32>,
    #[arg(long)]
    pub vertical_sizing: Option<f32>,
    #[arg(long)]
    pub horizontal_sizing: Option<f32>,
    #[arg(long)]
    pub fog_intensity: Option<f32>,
    #[arg(long)]
    pub fog_scale: Option<f32>,
    #[arg(long)]
    pub wisp_speed: Option<f32>,
    #[arg(long)]
    pub wisp_intensity: Option<f32>,
    #[arg(long)]
    pub flow_strength: Option<f32>,
    #[arg(long)]
    pub decay: Option<f32>,
    #[arg(long)]
    pub falloff_start: Option<f32>,
    #[arg(long)]
    pub fog_fall_speed: Option<f32>,
    /// Beam color as #RRGGBB
    #[arg(long, value_name = "HEX")]
    pub color: Option<String>,
    #[arg(long)]
    pub fade: Option<f32>,
}

impl Args {
    pub fn config(&self) -> LaserConfig {
        let d = LaserConfig::default();
        LaserConfig {
            wisp_density: self.wisp_density.unwrap_or(d.wisp_density),
            mouse_tilt_strength: self.mouse_tilt_strength.unwrap_or(d.mouse_tilt_strength),
            horizontal_beam_offset: self
                .horizontal_beam_offset
                .unwrap_or(d.horizontal_beam_offset),
            vertical_beam_offset: self.vertical_beam_offset.unwrap_or(d.vertical_beam_offset),
            flow_speed: self.flow_speed.unwrap_or(d.flow_speed),
            vertical_sizing: self.vertical_sizing.unwrap_or(d.vertical_sizing),
            horizontal_sizing: self.horizontal_sizing.unwrap_or(d.horizontal_sizing),
            fog_intensity: self.fog_intensity.unwrap_or(d.fog_intensity),
            fog_scale: self.fog_scale.unwrap_or(d.fog_scale),
            wisp_speed: self.wisp_speed.unwrap_or(d.wisp_speed),
            wisp_intensity: self.wisp_intensity.unwrap_or(d.wisp_intensity),
            flow_strength: self.flow_strength.unwrap_or(d.flow_strength),
            decay: self.decay.unwrap_or(d.decay),
            falloff_start: self.falloff_start.unwrap_or(d.falloff_start),
            fog_fall_speed: self.fog_fall_speed.unwrap_or(d.fog_fall_speed),
            color: self.color.clone().unwrap_or(d.color),
            fade: self.fade.unwrap_or(d.fade),
        }
    }
}
