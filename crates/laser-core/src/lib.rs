pub mod color;
pub mod constants;
pub mod cpu;
pub mod error;
pub mod frame;
#[cfg(feature = "gpu")]
pub mod gpu;
pub mod params;
pub mod renderer;
pub mod shade;
pub mod uniforms;

pub static LASER_FLOW_WGSL: &str = include_str!("../shaders/laser_flow.wgsl");

pub use color::parse_hex_color;
pub use cpu::{render_reference, CpuSurface};
pub use error::{LaserError, Result};
pub use frame::FrameState;
pub use params::{LaserConfig, RenderParameters};
pub use renderer::{setup_error, BeamRenderer, BeamSurface, RendererState};
pub use uniforms::LaserUniforms;
