// Fixed shape constants of the beam effect. The WGSL shader carries the same
// values; `tests/uniforms_tests.rs` checks the two stay in sync.

pub const TWO_PI: f32 = std::f32::consts::TAU;
pub const EPS: f32 = 1e-6;

// Beam-space radii (horizontal / vertical), in normalized viewport units
pub const R_H: f32 = 150.0;
pub const R_V: f32 = 150.0;

// Flare curve used to bend wisp lanes outwards near the beam root
pub const FLARE_HEIGHT: f32 = 16.0;
pub const FLARE_AMOUNT: f32 = 8.0;
pub const FLARE_EXP: f32 = 2.0;

// Beam top fade and flow pulse
pub const TOP_FADE_START: f32 = 0.1; // fraction of R_V where the fade begins
pub const TOP_FADE_EXP: f32 = 1.0;
pub const FLOW_PERIOD: f32 = 0.5;
pub const FLOW_SHARPNESS: f32 = 1.5;

// Wisps
pub const W_BASE_X: f32 = 1.5; // offset of the innermost lane
pub const W_LAYER_GAP: f32 = 0.25; // extra offset per lane
pub const W_LANES: usize = 10; // lanes per side at full density
pub const W_SIDE_DECAY: f32 = 0.5;
pub const W_HALF: f32 = 0.01;
pub const W_AA: f32 = 0.15;
pub const W_CELL: f32 = 20.0;
pub const W_SEG_MIN: f32 = 0.01;
pub const W_SEG_MAX: f32 = 0.55;
pub const W_CURVE_AMOUNT: f32 = 15.0;
pub const W_CURVE_RANGE: f32 = FLARE_HEIGHT - 3.0;
pub const W_CURVE_GAIN: f32 = 0.05;
pub const W_BOTTOM_EXP: f32 = 10.0;
pub const W_DENSITY_MAX: f32 = 2.0; // densities above this are clamped

// Fog
pub const FOG_CONTRAST: f32 = 1.2;
pub const FOG_SPEED_U: f32 = 0.1;
pub const FOG_SPEED_V: f32 = -0.1;
pub const FOG_OCTAVES: usize = 5;
pub const FOG_AMP_START: f32 = 0.6;
pub const FOG_AMP_FALLOFF: f32 = 0.52;
pub const FOG_LACUNARITY: f32 = 2.03;
pub const FOG_OCTAVE_SHIFT: f32 = 17.1;

pub const HFOG_EDGE_START: f32 = 0.20;
pub const HFOG_EDGE_END: f32 = 0.98;
pub const HFOG_EDGE_GAMMA: f32 = 1.4;
pub const HFOG_Y_RADIUS: f32 = 25.0;
pub const HFOG_Y_SOFT: f32 = 60.0;

// Final horizontal edge mask (fractions of R_H)
pub const EDGE_X0: f32 = 0.22;
pub const EDGE_X1: f32 = 0.995;
pub const EDGE_X_GAMMA: f32 = 1.25;

// Default beam color
pub const DEFAULT_COLOR_HEX: &str = "#FF79C6";
