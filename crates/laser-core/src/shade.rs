//! CPU reference of the beam color function.
//!
//! Everything here is a pure function of (fragment coordinate, frame state,
//! parameters). `shaders/laser_flow.wgsl` is a line-for-line port of the same
//! math; keep the two in step when tuning.

use crate::constants::*;
use crate::frame::FrameState;
use crate::params::RenderParameters;
use glam::{Vec2, Vec3};

// ---------------- GLSL-style scalar helpers ----------------

#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[inline]
fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
fn fract2(p: Vec2) -> Vec2 {
    Vec2::new(fract(p.x), fract(p.y))
}

// ---------------- Hash and noise ----------------

/// Fixed-formula 2D → 1D hash in [0, 1).
pub fn hash21(p: Vec2) -> f32 {
    let mut q = fract2(p * Vec2::new(123.34, 456.21));
    q += q.dot(q + 34.123);
    fract(q.x * q.y)
}

/// Bilinear value noise over the hashed integer lattice, smoothstep-eased.
pub fn value_noise(p: Vec2) -> f32 {
    let i = p.floor();
    let f = p - i;
    let a = hash21(i);
    let b = hash21(i + Vec2::new(1.0, 0.0));
    let c = hash21(i + Vec2::new(0.0, 1.0));
    let d = hash21(i + Vec2::new(1.0, 1.0));
    let u = f * f * (Vec2::splat(3.0) - 2.0 * f);
    mix(mix(a, b, u.x), mix(c, d, u.x), u.y)
}

/// Five-octave fractal sum of [`value_noise`], rotating and rescaling the
/// sample point between octaves.
pub fn fbm(mut p: Vec2) -> f32 {
    let mut v = 0.0;
    let mut amp = FOG_AMP_START;
    for _ in 0..FOG_OCTAVES {
        v += amp * value_noise(p);
        // mat2(0.86, 0.5, -0.5, 0.86) * p, column-major
        let rotated = Vec2::new(0.86 * p.x - 0.5 * p.y, 0.5 * p.x + 0.86 * p.y);
        p = rotated * FOG_LACUNARITY + Vec2::splat(FOG_OCTAVE_SHIFT);
        amp *= FOG_AMP_FALLOFF;
    }
    v
}

// ---------------- Beam ----------------

/// Map a bottom-left-origin fragment coordinate into beam space: centered,
/// normalized by the shorter viewport side, then shifted by the configured
/// beam offsets.
pub fn beam_space(frag_coord: Vec2, resolution: Vec2, params: &RenderParameters) -> Vec2 {
    let mut uv = (frag_coord - 0.5 * resolution) / resolution.x.min(resolution.y);
    uv.x += params.beam_x_frac * R_H;
    uv.y += params.beam_y_frac * R_V;
    uv
}

/// Anisotropic inverse-square falloff of `p` around `q`, capped at
/// `strength`. Returns exactly `strength` at zero distance.
pub fn anisotropic_falloff(p: Vec2, q: Vec2, strength: f32, scale: Vec2, falloff_start: f32) -> f32 {
    let d = p - q;
    let dd = (d.x * d.x) / (scale.x * scale.x) + (d.y * d.y) / (scale.y * scale.y);
    let f = strength * falloff_start;
    let r = (f * f) / (dd + EPS);
    strength * r.min(1.0)
}

/// Fade applied towards the top of the beam; 1 at and below the root,
/// falling to 0 at `R_V`.
pub fn top_fade(y: f32) -> f32 {
    let fade = 1.0 - smoothstep(TOP_FADE_START * R_V, R_V, y.max(0.0));
    fade.max(0.0).powf(TOP_FADE_EXP)
}

/// Half-rectified sine pulse on flow time, used to modulate beam radiance.
pub fn flow_multiplier(flow_time: f32, flow_strength: f32) -> f32 {
    let phase = (flow_time / FLOW_PERIOD) * TWO_PI;
    let mask = ((phase * 0.5).sin() * 0.5 + 0.5).powf(FLOW_SHARPNESS);
    1.0 + flow_strength * mask
}

pub fn beam_term(uv: Vec2, frame: &FrameState, params: &RenderParameters) -> f32 {
    let center = Vec2::new(0.0, R_V);
    let scale = Vec2::new(params.h_len_factor * R_H, params.v_len_factor * R_V);
    let rad = anisotropic_falloff(uv, center, 1.0, scale, params.falloff_start)
        * flow_multiplier(frame.flow_time, params.flow_strength);
    let fade = top_fade(uv.y);
    (-rad * params.decay).exp() * fade + wisp_term(uv, fade, frame, params)
}

// ---------------- Wisps ----------------

/// Lanes per side for a given density: proportional up to 1.0, saturating
/// above, never fewer than one. A negative density means "unset" and draws
/// every lane.
pub fn wisp_lane_count(wisp_density: f32) -> usize {
    if wisp_density < 0.0 {
        return W_LANES;
    }
    let d = wisp_density.clamp(0.0, W_DENSITY_MAX);
    let lanes = (W_LANES as f32 * d.min(1.0)).round().max(1.0);
    (lanes as usize).min(W_LANES)
}

fn flare_y(y: f32) -> f32 {
    let t = (1.0 - y.clamp(0.0, FLARE_HEIGHT) / FLARE_HEIGHT.max(EPS)).clamp(0.0, 1.0);
    t.powf(FLARE_EXP)
}

fn segment_gate(x: f32, len: f32) -> f32 {
    let a = smoothstep(0.0, W_AA, x);
    let b = 1.0 - smoothstep(len, len + W_AA, x);
    (a * b).max(0.0)
}

pub fn wisp_term(uv: Vec2, top_fade: f32, frame: &FrameState, params: &RenderParameters) -> f32 {
    let y = uv.y;
    let yf = (y + frame.flow_time * params.wisp_speed) / W_CELL;
    let lanes = wisp_lane_count(params.wisp_density);

    let curve = flare_y(y.max(0.0)) * (1.0 - y / W_CURVE_RANGE.max(EPS)).clamp(0.0, 1.0);
    let x_stretch = 1.0 + (FLARE_AMOUNT * W_CURVE_AMOUNT * W_CURVE_GAIN) * curve;
    let bottom_gain = (1.0 - (y / R_V).clamp(0.0, 1.0)).powf(W_BOTTOM_EXP);
    let shared = bottom_gain * params.wisp_intensity * top_fade;

    let mut sum = 0.0;
    for sgn in [-1.0_f32, 1.0] {
        for i in 0..lanes {
            let off = W_BASE_X + i as f32 * W_LAYER_GAP;
            let xc = sgn * off * x_stretch;
            let lateral = 1.0 - smoothstep(W_HALF, W_HALF + W_AA, (uv.x - xc).abs());
            let amp = (-off * W_SIDE_DECAY).exp();
            let seed = hash21(Vec2::new(off, sgn * 17.0));
            let yf2 = yf + seed * 7.0;
            let cell = yf2.floor();
            let seg_len = mix(W_SEG_MIN, W_SEG_MAX, hash21(Vec2::new(cell, off * sgn)));
            sum += segment_gate(fract(yf2), seg_len) * lateral * amp * shared;
        }
    }
    sum
}

// ---------------- Fog ----------------

/// Raw fog noise at a beam-space position before masking.
pub fn fog_field(uv: Vec2, fog_scale: f32, fog_time: f32) -> f32 {
    let p = uv * fog_scale + Vec2::new(fog_time * FOG_SPEED_U, fog_time * FOG_SPEED_V);
    fbm(p)
}

pub fn fog_term(uv: Vec2, frame: &FrameState, params: &RenderParameters) -> f32 {
    let fog = fog_field(uv, params.fog_scale, frame.fog_time).powf(FOG_CONTRAST);
    let y_mask = (-uv.y.abs() / HFOG_Y_RADIUS).exp() * HFOG_Y_SOFT;
    let x_mask = (1.0 - smoothstep(HFOG_EDGE_START * R_H, HFOG_EDGE_END * R_H, uv.x.abs()))
        .powf(HFOG_EDGE_GAMMA);
    fog * y_mask * x_mask * params.fog_intensity
}

// ---------------- Composite ----------------

/// Horizontal vignette so the effect vanishes before the surface edges.
pub fn edge_mask(uv_x: f32) -> f32 {
    (1.0 - smoothstep(EDGE_X0, EDGE_X1, uv_x.abs() / R_H)).powf(EDGE_X_GAMMA)
}

/// Final linear RGB for one fragment. `frag_coord` is a pixel center with a
/// bottom-left origin, matching the GPU fragment convention after flip.
pub fn shade(frag_coord: Vec2, frame: &FrameState, params: &RenderParameters) -> Vec3 {
    let uv = beam_space(frag_coord, frame.resolution, params);
    let beam = beam_term(uv, frame, params);
    let fog = fog_term(uv, frame, params);
    Vec3::splat(beam + fog) * params.color * params.fade * edge_mask(uv.x)
}
