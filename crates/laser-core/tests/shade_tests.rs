// Host-side tests for the pure beam color function.

use glam::Vec2;
use laser_core::constants::{
    FLARE_AMOUNT, R_H, R_V, W_BASE_X, W_CURVE_AMOUNT, W_CURVE_GAIN, W_LANES, W_LAYER_GAP,
};
use laser_core::shade::*;
use laser_core::{FrameState, LaserConfig, RenderParameters};

fn default_params() -> RenderParameters {
    LaserConfig::default().to_parameters()
}

#[test]
fn falloff_is_exactly_one_at_zero_distance() {
    let center = Vec2::new(0.0, R_V);
    for falloff_start in [0.01_f32, 0.5, 1.0, 2.0, 10.0] {
        for (h, v) in [(1.0_f32, 1.0_f32), (0.3, 2.0), (4.0, 0.25)] {
            let scale = Vec2::new(h * R_H, v * R_V);
            let f = anisotropic_falloff(center, center, 1.0, scale, falloff_start);
            assert_eq!(f, 1.0, "falloff_start={falloff_start} scale={scale:?}");
        }
    }
}

#[test]
fn falloff_never_exceeds_base_intensity_and_drops_with_distance() {
    let center = Vec2::new(0.0, R_V);
    let scale = Vec2::new(R_H, R_V);
    let mut prev = f32::MAX;
    for i in 0..50 {
        let p = center + Vec2::new(0.0, i as f32 * 20.0);
        let f = anisotropic_falloff(p, center, 1.0, scale, 1.0);
        assert!(f <= 1.0);
        assert!(f <= prev, "falloff increased at step {i}");
        prev = f;
    }
    assert!(prev < 0.5);
}

#[test]
fn top_fade_is_bounded_and_non_increasing() {
    let mut prev = top_fade(-10.0);
    assert_eq!(prev, 1.0);
    let mut y = -10.0;
    while y < 2.0 * R_V {
        let f = top_fade(y);
        assert!((0.0..=1.0).contains(&f), "fade {f} out of range at y={y}");
        assert!(f <= prev + 1e-7, "fade increased at y={y}");
        prev = f;
        y += 0.75;
    }
    assert_eq!(top_fade(R_V), 0.0);
}

#[test]
fn lane_count_scales_with_density_then_saturates() {
    for step in 1..=100 {
        let d = step as f32 / 100.0;
        let expected = ((W_LANES as f32 * d).round() as usize).max(1);
        assert_eq!(wisp_lane_count(d), expected, "density {d}");
    }
    assert_eq!(wisp_lane_count(0.0), 1);
    assert_eq!(wisp_lane_count(0.01), 1);
    assert_eq!(wisp_lane_count(1.5), W_LANES);
    assert_eq!(wisp_lane_count(2.0), W_LANES);
    assert_eq!(wisp_lane_count(75.0), W_LANES);
    assert_eq!(wisp_lane_count(-3.0), W_LANES);
    assert_eq!(wisp_lane_count(-0.001), W_LANES);
}

#[test]
fn fog_field_is_deterministic() {
    let samples = [
        (Vec2::new(0.0, 0.0), 1.0, 0.0),
        (Vec2::new(-0.3, 0.7), 2.5, 13.25),
        (Vec2::new(40.0, -12.0), 0.1, 1000.0),
    ];
    for (p, scale, t) in samples {
        let a = fog_field(p, scale, t);
        let b = fog_field(p, scale, t);
        assert_eq!(a.to_bits(), b.to_bits());
        assert!(a.is_finite() && a >= 0.0);
    }
}

#[test]
fn fbm_stays_within_amplitude_sum() {
    // 0.6 * (1 - 0.52^5) / (1 - 0.52)
    let max = 0.6 * (1.0 - 0.52_f32.powi(5)) / (1.0 - 0.52);
    for i in 0..200 {
        let p = Vec2::new(i as f32 * 0.173, (i as f32 * 0.311).sin() * 9.0);
        let v = fbm(p);
        assert!(v >= 0.0 && v <= max + 1e-5, "fbm {v} out of range");
    }
}

#[test]
fn center_pixel_is_lit_at_time_zero() {
    let params = default_params();
    let frame = FrameState::new(800, 500);
    let c = shade(Vec2::new(400.0, 250.0), &frame, &params);
    assert!(c.is_finite());
    assert!(c.x > 0.0 && c.y > 0.0 && c.z > 0.0);
}

#[test]
fn fade_zero_blacks_out_everything() {
    let mut params = default_params();
    params.fade = 0.0;
    let frame = FrameState::new(64, 64);
    for y in 0..8 {
        for x in 0..8 {
            let c = shade(Vec2::new(x as f32 * 8.0 + 0.5, y as f32 * 8.0 + 0.5), &frame, &params);
            assert_eq!(c, glam::Vec3::ZERO);
        }
    }
}

#[test]
fn negative_decay_degrades_without_panicking() {
    let mut params = default_params();
    params.decay = -4.0;
    params.fog_scale = -1.0;
    let frame = FrameState::new(32, 32);
    let c = shade(Vec2::new(16.5, 16.5), &frame, &params);
    assert!(!c.x.is_nan());
}

#[test]
fn horizontal_offset_shifts_beam_space() {
    let mut params = default_params();
    let res = Vec2::new(200.0, 100.0);
    let base = beam_space(Vec2::new(100.0, 50.0), res, &params);
    assert_eq!(base, Vec2::ZERO);
    params.beam_x_frac = 0.01;
    let shifted = beam_space(Vec2::new(100.0, 50.0), res, &params);
    assert!((shifted.x - 0.01 * R_H).abs() < 1e-6);
    assert_eq!(shifted.y, 0.0);
}

#[test]
fn edge_mask_vanishes_before_surface_extent() {
    assert_eq!(edge_mask(0.0), 1.0);
    assert_eq!(edge_mask(R_H), 0.0);
    assert!(edge_mask(0.5 * R_H) < 1.0);
}

// ---------------- Wisps ----------------

// At the beam root (y = 0) the flare curve is fully on.
fn root_stretch() -> f32 {
    1.0 + FLARE_AMOUNT * W_CURVE_AMOUNT * W_CURVE_GAIN
}

fn lane_x(i: usize) -> f32 {
    (W_BASE_X + i as f32 * W_LAYER_GAP) * root_stretch()
}

fn wisps_at(x: f32, y: f32, flow_time: f32, params: &RenderParameters) -> f32 {
    let mut frame = FrameState::new(800, 500);
    frame.flow_time = flow_time;
    wisp_term(Vec2::new(x, y), 1.0, &frame, params)
}

/// Flow times covering two full scroll cycles of a wisp cell.
fn scroll_times() -> impl Iterator<Item = f32> {
    (0..320).map(|i| i as f32 * 0.125)
}

/// First flow time at which the lane at `x` shows a lit segment.
fn lit_time(x: f32, params: &RenderParameters) -> f32 {
    scroll_times()
        .find(|&t| wisps_at(x, 0.0, t, params) > 0.0)
        .unwrap_or_else(|| panic!("lane at x={x} never lit"))
}

#[test]
fn wisps_light_lane_centers_and_nothing_between() {
    let params = default_params();
    for i in 0..W_LANES {
        for sgn in [-1.0_f32, 1.0] {
            lit_time(sgn * lane_x(i), &params);
        }
    }
    for t in scroll_times() {
        assert_eq!(wisps_at(0.0, 0.0, t, &params), 0.0, "center lit at t={t}");
        for i in 0..W_LANES - 1 {
            let mid = 0.5 * (lane_x(i) + lane_x(i + 1));
            assert_eq!(wisps_at(mid, 0.0, t, &params), 0.0, "gap {i} lit at t={t}");
            assert_eq!(wisps_at(-mid, 0.0, t, &params), 0.0, "gap -{i} lit at t={t}");
        }
        let beyond = lane_x(W_LANES - 1) + 1.0;
        assert_eq!(wisps_at(beyond, 0.0, t, &params), 0.0);
    }
}

#[test]
fn wisps_scale_linearly_with_intensity() {
    let mut params = default_params();
    let x = lane_x(0);
    let t = lit_time(x, &params);
    let one = wisps_at(x, 0.0, t, &params);
    params.wisp_intensity = 2.0;
    let two = wisps_at(x, 0.0, t, &params);
    assert!((two - 2.0 * one).abs() <= 1e-6 * two.abs());
    params.wisp_intensity = 0.0;
    for t in scroll_times() {
        assert_eq!(wisps_at(x, 0.0, t, &params), 0.0);
    }
}

#[test]
fn wisps_vanish_at_and_above_beam_top() {
    let params = default_params();
    for y in [R_V, R_V + 1.0, 2.0 * R_V] {
        for t in scroll_times().step_by(8) {
            for x in [-lane_x(0), 0.0, W_BASE_X, lane_x(0), lane_x(3)] {
                assert_eq!(wisps_at(x, y, t, &params), 0.0, "x={x} y={y} t={t}");
            }
        }
    }
}

#[test]
fn raising_density_adds_lanes_without_moving_existing_ones() {
    let mut sparse = default_params();
    sparse.wisp_density = 0.1;
    let dense = default_params();

    let first = lane_x(0);
    let outer = lane_x(W_LANES - 1);
    let outer_lit = lit_time(outer, &dense);
    for t in scroll_times() {
        assert_eq!(
            wisps_at(first, 0.0, t, &sparse).to_bits(),
            wisps_at(first, 0.0, t, &dense).to_bits(),
            "innermost lane changed at t={t}"
        );
        assert_eq!(wisps_at(outer, 0.0, t, &sparse), 0.0);
    }
    assert!(wisps_at(outer, 0.0, outer_lit, &dense) > 0.0);
}

#[test]
fn negative_density_renders_every_lane() {
    let full = default_params();
    let mut unset = default_params();
    unset.wisp_density = -1.0;
    for t in scroll_times().step_by(4) {
        for i in 0..W_LANES {
            let x = lane_x(i);
            assert_eq!(
                wisps_at(x, 0.0, t, &unset).to_bits(),
                wisps_at(x, 0.0, t, &full).to_bits()
            );
        }
    }
}

#[test]
fn wisp_segments_scroll_with_flow_time_times_speed() {
    let mut params = default_params();
    let x = lane_x(2);

    // only the product flow_time * wisp_speed matters
    params.wisp_speed = 3.0;
    let a = wisps_at(x, 0.0, 2.0, &params);
    params.wisp_speed = 1.0;
    let b = wisps_at(x, 0.0, 6.0, &params);
    params.wisp_speed = 2.0;
    let c = wisps_at(x, 0.0, 3.0, &params);
    assert_eq!(a.to_bits(), b.to_bits());
    assert_eq!(b.to_bits(), c.to_bits());

    // moving segments: over a scroll cycle the lane is both lit and dark
    params.wisp_speed = 1.0;
    let values: Vec<f32> = scroll_times().map(|t| wisps_at(x, 0.0, t, &params)).collect();
    assert!(values.iter().any(|&v| v > 0.0));
    assert!(values.iter().any(|&v| v == 0.0));

    // frozen segments: zero speed ignores flow time
    params.wisp_speed = 0.0;
    let still = wisps_at(x, 0.0, 0.0, &params);
    for t in scroll_times() {
        assert_eq!(wisps_at(x, 0.0, t, &params).to_bits(), still.to_bits());
    }
}
