use js_sys::Reflect;
use laser_core::LaserConfig;
use wasm_bindgen::JsValue;

fn number(options: &JsValue, key: &str, fallback: f32) -> f32 {
    Reflect::get(options, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|v| v as f32)
        .unwrap_or(fallback)
}

fn string(options: &JsValue, key: &str, fallback: &str) -> String {
    Reflect::get(options, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| fallback.to_string())
}

/// Read a plain JS options object. Missing or mistyped fields keep their
/// defaults; anything that is not an object yields all defaults.
pub fn read_config(options: &JsValue) -> LaserConfig {
    let d = LaserConfig::default();
    if !options.is_object() {
        return d;
    }
    LaserConfig {
        wisp_density: number(options, "wispDensity", d.wisp_density),
        mouse_tilt_strength: number(options, "mouseTiltStrength", d.mouse_tilt_strength),
        horizontal_beam_offset: number(options, "horizontalBeamOffset", d.horizontal_beam_offset),
        vertical_beam_offset: number(options, "verticalBeamOffset", d.vertical_beam_offset),
        flow_speed: number(options, "flowSpeed", d.flow_speed),
        vertical_sizing: number(options, "verticalSizing", d.vertical_sizing),
        horizontal_sizing: number(options, "horizontalSizing", d.horizontal_sizing),
        fog_intensity: number(options, "fogIntensity", d.fog_intensity),
        fog_scale: number(options, "fogScale", d.fog_scale),
        wisp_speed: number(options, "wispSpeed", d.wisp_speed),
        wisp_intensity: number(options, "wispIntensity", d.wisp_intensity),
        flow_strength: number(options, "flowStrength", d.flow_strength),
        decay: number(options, "decay", d.decay),
        falloff_start: number(options, "falloffStart", d.falloff_start),
        fog_fall_speed: number(options, "fogFallSpeed", d.fog_fall_speed),
        color: string(options, "color", &d.color),
        fade: number(options, "fade", d.fade),
    }
}
