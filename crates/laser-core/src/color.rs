use glam::Vec3;

/// Parse a 6-digit hex color (`#RRGGBB` or `RRGGBB`, any case) into
/// normalized channels.
///
/// Anything unparseable yields opaque white; the effect is decorative and a
/// bad color must never stop it from rendering.
pub fn parse_hex_color(hex: &str) -> Vec3 {
    try_parse_hex(hex).unwrap_or(Vec3::ONE)
}

fn try_parse_hex(hex: &str) -> Option<Vec3> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| -> Option<f32> {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .ok()
            .map(|v| v as f32 / 255.0)
    };
    Some(Vec3::new(channel(0)?, channel(2)?, channel(4)?))
}
