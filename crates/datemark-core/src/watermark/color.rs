//! Watermark color parsing: named colors and hex notation.

use image::Rgba;

/// Parse a color string into an RGBA pixel value.
///
/// Accepts a small set of named colors plus `#RRGGBB` and `#RRGGBBAA` hex
/// notation. Returns `None` for anything else; config validation turns that
/// into an error before any image is touched.
pub fn parse_color(s: &str) -> Option<Rgba<u8>> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    let rgb = match s.to_ascii_lowercase().as_str() {
        "white" => [255, 255, 255],
        "black" => [0, 0, 0],
        "red" => [255, 0, 0],
        "green" => [0, 128, 0],
        "blue" => [0, 0, 255],
        "yellow" => [255, 255, 0],
        "cyan" => [0, 255, 255],
        "magenta" => [255, 0, 255],
        "gray" | "grey" => [128, 128, 128],
        "orange" => [255, 165, 0],
        _ => return None,
    };
    Some(Rgba([rgb[0], rgb[1], rgb[2], 255]))
}

fn parse_hex(hex: &str) -> Option<Rgba<u8>> {
    let byte_at = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        6 => Some(Rgba([byte_at(0)?, byte_at(2)?, byte_at(4)?, 255])),
        8 => Some(Rgba([byte_at(0)?, byte_at(2)?, byte_at(4)?, byte_at(6)?])),
        _ => None,
    }
}
