//! Color names and hex codes for backgrounds and separators

use crate::io::error::{Result, invalid_parameter};
use image::Rgb;

const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("white", [255, 255, 255]),
    ("black", [0, 0, 0]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("lightgray", [211, 211, 211]),
    ("lightgrey", [211, 211, 211]),
    ("darkgray", [169, 169, 169]),
    ("darkgrey", [169, 169, 169]),
    ("silver", [192, 192, 192]),
    ("whitesmoke", [245, 245, 245]),
    ("ivory", [255, 255, 240]),
    ("beige", [245, 245, 220]),
    ("linen", [250, 240, 230]),
    ("pink", [255, 192, 203]),
    ("lavender", [230, 230, 250]),
    ("lightblue", [173, 216, 230]),
    ("lightyellow", [255, 255, 224]),
    ("lightgreen", [144, 238, 144]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
    ("cyan", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("navy", [0, 0, 128]),
    ("teal", [0, 128, 128]),
];

/// Parse a color name or a `#rgb` / `#rrggbb` code, case-insensitively
///
/// # Errors
///
/// Returns an error if the name is unknown or the hex code is malformed
pub fn parse_color(input: &str) -> Result<Rgb<u8>> {
    let normalized = input.trim().to_ascii_lowercase();

    if let Some(hex) = normalized.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| {
            invalid_parameter("color", &input, &"expected #rgb or #rrggbb hex digits")
        });
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, rgb)| Rgb(*rgb))
        .ok_or_else(|| invalid_parameter("color", &input, &"unknown color name"))
}

fn parse_hex(hex: &str) -> Option<Rgb<u8>> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut channels = [0u8; 3];
            for (channel, digit) in channels.iter_mut().zip(hex.chars()) {
                let value = digit.to_digit(16)? as u8;
                *channel = value * 17;
            }
            Some(Rgb(channels))
        }
        6 => {
            let mut channels = [0u8; 3];
            for (index, channel) in channels.iter_mut().enumerate() {
                let pair = hex.get(index * 2..index * 2 + 2)?;
                *channel = u8::from_str_radix(pair, 16).ok()?;
            }
            Some(Rgb(channels))
        }
        _ => None,
    }
}
