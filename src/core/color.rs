//! Hex color helpers
//!
//! Scene colors are authored as `0xRRGGBB` integers; these convert them for
//! Bevy materials, the egui panel and the color-chip titles.

use bevy::prelude::*;
use bevy_egui::egui::Color32;

/// Split a `0xRRGGBB` value into its channels
pub fn hex_channels(hex: u32) -> [u8; 3] {
    [
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
    ]
}

/// Convert a `0xRRGGBB` value to a Bevy sRGB color
pub fn color_from_hex(hex: u32) -> Color {
    let [r, g, b] = hex_channels(hex);
    Color::srgb_u8(r, g, b)
}

/// Convert a `0xRRGGBB` value to an egui color
pub fn color32_from_hex(hex: u32) -> Color32 {
    let [r, g, b] = hex_channels(hex);
    Color32::from_rgb(r, g, b)
}

/// Format a `0xRRGGBB` value as a CSS-style `#rrggbb` string
pub fn css_hex(hex: u32) -> String {
    format!("#{:06x}", hex & 0x00ff_ffff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_channels() {
        assert_eq!(hex_channels(0x8c7853), [0x8c, 0x78, 0x53]);
        assert_eq!(hex_channels(0x000011), [0, 0, 0x11]);
    }

    #[test]
    fn test_css_hex_pads_to_six_digits() {
        assert_eq!(css_hex(0x000011), "#000011");
        assert_eq!(css_hex(0x4b70dd), "#4b70dd");
    }

    #[test]
    fn test_color_from_hex_matches_channels() {
        let srgba = color_from_hex(0x87ceeb).to_srgba();
        assert!((srgba.red - 0x87 as f32 / 255.0).abs() < 1e-6);
        assert!((srgba.green - 0xce as f32 / 255.0).abs() < 1e-6);
        assert!((srgba.blue - 0xeb as f32 / 255.0).abs() < 1e-6);
    }
}
