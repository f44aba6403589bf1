//! Tile palette: value → colors and text size.
//!
//! Tiles up to 2048 have their own background color; anything larger shares the
//! overflow color. Text is dark on the light low tiles (2, 4) and light from 8 up.

use crate::fb::{CellStyle, Rgb};
use crate::types::MAX_PALETTE_TILE;

pub const BACKGROUND: Rgb = Rgb::new(187, 173, 160);
pub const TEXT_LIGHT: Rgb = Rgb::new(249, 246, 242);
pub const TEXT_DARK: Rgb = Rgb::new(119, 110, 101);
pub const TILE_OVERFLOW: Rgb = Rgb::new(0, 0, 0);

/// Value at which text switches from dark to light.
pub const LIGHT_TEXT_FROM: u32 = 8;

const TILE_COLORS: [(u32, Rgb); 12] = [
    (0, Rgb::new(204, 192, 179)),
    (2, Rgb::new(238, 228, 218)),
    (4, Rgb::new(237, 224, 200)),
    (8, Rgb::new(242, 177, 121)),
    (16, Rgb::new(245, 149, 99)),
    (32, Rgb::new(246, 124, 95)),
    (64, Rgb::new(246, 94, 59)),
    (128, Rgb::new(237, 207, 114)),
    (256, Rgb::new(237, 204, 97)),
    (512, Rgb::new(237, 200, 80)),
    (1024, Rgb::new(237, 197, 63)),
    (2048, Rgb::new(237, 194, 46)),
];

/// Text size bucket. Terminals have one glyph size, so the view renders
/// `Large` in bold and the others plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Large,
    Medium,
    Small,
}

pub fn tile_color(value: u32) -> Rgb {
    if value > MAX_PALETTE_TILE {
        return TILE_OVERFLOW;
    }
    TILE_COLORS
        .iter()
        .find(|(v, _)| *v == value)
        .map_or(TILE_OVERFLOW, |(_, rgb)| *rgb)
}

pub fn text_color(value: u32) -> Rgb {
    if value >= LIGHT_TEXT_FROM {
        TEXT_LIGHT
    } else {
        TEXT_DARK
    }
}

pub fn text_size(value: u32) -> TextSize {
    match value {
        0..=64 => TextSize::Large,
        65..=512 => TextSize::Medium,
        _ => TextSize::Small,
    }
}

/// Full style for a tile's face and label.
pub fn tile_style(value: u32) -> CellStyle {
    let style = CellStyle::new(text_color(value), tile_color(value));
    match text_size(value) {
        TextSize::Large => style.bold(),
        TextSize::Medium | TextSize::Small => style,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values_use_the_table() {
        assert_eq!(tile_color(0), Rgb::new(204, 192, 179));
        assert_eq!(tile_color(2), Rgb::new(238, 228, 218));
        assert_eq!(tile_color(2048), Rgb::new(237, 194, 46));
    }

    #[test]
    fn large_values_overflow() {
        assert_eq!(tile_color(4096), TILE_OVERFLOW);
        assert_eq!(tile_color(1 << 20), TILE_OVERFLOW);
    }

    #[test]
    fn text_contrast_switches_at_eight() {
        assert_eq!(text_color(2), TEXT_DARK);
        assert_eq!(text_color(4), TEXT_DARK);
        assert_eq!(text_color(8), TEXT_LIGHT);
        assert_eq!(text_color(4096), TEXT_LIGHT);
    }

    #[test]
    fn text_size_buckets() {
        assert_eq!(text_size(2), TextSize::Large);
        assert_eq!(text_size(64), TextSize::Large);
        assert_eq!(text_size(128), TextSize::Medium);
        assert_eq!(text_size(512), TextSize::Medium);
        assert_eq!(text_size(1024), TextSize::Small);
        assert!(tile_style(32).bold);
        assert!(!tile_style(256).bold);
    }
}
