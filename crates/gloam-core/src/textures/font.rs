//! Built-in 5x7 pixel font for labels, plaques, and slides.
//!
//! Glyphs are uppercase-only bitmaps; lowercase input is folded up.
//! Advance is fixed at six columns per glyph (five drawn plus one gap),
//! which keeps measurement trivial and the greedy wrap deterministic.

use image::{Rgba, RgbaImage};

pub const GLYPH_COLS: u32 = 5;
pub const GLYPH_ROWS: u32 = 7;

/// Horizontal advance for one glyph at the given pixel size (height).
pub fn advance(size: f32) -> f32 {
    size * 6.0 / GLYPH_ROWS as f32
}

/// Measured width of a line at the given pixel size.
pub fn measure(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * advance(size)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Bitmap rows for one glyph, five bits per row, MSB is the left column.
fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b11110, 0b10001, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '\'' => [0b01100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000],
        ':' => [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
        '/' => [0b00001, 0b00010, 0b00100, 0b00100, 0b01000, 0b10000, 0b00000],
        '\u{00b7}' => [0b00000, 0b00000, 0b01100, 0b01100, 0b00000, 0b00000, 0b00000],
        '&' => [0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '?' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        '+' => [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        _ => return None,
    };
    Some(rows)
}

/// Draw one line of text. `x` is the anchor per `align`, `y` the glyph
/// top, `size` the glyph height in pixels. Unknown characters advance
/// without marking, spaces included.
pub fn draw_text(img: &mut RgbaImage, text: &str, x: f32, y: f32, size: f32, color: Rgba<u8>, align: Align) {
    let unit = size / GLYPH_ROWS as f32;
    let start_x = match align {
        Align::Left => x,
        Align::Center => x - measure(text, size) * 0.5,
    };
    let mut pen = start_x;
    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_COLS {
                    if bits & (1 << (GLYPH_COLS - 1 - col)) != 0 {
                        cell(img, pen + col as f32 * unit, y + row as f32 * unit, unit, color);
                    }
                }
            }
        }
        pen += advance(size);
    }
}

/// Fill one font cell, always at least one pixel so low texture scales
/// stay legible-ish instead of dropping strokes entirely.
fn cell(img: &mut RgbaImage, x: f32, y: f32, unit: f32, color: Rgba<u8>) {
    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;
    let x1 = ((x + unit).floor() as i64).max(x0 + 1);
    let y1 = ((y + unit).floor() as i64).max(y0 + 1);
    for py in y0..y1 {
        for px in x0..x1 {
            if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height() {
                img.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_is_monospace() {
        let one = measure("A", 14.0);
        assert!((measure("AVAL", 14.0) - one * 4.0).abs() < 1e-4);
        assert!((measure("i i", 14.0) - one * 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_draw_marks_pixels_inside_bounds() {
        let mut img = RgbaImage::from_pixel(64, 16, Rgba([0, 0, 0, 255]));
        draw_text(&mut img, "HI", 2.0, 2.0, 14.0, Rgba([255, 255, 255, 255]), Align::Left);
        let lit = img.pixels().filter(|p| p.0[0] == 255).count();
        assert!(lit > 10);
    }

    #[test]
    fn test_unknown_chars_advance_silently() {
        let mut img = RgbaImage::from_pixel(64, 16, Rgba([0, 0, 0, 255]));
        draw_text(&mut img, "\u{2603}\u{2603}", 2.0, 2.0, 14.0, Rgba([255, 255, 255, 255]), Align::Left);
        assert!(img.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn test_tiny_size_still_draws() {
        let mut img = RgbaImage::from_pixel(32, 8, Rgba([0, 0, 0, 255]));
        draw_text(&mut img, "E", 1.0, 1.0, 3.5, Rgba([255, 255, 255, 255]), Align::Left);
        assert!(img.pixels().any(|p| p.0[0] == 255));
    }

    #[test]
    fn test_lowercase_folds_to_uppercase() {
        let mut upper = RgbaImage::from_pixel(32, 16, Rgba([0, 0, 0, 255]));
        let mut lower = RgbaImage::from_pixel(32, 16, Rgba([0, 0, 0, 255]));
        draw_text(&mut upper, "G", 2.0, 2.0, 14.0, Rgba([255, 255, 255, 255]), Align::Left);
        draw_text(&mut lower, "g", 2.0, 2.0, 14.0, Rgba([255, 255, 255, 255]), Align::Left);
        assert_eq!(upper.as_raw(), lower.as_raw());
    }
}
