//! Hex color parsing with graceful fallback, channel scaling.
//!
//! Accent colors arrive as strings from content records. A malformed
//! string must degrade to a caller-supplied fallback fill; it must never
//! abort texture generation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb`, leading `#` optional.
    pub fn parse(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or_else(|| s.trim());
        match hex.len() {
            3 => {
                let mut it = hex.chars();
                let r = it.next()?.to_digit(16)? as u8;
                let g = it.next()?.to_digit(16)? as u8;
                let b = it.next()?.to_digit(16)? as u8;
                Some(Self::new(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Parse, degrading to `fallback` instead of failing.
    pub fn parse_or(s: &str, fallback: Self) -> Self {
        Self::parse(s).unwrap_or(fallback)
    }

    /// Multiply each channel by `factor`, clamping to 255. Factors above
    /// one brighten, below one darken.
    pub fn scaled(&self, factor: f32) -> Self {
        let scale = |c: u8| ((c as f32 * factor) as i32).clamp(0, 255) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }

    /// Linear blend toward `other`.
    pub fn mix(&self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
        Self::new(lerp(self.r, other.r), lerp(self.g, other.g), lerp(self.b, other.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_six_digit_hex() {
        assert_eq!(Rgb8::parse("#44aaee"), Some(Rgb8::new(0x44, 0xaa, 0xee)));
        assert_eq!(Rgb8::parse("c49850"), Some(Rgb8::new(0xc4, 0x98, 0x50)));
    }

    #[test]
    fn test_parses_three_digit_hex() {
        assert_eq!(Rgb8::parse("#fff"), Some(Rgb8::new(255, 255, 255)));
        assert_eq!(Rgb8::parse("#a00"), Some(Rgb8::new(170, 0, 0)));
    }

    #[test]
    fn test_malformed_degrades_to_fallback() {
        let fallback = Rgb8::new(10, 10, 10);
        assert_eq!(Rgb8::parse_or("", fallback), fallback);
        assert_eq!(Rgb8::parse_or("#gg0011", fallback), fallback);
        assert_eq!(Rgb8::parse_or("not-a-color", fallback), fallback);
        assert_eq!(Rgb8::parse_or("#12345", fallback), fallback);
    }

    #[test]
    fn test_scaled_clamps() {
        let c = Rgb8::new(200, 100, 0);
        let brighter = c.scaled(1.4);
        assert_eq!(brighter, Rgb8::new(255, 140, 0));
        let darker = c.scaled(0.5);
        assert_eq!(darker, Rgb8::new(100, 50, 0));
    }

    #[test]
    fn test_mix_endpoints() {
        let a = Rgb8::new(0, 0, 0);
        let b = Rgb8::new(255, 255, 255);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
    }
}
