//! RGBA colors
//!
//! Channels are stored as `f32` in `0.0..=1.0`. Colors serialize as CSS hex
//! strings (`#rrggbb` or `#rrggbbaa`) so token files stay readable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Error returned when a hex color string cannot be parsed
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid hex color `{0}` (expected #rrggbb or #rrggbbaa)")]
pub struct ColorParseError(pub String);

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse `#rrggbb` / `#rrggbbaa` (the leading `#` is optional)
    pub fn parse_hex(src: &str) -> Result<Self, ColorParseError> {
        let digits = src.trim().trim_start_matches('#');
        let err = || ColorParseError(src.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        let value = u32::from_str_radix(digits, 16).map_err(|_| err())?;
        match digits.len() {
            6 => Ok(Self::from_hex(value)),
            8 => Ok(Self::from_hex(value >> 8).with_alpha((value & 0xFF) as f32 / 255.0)),
            _ => Err(err()),
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// 8-bit channel values `[r, g, b]`
    pub fn to_rgb8(&self) -> [u8; 3] {
        [channel(self.r), channel(self.g), channel(self.b)]
    }

    /// Format as a CSS color value.
    ///
    /// Opaque colors use `#rrggbb`; translucent colors use `rgba(...)`.
    pub fn to_css(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        if self.a < 1.0 {
            format!("rgba({},{},{},{})", r, g, b, round_alpha(self.a))
        } else {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        }
    }
}

fn channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn round_alpha(a: f32) -> f32 {
    (a.clamp(0.0, 1.0) * 100.0).round() / 100.0
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        if self.a < 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", r, g, b, channel(self.a))
        } else {
            write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trips_through_css() {
        // 0x1E is a channel value that truncation would turn into 0x1D
        let color = Color::from_hex(0x1E66F5);
        assert_eq!(color.to_css(), "#1e66f5");
        assert_eq!(color.to_string(), "#1e66f5");
    }

    #[test]
    fn test_translucent_css_uses_rgba() {
        let color = Color::from_hex(0x000000).with_alpha(0.25);
        assert_eq!(color.to_css(), "rgba(0,0,0,0.25)");
    }

    #[test]
    fn test_parse_hex_variants() {
        assert_eq!(Color::parse_hex("#ffffff").unwrap(), Color::WHITE);
        assert_eq!(Color::parse_hex("000000").unwrap(), Color::BLACK);

        let translucent = Color::parse_hex("#ff000080").unwrap();
        assert_eq!(translucent.to_rgb8(), [255, 0, 0]);
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert!(Color::parse_hex("#fff").is_err());
        assert!(Color::parse_hex("#gggggg").is_err());
        assert!(Color::parse_hex("").is_err());
        assert!(Color::parse_hex("#+12345").is_err());
    }

    #[test]
    fn test_serde_as_hex_string() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            color: Color,
        }

        let parsed: Wrapper = toml::from_str(r##"color = "#00ff41""##).unwrap();
        assert_eq!(parsed.color.to_rgb8(), [0x00, 0xff, 0x41]);

        let bad: Result<Wrapper, _> = toml::from_str(r#"color = "green""#);
        assert!(bad.is_err());
    }
}
