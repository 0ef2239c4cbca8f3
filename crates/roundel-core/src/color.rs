use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const TRANSPARENT: Color = Color(0, 0, 0, 0);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);
    pub const LIGHT_GRAY: Color = Color(170, 170, 170, 255);
    pub const DARK_GRAY: Color = Color(85, 85, 85, 255);
    pub const RED: Color = Color(255, 0, 0, 255);
    pub const BLUE: Color = Color(0, 0, 255, 255);

    /// Lenient hex parsing for literals: malformed input falls back to black.
    pub fn from_hex(hex: &str) -> Self {
        hex.parse().unwrap_or(Color::BLACK)
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Color(self.0, self.1, self.2, a)
    }

    /// Scales the alpha channel by `factor` (clamped to 0..=1).
    pub fn mul_alpha(self, factor: f32) -> Self {
        let a = (self.3 as f32 * factor.clamp(0.0, 1.0)).round() as u8;
        self.with_alpha(a)
    }

    pub fn is_transparent(&self) -> bool {
        self.3 == 0
    }

    pub fn to_hex(&self) -> String {
        if self.3 == 255 {
            format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.0, self.1, self.2, self.3)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Strict parsing of `#RRGGBB` / `#RRGGBBAA` (the `#` is optional).
impl FromStr for Color {
    type Err = Error;

    fn from_str(hex: &str) -> Result<Self, Self::Err> {
        let s = hex.trim().trim_start_matches('#');
        let invalid = || Error::InvalidColor(hex.to_string());
        if !s.is_ascii() || !(s.len() == 6 || s.len() == 8) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| invalid());
        let a = if s.len() == 8 { channel(6)? } else { 255 };
        Ok(Color(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
