//! RGBA color and hex token parsing

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;

/// RGBA color with channels in `0.0..=1.0` (sRGB)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

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

    /// Opaque color from a `0xRRGGBB` literal.
    pub fn from_hex(hex: u32) -> Self {
        Self::from_argb8(
            0xFF,
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Color from 8-bit alpha, red, green and blue channels.
    pub fn from_argb8(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Parses a textual hex token.
    ///
    /// Accepts an optional leading `#` followed by:
    /// - 3 digits (`RGB`), each nibble expanded by replication (`n * 17`)
    /// - 6 digits (`RRGGBB`), fully opaque
    /// - 8 digits (`AARRGGBB`), explicit alpha
    ///
    /// Every other shape is an error; a malformed token never decodes to black.
    ///
    /// ```rust
    /// use tincture_core::Color;
    ///
    /// assert_eq!(Color::parse_hex("07F"), Color::parse_hex("0077FF"));
    /// assert!(Color::parse_hex("12345").is_err());
    /// ```
    pub fn parse_hex(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.is_empty() {
            return Err(ColorError::Empty);
        }

        if let Some(ch) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit {
                input: input.to_string(),
                ch,
            });
        }

        // All characters are ASCII hex digits here, so byte length == digit count.
        let value = u32::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidLength {
            input: input.to_string(),
            len: digits.len(),
        })?;

        match digits.len() {
            3 => {
                let expand = |nibble: u32| (nibble as u8) * 17;
                Ok(Self::from_argb8(
                    0xFF,
                    expand((value >> 8) & 0xF),
                    expand((value >> 4) & 0xF),
                    expand(value & 0xF),
                ))
            }
            6 => Ok(Self::from_hex(value)),
            8 => Ok(Self::from_argb8(
                (value >> 24) as u8,
                ((value >> 16) & 0xFF) as u8,
                ((value >> 8) & 0xFF) as u8,
                (value & 0xFF) as u8,
            )),
            len => Err(ColorError::InvalidLength {
                input: input.to_string(),
                len,
            }),
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Scales the current alpha by `factor`.
    pub fn multiply_alpha(mut self, factor: f32) -> Self {
        self.a *= factor;
        self
    }

    /// Returns `[a, r, g, b]` as 8-bit channels.
    pub fn to_argb8(&self) -> [u8; 4] {
        fn channel(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [channel(self.a), channel(self.r), channel(self.g), channel(self.b)]
    }

    /// `#RRGGBB` for opaque colors, `#AARRGGBB` otherwise.
    pub fn to_hex_string(&self) -> String {
        let [a, r, g, b] = self.to_argb8();
        if a == 0xFF {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", a, r, g, b)
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl std::str::FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::parse_hex(&raw).map_err(de::Error::custom)
    }
}
