//! Adaptive color tokens for theming

use tincture_core::{Color, ColorError, ColorScheme};

/// A color defined as a light/dark pair, resolved by the host's appearance.
///
/// Both sides are always populated; [`AdaptiveColor::solid`] and
/// [`AdaptiveColor::from_hex`] set them to the same value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdaptiveColor {
    pub light: Color,
    pub dark: Color,
}

impl AdaptiveColor {
    pub const fn new(light: Color, dark: Color) -> Self {
        Self { light, dark }
    }

    /// Same color in both appearances.
    pub const fn solid(color: Color) -> Self {
        Self {
            light: color,
            dark: color,
        }
    }

    /// Parses a single hex token used for both appearances.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        Color::parse_hex(hex).map(Self::solid)
    }

    /// Parses a light/dark pair of hex tokens.
    pub fn from_hex_pair(light: &str, dark: &str) -> Result<Self, ColorError> {
        Ok(Self {
            light: Color::parse_hex(light)?,
            dark: Color::parse_hex(dark)?,
        })
    }

    /// Picks the value for `scheme`.
    pub fn resolve(&self, scheme: ColorScheme) -> Color {
        match scheme {
            ColorScheme::Light => self.light,
            ColorScheme::Dark => self.dark,
        }
    }

    /// Whether both appearances share one value.
    pub fn is_solid(&self) -> bool {
        self.light == self.dark
    }

    /// Hex label of the light value, for swatches and debugging.
    pub fn hex_label(&self) -> String {
        self.light.to_hex_string()
    }
}

impl From<Color> for AdaptiveColor {
    fn from(color: Color) -> Self {
        Self::solid(color)
    }
}

token_keys! {
    /// Semantic color token keys for dynamic access
    pub enum ColorToken {
        // Brand
        PrimaryBrand => "primary_brand",
        SecondaryBrand => "secondary_brand",

        // Background
        BackgroundPrimary => "background_primary",
        BackgroundSecondary => "background_secondary",
        BackgroundTertiary => "background_tertiary",

        // Text
        TextPrimary => "text_primary",
        TextSecondary => "text_secondary",
        TextTertiary => "text_tertiary",

        // Semantic
        Success => "success",
        Warning => "warning",
        Error => "error",
        Info => "info",

        // Border & separator
        Separator => "separator",
        Border => "border",
    }
}

/// Complete set of adaptive color tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ColorPalette {
    // Brand
    pub primary_brand: AdaptiveColor,
    pub secondary_brand: AdaptiveColor,

    // Background
    pub background_primary: AdaptiveColor,
    pub background_secondary: AdaptiveColor,
    pub background_tertiary: AdaptiveColor,

    // Text
    pub text_primary: AdaptiveColor,
    pub text_secondary: AdaptiveColor,
    pub text_tertiary: AdaptiveColor,

    // Semantic
    pub success: AdaptiveColor,
    pub warning: AdaptiveColor,
    pub error: AdaptiveColor,
    pub info: AdaptiveColor,

    // Border & separator
    pub separator: AdaptiveColor,
    pub border: AdaptiveColor,
}

impl ColorPalette {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> &AdaptiveColor {
        match token {
            ColorToken::PrimaryBrand => &self.primary_brand,
            ColorToken::SecondaryBrand => &self.secondary_brand,
            ColorToken::BackgroundPrimary => &self.background_primary,
            ColorToken::BackgroundSecondary => &self.background_secondary,
            ColorToken::BackgroundTertiary => &self.background_tertiary,
            ColorToken::TextPrimary => &self.text_primary,
            ColorToken::TextSecondary => &self.text_secondary,
            ColorToken::TextTertiary => &self.text_tertiary,
            ColorToken::Success => &self.success,
            ColorToken::Warning => &self.warning,
            ColorToken::Error => &self.error,
            ColorToken::Info => &self.info,
            ColorToken::Separator => &self.separator,
            ColorToken::Border => &self.border,
        }
    }

    /// Resolves every token for one appearance.
    pub fn resolve(&self, scheme: ColorScheme) -> ResolvedPalette {
        ResolvedPalette {
            scheme,
            primary_brand: self.primary_brand.resolve(scheme),
            secondary_brand: self.secondary_brand.resolve(scheme),
            background_primary: self.background_primary.resolve(scheme),
            background_secondary: self.background_secondary.resolve(scheme),
            background_tertiary: self.background_tertiary.resolve(scheme),
            text_primary: self.text_primary.resolve(scheme),
            text_secondary: self.text_secondary.resolve(scheme),
            text_tertiary: self.text_tertiary.resolve(scheme),
            success: self.success.resolve(scheme),
            warning: self.warning.resolve(scheme),
            error: self.error.resolve(scheme),
            info: self.info.resolve(scheme),
            separator: self.separator.resolve(scheme),
            border: self.border.resolve(scheme),
        }
    }

    /// iOS system palette
    pub fn default_palette() -> Self {
        Self {
            primary_brand: AdaptiveColor::solid(Color::from_hex(0x007AFF)),
            secondary_brand: AdaptiveColor::solid(Color::from_hex(0x5856D6)),
            background_primary: pair(0xFFFFFF, 0x1C1C1E),
            background_secondary: pair(0xF2F2F7, 0x2C2C2E),
            background_tertiary: pair(0xFFFFFF, 0x3A3A3C),
            text_primary: pair(0x000000, 0xFFFFFF),
            text_secondary: pair(0x3C3C43, 0xEBEBF5),
            text_tertiary: pair(0x3C3C43, 0xEBEBF5),
            success: AdaptiveColor::solid(Color::from_hex(0x34C759)),
            warning: AdaptiveColor::solid(Color::from_hex(0xFF9500)),
            error: AdaptiveColor::solid(Color::from_hex(0xFF3B30)),
            info: AdaptiveColor::solid(Color::from_hex(0x007AFF)),
            separator: pair(0x3C3C43, 0x545458),
            border: pair(0xC6C6C8, 0x545458),
        }
    }

    /// Monochrome palette for the minimal theme
    pub fn minimal() -> Self {
        Self {
            primary_brand: AdaptiveColor::solid(Color::from_hex(0x000000)),
            secondary_brand: AdaptiveColor::solid(Color::from_hex(0x6B6B6B)),
            background_primary: pair(0xFFFFFF, 0x0A0A0A),
            background_secondary: pair(0xF8F8F8, 0x1A1A1A),
            background_tertiary: pair(0xF0F0F0, 0x2A2A2A),
            text_primary: pair(0x000000, 0xFFFFFF),
            text_secondary: pair(0x666666, 0x999999),
            text_tertiary: pair(0x999999, 0x666666),
            success: AdaptiveColor::solid(Color::from_hex(0x00C853)),
            warning: AdaptiveColor::solid(Color::from_hex(0xFFB300)),
            error: AdaptiveColor::solid(Color::from_hex(0xFF1744)),
            info: AdaptiveColor::solid(Color::from_hex(0x2979FF)),
            separator: pair(0xE0E0E0, 0x333333),
            border: pair(0xE0E0E0, 0x333333),
        }
    }

    /// Vibrant palette for the pop theme
    pub fn pop() -> Self {
        Self {
            primary_brand: AdaptiveColor::solid(Color::from_hex(0xFF6B6B)),
            secondary_brand: AdaptiveColor::solid(Color::from_hex(0x4ECDC4)),
            background_primary: pair(0xFFFFFF, 0x1C1C1E),
            background_secondary: pair(0xFFF9F0, 0x2C2C2E),
            background_tertiary: pair(0xF0F7FF, 0x3A3A3C),
            text_primary: pair(0x2D3436, 0xFFFFFF),
            text_secondary: pair(0x636E72, 0xB2BEC3),
            text_tertiary: pair(0xB2BEC3, 0x636E72),
            success: AdaptiveColor::solid(Color::from_hex(0x00B894)),
            warning: AdaptiveColor::solid(Color::from_hex(0xFDCB6E)),
            error: AdaptiveColor::solid(Color::from_hex(0xE17055)),
            info: AdaptiveColor::solid(Color::from_hex(0x74B9FF)),
            separator: pair(0xDFE6E9, 0x4A4A4A),
            border: pair(0xDFE6E9, 0x4A4A4A),
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::default_palette()
    }
}

fn pair(light: u32, dark: u32) -> AdaptiveColor {
    AdaptiveColor::new(Color::from_hex(light), Color::from_hex(dark))
}

/// A [`ColorPalette`] resolved for a single appearance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedPalette {
    pub scheme: ColorScheme,
    pub primary_brand: Color,
    pub secondary_brand: Color,
    pub background_primary: Color,
    pub background_secondary: Color,
    pub background_tertiary: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub separator: Color,
    pub border: Color,
}

impl ResolvedPalette {
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::PrimaryBrand => self.primary_brand,
            ColorToken::SecondaryBrand => self.secondary_brand,
            ColorToken::BackgroundPrimary => self.background_primary,
            ColorToken::BackgroundSecondary => self.background_secondary,
            ColorToken::BackgroundTertiary => self.background_tertiary,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::TextTertiary => self.text_tertiary,
            ColorToken::Success => self.success,
            ColorToken::Warning => self.warning,
            ColorToken::Error => self.error,
            ColorToken::Info => self.info,
            ColorToken::Separator => self.separator,
            ColorToken::Border => self.border,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_hex_is_mode_invariant() {
        for hex in ["007AFF", "FF3B30", "000000", "ABCDEF"] {
            let color = AdaptiveColor::from_hex(hex).unwrap();
            assert_eq!(
                color.resolve(ColorScheme::Light),
                color.resolve(ColorScheme::Dark),
                "{hex}"
            );
            assert!(color.is_solid());
        }
    }

    #[test]
    fn test_pair_resolves_by_scheme() {
        let color = AdaptiveColor::from_hex_pair("FFFFFF", "1C1C1E").unwrap();
        assert_eq!(color.resolve(ColorScheme::Light), Color::WHITE);
        assert_eq!(color.resolve(ColorScheme::Dark), Color::from_hex(0x1C1C1E));
        // Idempotent
        assert_eq!(
            color.resolve(ColorScheme::Dark),
            color.resolve(ColorScheme::Dark)
        );
    }

    #[test]
    fn test_pair_rejects_malformed_side() {
        assert!(AdaptiveColor::from_hex_pair("FFFFFF", "1C1C1").is_err());
        assert!(AdaptiveColor::from_hex("").is_err());
    }

    #[test]
    fn test_hex_label_uses_light_value() {
        let color = AdaptiveColor::from_hex_pair("c6c6c8", "545458").unwrap();
        assert_eq!(color.hex_label(), "#C6C6C8");
    }

    #[test]
    fn test_token_lookup_covers_every_field() {
        let palette = ColorPalette::default();
        assert_eq!(ColorToken::ALL.len(), 14);
        for token in ColorToken::ALL {
            assert_eq!(ColorToken::from_id(token.id()), Some(*token));
        }
        assert_eq!(
            palette.get(ColorToken::Error).light,
            Color::from_hex(0xFF3B30)
        );
    }

    #[test]
    fn test_resolved_palette_matches_lookup() {
        let palette = ColorPalette::pop();
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            let resolved = palette.resolve(scheme);
            for token in ColorToken::ALL {
                assert_eq!(resolved.get(*token), palette.get(*token).resolve(scheme));
            }
        }
    }
}
