//! Shadow tokens for theming

use tincture_core::Color;

token_keys! {
    /// Semantic shadow token keys for dynamic access
    pub enum ShadowToken {
        /// Subtle elevation
        Sm => "sm",
        /// Card elevation
        Md => "md",
        /// Modal elevation
        Lg => "lg",
    }
}

/// A drop shadow definition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowStyle {
    pub color: Color,
    pub radius: f32,
    pub x: f32,
    pub y: f32,
}

impl ShadowStyle {
    pub const fn new(color: Color, radius: f32, x: f32, y: f32) -> Self {
        Self {
            color,
            radius,
            x,
            y,
        }
    }

    pub const fn none() -> Self {
        Self {
            color: Color::TRANSPARENT,
            radius: 0.0,
            x: 0.0,
            y: 0.0,
        }
    }

    /// Whether the shadow draws nothing.
    pub fn is_invisible(&self) -> bool {
        self.color.a == 0.0 || (self.radius == 0.0 && self.x == 0.0 && self.y == 0.0)
    }
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self::none()
    }
}

/// Complete set of shadow tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowScale {
    pub sm: ShadowStyle,
    pub md: ShadowStyle,
    pub lg: ShadowStyle,
}

impl ShadowScale {
    /// Get shadow by token key
    pub fn get(&self, token: ShadowToken) -> &ShadowStyle {
        match token {
            ShadowToken::Sm => &self.sm,
            ShadowToken::Md => &self.md,
            ShadowToken::Lg => &self.lg,
        }
    }

    /// No shadows for flat design
    pub const fn none() -> Self {
        Self {
            sm: ShadowStyle::none(),
            md: ShadowStyle::none(),
            lg: ShadowStyle::none(),
        }
    }
}

impl Default for ShadowScale {
    fn default() -> Self {
        let base_color = Color::BLACK;
        Self {
            sm: ShadowStyle::new(base_color.with_alpha(0.08), 4.0, 0.0, 2.0),
            md: ShadowStyle::new(base_color.with_alpha(0.12), 8.0, 0.0, 4.0),
            lg: ShadowStyle::new(base_color.with_alpha(0.16), 16.0, 0.0, 8.0),
        }
    }
}
