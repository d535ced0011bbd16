//! The theme aggregate

use tincture_core::{Color, ColorScheme};

use crate::scale::ScaleFactor;
use crate::tokens::*;

/// A complete, self-consistent set of token tables.
///
/// Constructed once (from a preset, [`build_theme`](crate::build_theme) or a
/// [`ThemeDocument`](crate::ThemeDocument)) and never mutated afterwards.
/// Share it by reference or behind an `Arc`; concurrent readers need no
/// coordination.
#[derive(Clone, Debug, PartialEq)]
pub struct DesignSystem {
    name: String,
    colors: ColorPalette,
    typography: Typography,
    spacing: SpacingScale,
    corner_radius: CornerRadiusScale,
    shadow: ShadowScale,
    layout: LayoutConstants,
}

impl DesignSystem {
    pub fn new(
        name: impl Into<String>,
        colors: ColorPalette,
        typography: Typography,
        spacing: SpacingScale,
        corner_radius: CornerRadiusScale,
        shadow: ShadowScale,
        layout: LayoutConstants,
    ) -> Self {
        Self {
            name: name.into(),
            colors,
            typography,
            spacing,
            corner_radius,
            shadow,
            layout,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colors(&self) -> &ColorPalette {
        &self.colors
    }

    pub fn typography(&self) -> &Typography {
        &self.typography
    }

    pub fn spacing(&self) -> &SpacingScale {
        &self.spacing
    }

    pub fn corner_radius(&self) -> &CornerRadiusScale {
        &self.corner_radius
    }

    pub fn shadow(&self) -> &ShadowScale {
        &self.shadow
    }

    pub fn layout(&self) -> &LayoutConstants {
        &self.layout
    }

    // ========== Token Access ==========

    /// Resolve a color token for an appearance
    pub fn color(&self, token: ColorToken, scheme: ColorScheme) -> Color {
        self.colors.get(token).resolve(scheme)
    }

    /// Resolve the whole palette for an appearance
    pub fn resolve_colors(&self, scheme: ColorScheme) -> ResolvedPalette {
        self.colors.resolve(scheme)
    }

    pub fn font(&self, token: TypographyToken) -> &FontStyle {
        self.typography.get(token)
    }

    pub fn spacing_value(&self, token: SpacingToken) -> f32 {
        self.spacing.get(token)
    }

    pub fn radius(&self, token: RadiusToken) -> f32 {
        self.corner_radius.get(token)
    }

    pub fn shadow_style(&self, token: ShadowToken) -> &ShadowStyle {
        self.shadow.get(token)
    }

    pub fn layout_value(&self, token: LayoutToken) -> f32 {
        self.layout.get(token)
    }

    // ========== Dynamic Type ==========

    pub fn scaled_spacing(&self, factor: impl Into<ScaleFactor>) -> ScaledSpacing {
        self.spacing.scaled(factor)
    }

    pub fn scaled_layout(&self, factor: impl Into<ScaleFactor>) -> ScaledLayout {
        self.layout.scaled(factor)
    }

    /// Returns a copy carrying a different name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

impl Default for DesignSystem {
    fn default() -> Self {
        Self::new(
            "Default",
            ColorPalette::default(),
            Typography::default(),
            SpacingScale::default(),
            CornerRadiusScale::default(),
            ShadowScale::default(),
            LayoutConstants::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_design_system_is_shareable() {
        assert_send_sync::<DesignSystem>();
    }

    #[test]
    fn test_token_access() {
        let theme = DesignSystem::default();
        assert_eq!(theme.name(), "Default");
        assert_eq!(
            theme.color(ColorToken::BackgroundPrimary, ColorScheme::Dark),
            Color::from_hex(0x1C1C1E)
        );
        assert_eq!(theme.spacing_value(SpacingToken::Md), 16.0);
        assert_eq!(theme.radius(RadiusToken::Sm), 8.0);
        assert_eq!(theme.layout_value(LayoutToken::MinTouchTarget), 44.0);
        assert_eq!(theme.font(TypographyToken::BodyLarge).size, 17.0);
        assert_eq!(theme.shadow_style(ShadowToken::Lg).radius, 16.0);
    }

    #[test]
    fn test_scaled_accessors() {
        let theme = DesignSystem::default();
        assert_eq!(theme.scaled_spacing(2.0).lg, 48.0);
        assert_eq!(theme.scaled_layout(0.8).min_touch_target, 44.0);
    }

    #[test]
    fn test_renamed_keeps_tokens() {
        let theme = DesignSystem::default();
        let renamed = theme.renamed("Brand");
        assert_eq!(renamed.name(), "Brand");
        assert_eq!(renamed.colors(), theme.colors());
        assert_ne!(renamed, theme);
    }
}
