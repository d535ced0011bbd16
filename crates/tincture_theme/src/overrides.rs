//! Partial theme overrides merged leaf by leaf onto a base theme.
//!
//! A [`ThemeOverrides`] mirrors [`DesignSystem`] with every leaf optional.
//! Merging never replaces a whole table with an incomplete one: each leaf
//! takes the override when present and the base value otherwise. Whole-table
//! preset selectors are applied first, leaf overrides on top of them.

use rustc_hash::FxHashMap;
use tincture_core::Color;

use crate::error::{Result, ThemeError};
use crate::presets::{
    PalettePreset, RadiusPreset, ShadowPreset, SpacingPreset, TypographyPreset,
};
use crate::theme::DesignSystem;
use crate::tokens::*;

/// Override for one adaptive color; unset sides keep the base value
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorOverride {
    pub light: Option<Color>,
    pub dark: Option<Color>,
}

impl ColorOverride {
    /// Same color in both appearances
    pub fn solid(color: Color) -> Self {
        Self {
            light: Some(color),
            dark: Some(color),
        }
    }

    pub fn pair(light: Color, dark: Color) -> Self {
        Self {
            light: Some(light),
            dark: Some(dark),
        }
    }

    pub fn light_only(color: Color) -> Self {
        Self {
            light: Some(color),
            dark: None,
        }
    }

    pub fn dark_only(color: Color) -> Self {
        Self {
            light: None,
            dark: Some(color),
        }
    }
}

impl From<AdaptiveColor> for ColorOverride {
    fn from(color: AdaptiveColor) -> Self {
        Self::pair(color.light, color.dark)
    }
}

impl From<Color> for ColorOverride {
    fn from(color: Color) -> Self {
        Self::solid(color)
    }
}

/// Override for one font style
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FontStyleOverride {
    pub size: Option<f32>,
    pub weight: Option<FontWeight>,
    pub design: Option<FontDesign>,
    pub relative_to: Option<TextStyle>,
}

impl From<FontStyle> for FontStyleOverride {
    fn from(style: FontStyle) -> Self {
        Self {
            size: Some(style.size),
            weight: Some(style.weight),
            design: Some(style.design),
            relative_to: Some(style.relative_to),
        }
    }
}

/// Override for one shadow style
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShadowStyleOverride {
    pub color: Option<Color>,
    /// Replaces the alpha of the merged color
    pub opacity: Option<f32>,
    pub radius: Option<f32>,
    pub x: Option<f32>,
    pub y: Option<f32>,
}

impl From<ShadowStyle> for ShadowStyleOverride {
    fn from(style: ShadowStyle) -> Self {
        Self {
            color: Some(style.color),
            opacity: None,
            radius: Some(style.radius),
            x: Some(style.x),
            y: Some(style.y),
        }
    }
}

/// A partial theme.
///
/// # Example
///
/// ```rust
/// use tincture_core::Color;
/// use tincture_theme::{build_theme, ColorToken, RadiusPreset, RadiusToken, ThemeOverrides};
///
/// let theme = build_theme(
///     &ThemeOverrides::new()
///         .with_name("Brand")
///         .with_color(ColorToken::PrimaryBrand, Color::from_hex(0xFF0066))
///         .with_corner_radius_preset(RadiusPreset::Sharp)
///         .with_radius(RadiusToken::Md, 6.0),
/// )
/// .unwrap();
///
/// assert_eq!(theme.corner_radius().sm, 2.0);
/// assert_eq!(theme.corner_radius().md, 6.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemeOverrides {
    pub name: Option<String>,

    // Whole-table presets
    pub colors_preset: Option<PalettePreset>,
    pub typography_preset: Option<TypographyPreset>,
    pub spacing_preset: Option<SpacingPreset>,
    pub corner_radius_preset: Option<RadiusPreset>,
    pub shadow_preset: Option<ShadowPreset>,

    // Leaf overrides
    pub colors: FxHashMap<ColorToken, ColorOverride>,
    pub typography: FxHashMap<TypographyToken, FontStyleOverride>,
    pub spacing: FxHashMap<SpacingToken, f32>,
    pub corner_radius: FxHashMap<RadiusToken, f32>,
    pub shadow: FxHashMap<ShadowToken, ShadowStyleOverride>,
    pub layout: FxHashMap<LayoutToken, f32>,
}

impl ThemeOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides that restate every token of `theme`.
    ///
    /// Building these standalone reproduces `theme` exactly.
    pub fn from_theme(theme: &DesignSystem) -> Self {
        let mut overrides = Self::new().with_name(theme.name());
        for token in ColorToken::ALL {
            overrides.colors.insert(*token, (*theme.colors().get(*token)).into());
        }
        for token in TypographyToken::ALL {
            overrides
                .typography
                .insert(*token, (*theme.typography().get(*token)).into());
        }
        for token in SpacingToken::ALL {
            overrides.spacing.insert(*token, theme.spacing().get(*token));
        }
        for token in RadiusToken::ALL {
            overrides
                .corner_radius
                .insert(*token, theme.corner_radius().get(*token));
        }
        for token in ShadowToken::ALL {
            overrides
                .shadow
                .insert(*token, (*theme.shadow().get(*token)).into());
        }
        for token in LayoutToken::ALL {
            overrides.layout.insert(*token, theme.layout().get(*token));
        }
        overrides
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_colors_preset(mut self, preset: PalettePreset) -> Self {
        self.colors_preset = Some(preset);
        self
    }

    pub fn with_typography_preset(mut self, preset: TypographyPreset) -> Self {
        self.typography_preset = Some(preset);
        self
    }

    pub fn with_spacing_preset(mut self, preset: SpacingPreset) -> Self {
        self.spacing_preset = Some(preset);
        self
    }

    pub fn with_corner_radius_preset(mut self, preset: RadiusPreset) -> Self {
        self.corner_radius_preset = Some(preset);
        self
    }

    pub fn with_shadow_preset(mut self, preset: ShadowPreset) -> Self {
        self.shadow_preset = Some(preset);
        self
    }

    pub fn with_color(mut self, token: ColorToken, color: impl Into<ColorOverride>) -> Self {
        self.colors.insert(token, color.into());
        self
    }

    pub fn with_font(mut self, token: TypographyToken, font: impl Into<FontStyleOverride>) -> Self {
        self.typography.insert(token, font.into());
        self
    }

    pub fn with_spacing(mut self, token: SpacingToken, value: f32) -> Self {
        self.spacing.insert(token, value);
        self
    }

    pub fn with_radius(mut self, token: RadiusToken, value: f32) -> Self {
        self.corner_radius.insert(token, value);
        self
    }

    pub fn with_shadow(mut self, token: ShadowToken, shadow: impl Into<ShadowStyleOverride>) -> Self {
        self.shadow.insert(token, shadow.into());
        self
    }

    pub fn with_layout(mut self, token: LayoutToken, value: f32) -> Self {
        self.layout.insert(token, value);
        self
    }

    /// Whether applying these overrides would leave a base theme unchanged.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.colors_preset.is_none()
            && self.typography_preset.is_none()
            && self.spacing_preset.is_none()
            && self.corner_radius_preset.is_none()
            && self.shadow_preset.is_none()
            && self.colors.is_empty()
            && self.typography.is_empty()
            && self.spacing.is_empty()
            && self.corner_radius.is_empty()
            && self.shadow.is_empty()
            && self.layout.is_empty()
    }

    /// Merges onto `base`.
    pub fn apply(&self, base: &DesignSystem) -> Result<DesignSystem> {
        self.merge(Some(base))
    }

    /// Builds without a base theme.
    ///
    /// Every token must be supplied, either by a table preset or a leaf
    /// override; otherwise [`ThemeError::MissingToken`] names the first gap.
    /// Font styles default to [`FontDesign::Default`] and [`TextStyle::Body`]
    /// and shadow offsets to zero when omitted.
    pub fn build_standalone(&self) -> Result<DesignSystem> {
        self.merge(None)
    }

    fn merge(&self, base: Option<&DesignSystem>) -> Result<DesignSystem> {
        let name = match (&self.name, base) {
            (Some(name), _) => name.clone(),
            (None, Some(base)) => base.name().to_string(),
            (None, None) => return Err(missing("theme", "name".to_string())),
        };

        let colors_base = self
            .colors_preset
            .map(PalettePreset::palette)
            .or_else(|| base.map(|b| b.colors().clone()));
        let typography_base = self
            .typography_preset
            .map(TypographyPreset::typography)
            .or_else(|| base.map(|b| b.typography().clone()));
        let spacing_base = self
            .spacing_preset
            .map(SpacingPreset::spacing)
            .or_else(|| base.map(|b| b.spacing().clone()));
        let radius_base = self
            .corner_radius_preset
            .map(RadiusPreset::corner_radius)
            .or_else(|| base.map(|b| b.corner_radius().clone()));
        let shadow_base = self
            .shadow_preset
            .map(ShadowPreset::shadow)
            .or_else(|| base.map(|b| b.shadow().clone()));
        let layout_base = base.map(|b| b.layout().clone());

        let theme = DesignSystem::new(
            name,
            merge_colors(colors_base.as_ref(), &self.colors)?,
            merge_typography(typography_base.as_ref(), &self.typography)?,
            merge_spacing(spacing_base.as_ref(), &self.spacing)?,
            merge_radius(radius_base.as_ref(), &self.corner_radius)?,
            merge_shadow(shadow_base.as_ref(), &self.shadow)?,
            merge_layout(layout_base.as_ref(), &self.layout)?,
        );

        tracing::debug!(
            theme = theme.name(),
            standalone = base.is_none(),
            colors = self.colors.len(),
            typography = self.typography.len(),
            spacing = self.spacing.len(),
            corner_radius = self.corner_radius.len(),
            shadow = self.shadow.len(),
            layout = self.layout.len(),
            "built theme from overrides"
        );

        Ok(theme)
    }
}

/// Builds a theme by merging `overrides` onto the default preset.
///
/// `build_theme(&ThemeOverrides::default())` equals [`DesignSystem::default`].
pub fn build_theme(overrides: &ThemeOverrides) -> Result<DesignSystem> {
    overrides.apply(&DesignSystem::default())
}

fn missing(table: &'static str, token: String) -> ThemeError {
    ThemeError::MissingToken { table, token }
}

fn require<T>(value: Option<T>, table: &'static str, token: impl FnOnce() -> String) -> Result<T> {
    value.ok_or_else(|| missing(table, token()))
}

fn merge_colors(
    base: Option<&ColorPalette>,
    overrides: &FxHashMap<ColorToken, ColorOverride>,
) -> Result<ColorPalette> {
    let pick = |token: ColorToken| -> Result<AdaptiveColor> {
        let base = base.map(|palette| *palette.get(token));
        let over = overrides.get(&token).copied().unwrap_or_default();
        if overrides.contains_key(&token) {
            tracing::trace!(token = token.id(), "color override");
        }
        Ok(AdaptiveColor::new(
            require(over.light.or(base.map(|c| c.light)), "colors", || {
                format!("{}.light", token.id())
            })?,
            require(over.dark.or(base.map(|c| c.dark)), "colors", || {
                format!("{}.dark", token.id())
            })?,
        ))
    };

    Ok(ColorPalette {
        primary_brand: pick(ColorToken::PrimaryBrand)?,
        secondary_brand: pick(ColorToken::SecondaryBrand)?,
        background_primary: pick(ColorToken::BackgroundPrimary)?,
        background_secondary: pick(ColorToken::BackgroundSecondary)?,
        background_tertiary: pick(ColorToken::BackgroundTertiary)?,
        text_primary: pick(ColorToken::TextPrimary)?,
        text_secondary: pick(ColorToken::TextSecondary)?,
        text_tertiary: pick(ColorToken::TextTertiary)?,
        success: pick(ColorToken::Success)?,
        warning: pick(ColorToken::Warning)?,
        error: pick(ColorToken::Error)?,
        info: pick(ColorToken::Info)?,
        separator: pick(ColorToken::Separator)?,
        border: pick(ColorToken::Border)?,
    })
}

fn merge_typography(
    base: Option<&Typography>,
    overrides: &FxHashMap<TypographyToken, FontStyleOverride>,
) -> Result<Typography> {
    let pick = |token: TypographyToken| -> Result<FontStyle> {
        let base = base.map(|typography| *typography.get(token));
        let over = overrides.get(&token).copied().unwrap_or_default();
        if overrides.contains_key(&token) {
            tracing::trace!(token = token.id(), "typography override");
        }
        Ok(FontStyle {
            size: require(over.size.or(base.map(|f| f.size)), "typography", || {
                format!("{}.size", token.id())
            })?,
            weight: require(over.weight.or(base.map(|f| f.weight)), "typography", || {
                format!("{}.weight", token.id())
            })?,
            design: over
                .design
                .or(base.map(|f| f.design))
                .unwrap_or_default(),
            relative_to: over
                .relative_to
                .or(base.map(|f| f.relative_to))
                .unwrap_or_default(),
        })
    };

    Ok(Typography {
        display_large: pick(TypographyToken::DisplayLarge)?,
        display_medium: pick(TypographyToken::DisplayMedium)?,
        display_small: pick(TypographyToken::DisplaySmall)?,
        headline_large: pick(TypographyToken::HeadlineLarge)?,
        headline_medium: pick(TypographyToken::HeadlineMedium)?,
        headline_small: pick(TypographyToken::HeadlineSmall)?,
        body_large: pick(TypographyToken::BodyLarge)?,
        body_medium: pick(TypographyToken::BodyMedium)?,
        body_small: pick(TypographyToken::BodySmall)?,
        caption_large: pick(TypographyToken::CaptionLarge)?,
        caption_small: pick(TypographyToken::CaptionSmall)?,
        button_large: pick(TypographyToken::ButtonLarge)?,
        button_medium: pick(TypographyToken::ButtonMedium)?,
        button_small: pick(TypographyToken::ButtonSmall)?,
    })
}

fn merge_spacing(
    base: Option<&SpacingScale>,
    overrides: &FxHashMap<SpacingToken, f32>,
) -> Result<SpacingScale> {
    let pick = |token: SpacingToken| {
        let value = overrides
            .get(&token)
            .copied()
            .or(base.map(|scale| scale.get(token)));
        require(value, "spacing", || token.id().to_string())
    };

    Ok(SpacingScale {
        xxs: pick(SpacingToken::Xxs)?,
        xs: pick(SpacingToken::Xs)?,
        sm: pick(SpacingToken::Sm)?,
        md: pick(SpacingToken::Md)?,
        lg: pick(SpacingToken::Lg)?,
        xl: pick(SpacingToken::Xl)?,
        xxl: pick(SpacingToken::Xxl)?,
        xxxl: pick(SpacingToken::Xxxl)?,
    })
}

fn merge_radius(
    base: Option<&CornerRadiusScale>,
    overrides: &FxHashMap<RadiusToken, f32>,
) -> Result<CornerRadiusScale> {
    let pick = |token: RadiusToken| {
        let value = overrides
            .get(&token)
            .copied()
            .or(base.map(|scale| scale.get(token)));
        require(value, "corner_radius", || token.id().to_string())
    };

    Ok(CornerRadiusScale {
        xs: pick(RadiusToken::Xs)?,
        sm: pick(RadiusToken::Sm)?,
        md: pick(RadiusToken::Md)?,
        lg: pick(RadiusToken::Lg)?,
        xl: pick(RadiusToken::Xl)?,
        full: pick(RadiusToken::Full)?,
    })
}

fn merge_shadow(
    base: Option<&ShadowScale>,
    overrides: &FxHashMap<ShadowToken, ShadowStyleOverride>,
) -> Result<ShadowScale> {
    let pick = |token: ShadowToken| -> Result<ShadowStyle> {
        let base = base.map(|scale| *scale.get(token));
        let over = overrides.get(&token).copied().unwrap_or_default();
        let color = require(over.color.or(base.map(|s| s.color)), "shadow", || {
            format!("{}.color", token.id())
        })?;
        Ok(ShadowStyle {
            color: match over.opacity {
                Some(opacity) => color.with_alpha(opacity),
                None => color,
            },
            radius: require(over.radius.or(base.map(|s| s.radius)), "shadow", || {
                format!("{}.radius", token.id())
            })?,
            x: over.x.or(base.map(|s| s.x)).unwrap_or(0.0),
            y: over.y.or(base.map(|s| s.y)).unwrap_or(0.0),
        })
    };

    Ok(ShadowScale {
        sm: pick(ShadowToken::Sm)?,
        md: pick(ShadowToken::Md)?,
        lg: pick(ShadowToken::Lg)?,
    })
}

fn merge_layout(
    base: Option<&LayoutConstants>,
    overrides: &FxHashMap<LayoutToken, f32>,
) -> Result<LayoutConstants> {
    let pick = |token: LayoutToken| {
        let value = overrides
            .get(&token)
            .copied()
            .or(base.map(|layout| layout.get(token)));
        require(value, "layout", || token.id().to_string())
    };

    Ok(LayoutConstants {
        horizontal_padding: pick(LayoutToken::HorizontalPadding)?,
        vertical_padding: pick(LayoutToken::VerticalPadding)?,
        min_touch_target: pick(LayoutToken::MinTouchTarget)?,
        icon_size_small: pick(LayoutToken::IconSizeSmall)?,
        icon_size: pick(LayoutToken::IconSize)?,
        icon_size_large: pick(LayoutToken::IconSizeLarge)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tincture_core::ColorScheme;

    #[test]
    fn test_empty_overrides_reproduce_default() {
        let overrides = ThemeOverrides::default();
        assert!(overrides.is_empty());
        assert_eq!(build_theme(&overrides).unwrap(), DesignSystem::default());
    }

    #[test]
    fn test_leaf_override_keeps_siblings() {
        let theme = build_theme(&ThemeOverrides::new().with_spacing(SpacingToken::Md, 20.0)).unwrap();
        let base = SpacingScale::default();
        assert_eq!(theme.spacing().md, 20.0);
        assert_eq!(theme.spacing().sm, base.sm);
        assert_eq!(theme.spacing().lg, base.lg);
        assert_eq!(theme.name(), "Default");
    }

    #[test]
    fn test_one_sided_color_override_keeps_other_side() {
        let theme = build_theme(
            &ThemeOverrides::new()
                .with_color(ColorToken::BackgroundPrimary, ColorOverride::dark_only(Color::BLACK)),
        )
        .unwrap();
        let color = theme.colors().background_primary;
        assert_eq!(color.light, Color::WHITE);
        assert_eq!(color.dark, Color::BLACK);
    }

    #[test]
    fn test_leaf_overrides_apply_after_table_preset() {
        let theme = build_theme(
            &ThemeOverrides::new()
                .with_typography_preset(TypographyPreset::Rounded)
                .with_font(
                    TypographyToken::BodyLarge,
                    FontStyleOverride {
                        size: Some(18.0),
                        ..Default::default()
                    },
                ),
        )
        .unwrap();
        let body = theme.typography().body_large;
        assert_eq!(body.size, 18.0);
        assert_eq!(body.design, FontDesign::Rounded);
        assert_eq!(body.weight, FontWeight::Regular);
    }

    #[test]
    fn test_apply_onto_other_base() {
        let theme = ThemeOverrides::new()
            .with_color(ColorToken::PrimaryBrand, Color::from_hex(0x123456))
            .apply(&DesignSystem::minimal())
            .unwrap();
        assert_eq!(theme.name(), "Minimal");
        assert_eq!(theme.corner_radius().sm, 2.0);
        assert_eq!(
            theme.color(ColorToken::PrimaryBrand, ColorScheme::Dark),
            Color::from_hex(0x123456)
        );
    }

    #[test]
    fn test_standalone_requires_every_token() {
        let err = ThemeOverrides::new().build_standalone().unwrap_err();
        assert!(matches!(err, ThemeError::MissingToken { table: "theme", .. }));

        let err = ThemeOverrides::new()
            .with_name("Partial")
            .with_typography_preset(TypographyPreset::Default)
            .with_spacing_preset(SpacingPreset::Default)
            .with_corner_radius_preset(RadiusPreset::Default)
            .with_shadow_preset(ShadowPreset::None)
            .build_standalone()
            .unwrap_err();
        match err {
            ThemeError::MissingToken { table, token } => {
                assert_eq!(table, "colors");
                assert_eq!(token, "primary_brand.light");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_standalone_reports_missing_dark_side() {
        let mut overrides = ThemeOverrides::from_theme(&DesignSystem::default());
        overrides
            .colors
            .insert(ColorToken::Error, ColorOverride::light_only(Color::from_hex(0xFF0000)));
        let err = overrides.build_standalone().unwrap_err();
        assert_eq!(err.to_string(), "missing token colors.error.dark");
    }

    #[test]
    fn test_from_theme_round_trips_standalone() {
        for theme in [DesignSystem::default(), DesignSystem::minimal(), DesignSystem::pop()] {
            let rebuilt = ThemeOverrides::from_theme(&theme).build_standalone().unwrap();
            assert_eq!(rebuilt, theme);
        }
    }
}
