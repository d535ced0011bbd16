//! TOML theme documents
//!
//! A document names a base (`extends`), optional whole-table presets and any
//! number of leaf overrides:
//!
//! ```toml
//! name = "Brand"
//! extends = "pop"
//! corner_radius_preset = "sharp"
//!
//! [colors]
//! primary_brand = "FF0066"
//! background_primary = { light = "FFFFFF", dark = "000000" }
//!
//! [typography.body_large]
//! size = 18
//! weight = "medium"
//!
//! [layout]
//! min_touch_target = 48
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tincture_core::Color;

use crate::error::{Result, ThemeError};
use crate::overrides::{ColorOverride, FontStyleOverride, ShadowStyleOverride, ThemeOverrides};
use crate::presets::{
    PalettePreset, RadiusPreset, ShadowPreset, SpacingPreset, ThemePreset, TypographyPreset,
};
use crate::theme::DesignSystem;
use crate::tokens::*;

/// `extends` value that builds without a base theme
pub const STANDALONE: &str = "none";

/// A theme declared in TOML.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeDocument {
    /// Theme name; inherited from the base when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Base preset id, or `"none"`. Defaults to `"default"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors_preset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography_preset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing_preset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius_preset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_preset: Option<String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub colors: BTreeMap<String, ColorEntry>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub typography: BTreeMap<String, FontEntry>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub spacing: BTreeMap<String, f32>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub corner_radius: BTreeMap<String, f32>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub shadow: BTreeMap<String, ShadowEntry>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub layout: BTreeMap<String, f32>,
}

/// A color written either as one hex string or as a light/dark table
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ColorEntry {
    Hex(String),
    Pair(ColorPair),
}

/// Light/dark sides of a color entry; at least one must be present
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorPair {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design: Option<FontDesign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_to: Option<TextStyle>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShadowEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Exact alpha of the shadow color, applied after `color`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
}

impl ThemeDocument {
    /// Parse a document from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a document from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), name = ?document.name, "loaded theme document");
        Ok(document)
    }

    /// A standalone document restating every token of `theme`
    pub fn from_theme(theme: &DesignSystem) -> Self {
        let mut document = Self {
            name: Some(theme.name().to_string()),
            extends: Some(STANDALONE.to_string()),
            ..Default::default()
        };

        for token in ColorToken::ALL {
            let color = theme.colors().get(*token);
            let entry = if color.is_solid() {
                ColorEntry::Hex(color.light.to_hex_string())
            } else {
                ColorEntry::Pair(ColorPair {
                    light: Some(color.light.to_hex_string()),
                    dark: Some(color.dark.to_hex_string()),
                })
            };
            document.colors.insert(token.id().to_string(), entry);
        }
        for token in TypographyToken::ALL {
            let font = theme.typography().get(*token);
            document.typography.insert(
                token.id().to_string(),
                FontEntry {
                    size: Some(font.size),
                    weight: Some(font.weight),
                    design: Some(font.design),
                    relative_to: Some(font.relative_to),
                },
            );
        }
        for token in SpacingToken::ALL {
            document
                .spacing
                .insert(token.id().to_string(), theme.spacing().get(*token));
        }
        for token in RadiusToken::ALL {
            document
                .corner_radius
                .insert(token.id().to_string(), theme.corner_radius().get(*token));
        }
        for token in ShadowToken::ALL {
            let shadow = theme.shadow().get(*token);
            document.shadow.insert(
                token.id().to_string(),
                ShadowEntry {
                    // Hex holds 8-bit alpha; the float keeps it exact
                    color: Some(shadow.color.with_alpha(1.0).to_hex_string()),
                    opacity: Some(shadow.color.a),
                    radius: Some(shadow.radius),
                    x: Some(shadow.x),
                    y: Some(shadow.y),
                },
            );
        }
        for token in LayoutToken::ALL {
            document
                .layout
                .insert(token.id().to_string(), theme.layout().get(*token));
        }

        document
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Decode ids and hex strings into typed overrides.
    ///
    /// Unknown token ids raise [`ThemeError::UnknownToken`], unknown preset
    /// ids [`ThemeError::UnknownPreset`] and malformed hex
    /// [`ThemeError::Color`].
    pub fn to_overrides(&self) -> Result<ThemeOverrides> {
        let mut overrides = ThemeOverrides {
            name: self.name.clone(),
            colors_preset: self
                .colors_preset
                .as_deref()
                .map(PalettePreset::from_id)
                .transpose()?,
            typography_preset: self
                .typography_preset
                .as_deref()
                .map(TypographyPreset::from_id)
                .transpose()?,
            spacing_preset: self
                .spacing_preset
                .as_deref()
                .map(SpacingPreset::from_id)
                .transpose()?,
            corner_radius_preset: self
                .corner_radius_preset
                .as_deref()
                .map(RadiusPreset::from_id)
                .transpose()?,
            shadow_preset: self
                .shadow_preset
                .as_deref()
                .map(ShadowPreset::from_id)
                .transpose()?,
            ..Default::default()
        };

        for (id, entry) in &self.colors {
            let token = lookup(ColorToken::from_id(id), "colors", id)?;
            let color = match entry {
                ColorEntry::Hex(hex) => ColorOverride::solid(parse_color("colors", id, hex)?),
                ColorEntry::Pair(ColorPair { light: None, dark: None }) => {
                    return Err(ThemeError::MissingToken {
                        table: "colors",
                        token: format!("{id}.light"),
                    });
                }
                ColorEntry::Pair(ColorPair { light, dark }) => ColorOverride {
                    light: light
                        .as_deref()
                        .map(|hex| parse_color("colors", &format!("{id}.light"), hex))
                        .transpose()?,
                    dark: dark
                        .as_deref()
                        .map(|hex| parse_color("colors", &format!("{id}.dark"), hex))
                        .transpose()?,
                },
            };
            overrides.colors.insert(token, color);
        }

        for (id, entry) in &self.typography {
            let token = lookup(TypographyToken::from_id(id), "typography", id)?;
            overrides.typography.insert(
                token,
                FontStyleOverride {
                    size: entry.size,
                    weight: entry.weight,
                    design: entry.design,
                    relative_to: entry.relative_to,
                },
            );
        }

        for (id, value) in &self.spacing {
            let token = lookup(SpacingToken::from_id(id), "spacing", id)?;
            overrides.spacing.insert(token, *value);
        }

        for (id, value) in &self.corner_radius {
            let token = lookup(RadiusToken::from_id(id), "corner_radius", id)?;
            overrides.corner_radius.insert(token, *value);
        }

        for (id, entry) in &self.shadow {
            let token = lookup(ShadowToken::from_id(id), "shadow", id)?;
            overrides.shadow.insert(
                token,
                ShadowStyleOverride {
                    color: entry
                        .color
                        .as_deref()
                        .map(|hex| parse_color("shadow", &format!("{id}.color"), hex))
                        .transpose()?,
                    opacity: entry.opacity,
                    radius: entry.radius,
                    x: entry.x,
                    y: entry.y,
                },
            );
        }

        for (id, value) in &self.layout {
            let token = lookup(LayoutToken::from_id(id), "layout", id)?;
            overrides.layout.insert(token, *value);
        }

        Ok(overrides)
    }

    /// Build the theme this document describes
    pub fn build(&self) -> Result<DesignSystem> {
        let overrides = self.to_overrides()?;
        match self.extends.as_deref() {
            Some(STANDALONE) => overrides.build_standalone(),
            Some(id) => overrides.apply(&ThemePreset::from_id(id)?.build()),
            None => overrides.apply(&DesignSystem::default()),
        }
    }
}

fn lookup<T>(token: Option<T>, table: &'static str, id: &str) -> Result<T> {
    token.ok_or_else(|| ThemeError::UnknownToken {
        table,
        token: id.to_string(),
    })
}

fn parse_color(table: &'static str, token: &str, hex: &str) -> Result<Color> {
    Color::parse_hex(hex).map_err(|source| ThemeError::Color {
        table,
        token: token.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tincture_core::ColorScheme;

    const BRAND: &str = r#"
name = "Brand"
extends = "pop"
corner_radius_preset = "sharp"

[colors]
primary_brand = "FF0066"
background_primary = { light = "FFFFFF", dark = "000000" }

[typography.body_large]
size = 18
weight = "medium"

[layout]
min_touch_target = 48
"#;

    #[test]
    fn test_parse_and_build() {
        let document = ThemeDocument::from_toml_str(BRAND).unwrap();
        assert_eq!(document.extends.as_deref(), Some("pop"));

        let theme = document.build().unwrap();
        assert_eq!(theme.name(), "Brand");
        assert_eq!(
            theme.color(ColorToken::PrimaryBrand, ColorScheme::Dark),
            Color::from_hex(0xFF0066)
        );
        assert_eq!(
            theme.color(ColorToken::BackgroundPrimary, ColorScheme::Dark),
            Color::BLACK
        );
        // Pop palette survives where not overridden
        assert_eq!(theme.colors().secondary_brand, ColorPalette::pop().secondary_brand);
        assert_eq!(theme.corner_radius().sm, 2.0);
        assert_eq!(theme.typography().body_large.size, 18.0);
        assert_eq!(theme.typography().body_large.weight, FontWeight::Medium);
        assert_eq!(theme.typography().body_large.design, FontDesign::Rounded);
        assert_eq!(theme.layout().min_touch_target, 48.0);
    }

    #[test]
    fn test_name_inherited_from_base() {
        let theme = ThemeDocument::from_toml_str("extends = \"minimal\"")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(theme, DesignSystem::minimal());
    }

    #[test]
    fn test_empty_document_is_default() {
        let theme = ThemeDocument::from_toml_str("").unwrap().build().unwrap();
        assert_eq!(theme, DesignSystem::default());
    }

    #[test]
    fn test_bad_hex_is_an_error() {
        let document = ThemeDocument::from_toml_str("[colors]\nerror = \"#GG0000\"").unwrap();
        let err = document.build().unwrap_err();
        assert!(matches!(
            err,
            ThemeError::Color { table: "colors", ref token, .. } if token == "error"
        ));
    }

    #[test]
    fn test_unknown_token_and_preset() {
        let err = ThemeDocument::from_toml_str("[spacing]\nhuge = 99")
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, ThemeError::UnknownToken { table: "spacing", .. }));

        let err = ThemeDocument::from_toml_str("extends = \"neon\"")
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, ThemeError::UnknownPreset { kind: "theme", .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ThemeDocument::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }

    #[test]
    fn test_standalone_needs_every_token() {
        let err = ThemeDocument::from_toml_str("name = \"Bare\"\nextends = \"none\"")
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, ThemeError::MissingToken { .. }));
    }

    #[test]
    fn test_misspelled_pair_side_rejected() {
        let err = ThemeDocument::from_toml_str("[colors]\nprimary_brand = { ligth = \"FF0000\" }")
            .unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }

    #[test]
    fn test_empty_pair_rejected() {
        let err = ThemeDocument::from_toml_str("[colors]\nprimary_brand = {}")
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ThemeError::MissingToken { table: "colors", ref token } if token == "primary_brand.light"
        ));
    }

    #[test]
    fn test_shadow_opacity_is_exact() {
        let theme = ThemeDocument::from_toml_str(
            "[shadow.md]\ncolor = \"#336699\"\nopacity = 0.12",
        )
        .unwrap()
        .build()
        .unwrap();
        assert_eq!(theme.shadow().md.color, Color::from_hex(0x336699).with_alpha(0.12));
        assert_eq!(theme.shadow().md.radius, ShadowScale::default().md.radius);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ThemeDocument::load("/definitely/not/here/theme.toml").unwrap_err();
        assert!(matches!(err, ThemeError::Io { .. }));
    }
}
