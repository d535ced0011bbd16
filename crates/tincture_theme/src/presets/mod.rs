//! Built-in theme presets and per-table preset selectors.

use std::fmt::{Display, Formatter};

use crate::error::{Result, ThemeError};
use crate::theme::DesignSystem;
use crate::tokens::*;

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// System colors, default scales.
    Default,
    /// Monochrome colors, sharp corners, no shadows.
    Minimal,
    /// Vibrant colors, rounded corners and rounded type.
    Pop,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Minimal => "minimal",
            Self::Pop => "pop",
        }
    }

    /// User-facing display name, also used as the theme name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Minimal => "Minimal",
            Self::Pop => "Pop",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 3] =
            [ThemePreset::Default, ThemePreset::Minimal, ThemePreset::Pop];
        &PRESETS
    }

    pub fn from_id(id: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.id() == id)
            .ok_or_else(|| unknown("theme", id))
    }

    /// Build the design system for this preset.
    pub fn build(self) -> DesignSystem {
        match self {
            Self::Default => DesignSystem::default(),
            Self::Minimal => DesignSystem::minimal(),
            Self::Pop => DesignSystem::pop(),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl DesignSystem {
    /// Minimal/modern theme with sharp corners and flat surfaces
    pub fn minimal() -> Self {
        DesignSystem::new(
            ThemePreset::Minimal.display_name(),
            ColorPalette::minimal(),
            Typography::default(),
            SpacingScale::default(),
            CornerRadiusScale::sharp(),
            ShadowScale::none(),
            LayoutConstants::default(),
        )
    }

    /// Pop/casual theme with rounded corners and vibrant colors
    pub fn pop() -> Self {
        DesignSystem::new(
            ThemePreset::Pop.display_name(),
            ColorPalette::pop(),
            Typography::rounded(),
            SpacingScale::default(),
            CornerRadiusScale::rounded(),
            ShadowScale::default(),
            LayoutConstants::default(),
        )
    }
}

/// Convenience free function for ergonomic imports.
pub fn preset_theme(preset: ThemePreset) -> DesignSystem {
    preset.build()
}

fn unknown(kind: &'static str, name: &str) -> ThemeError {
    ThemeError::UnknownPreset {
        kind,
        name: name.to_string(),
    }
}

/// Whole-palette presets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PalettePreset {
    Default,
    Minimal,
    Pop,
}

impl PalettePreset {
    pub fn from_id(id: &str) -> Result<Self> {
        match id {
            "default" => Ok(Self::Default),
            "minimal" => Ok(Self::Minimal),
            "pop" => Ok(Self::Pop),
            other => Err(unknown("colors", other)),
        }
    }

    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Default => ColorPalette::default(),
            Self::Minimal => ColorPalette::minimal(),
            Self::Pop => ColorPalette::pop(),
        }
    }
}

/// Whole-table typography presets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypographyPreset {
    Default,
    Rounded,
}

impl TypographyPreset {
    pub fn from_id(id: &str) -> Result<Self> {
        match id {
            "default" => Ok(Self::Default),
            "rounded" => Ok(Self::Rounded),
            other => Err(unknown("typography", other)),
        }
    }

    pub fn typography(self) -> Typography {
        match self {
            Self::Default => Typography::default(),
            Self::Rounded => Typography::rounded(),
        }
    }
}

/// Whole-table spacing presets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpacingPreset {
    Default,
    Compact,
}

impl SpacingPreset {
    pub fn from_id(id: &str) -> Result<Self> {
        match id {
            "default" => Ok(Self::Default),
            "compact" => Ok(Self::Compact),
            other => Err(unknown("spacing", other)),
        }
    }

    pub fn spacing(self) -> SpacingScale {
        match self {
            Self::Default => SpacingScale::default(),
            Self::Compact => SpacingScale::compact(),
        }
    }
}

/// Whole-table corner radius presets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RadiusPreset {
    Default,
    Sharp,
    Rounded,
}

impl RadiusPreset {
    pub fn from_id(id: &str) -> Result<Self> {
        match id {
            "default" => Ok(Self::Default),
            "sharp" => Ok(Self::Sharp),
            "rounded" => Ok(Self::Rounded),
            other => Err(unknown("corner_radius", other)),
        }
    }

    pub fn corner_radius(self) -> CornerRadiusScale {
        match self {
            Self::Default => CornerRadiusScale::default(),
            Self::Sharp => CornerRadiusScale::sharp(),
            Self::Rounded => CornerRadiusScale::rounded(),
        }
    }
}

/// Whole-table shadow presets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShadowPreset {
    Default,
    None,
}

impl ShadowPreset {
    pub fn from_id(id: &str) -> Result<Self> {
        match id {
            "default" => Ok(Self::Default),
            "none" => Ok(Self::None),
            other => Err(unknown("shadow", other)),
        }
    }

    pub fn shadow(self) -> ShadowScale {
        match self {
            Self::Default => ShadowScale::default(),
            Self::None => ShadowScale::none(),
        }
    }
}
