//! Tincture Theme System
//!
//! Design tokens, adaptive colors and theme construction for component
//! styling.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Design tokens**: Colors, typography, spacing, radii, shadows, layout
//! - **Adaptive colors**: Light/dark pairs resolved by a caller-supplied scheme
//! - **Presets**: `default`, `minimal` and `pop` design systems
//! - **Overrides**: Partial themes merged leaf by leaf onto a base
//! - **Theme documents**: Themes declared in TOML
//! - **Dynamic Type**: Scale factors applied by the caller on every pass
//!
//! # Quick Start
//!
//! ```rust
//! use tincture_theme::{ColorScheme, ColorToken, DesignSystem, SpacingToken};
//!
//! let theme = DesignSystem::pop();
//!
//! let brand = theme.color(ColorToken::PrimaryBrand, ColorScheme::Dark);
//! let padding = theme.scaled_spacing(1.2).get(SpacingToken::Md);
//! # let _ = (brand, padding);
//! ```
//!
//! # Architecture
//!
//! A [`DesignSystem`] is immutable once built. Nothing here reads ambient
//! state: the color scheme and scale factor are arguments. Hosts that want to
//! swap themes at runtime hold a [`ThemeState`] and resolve against its
//! [`ThemeSnapshot`]s.
//!
//! # Tokens
//!
//! - [`ColorPalette`]: 14 semantic adaptive colors
//! - [`Typography`]: 14 named font styles
//! - [`SpacingScale`]: `xxs` through `xxxl`
//! - [`CornerRadiusScale`]: `xs` through `full`
//! - [`ShadowScale`]: `sm`, `md`, `lg`
//! - [`LayoutConstants`]: paddings, touch target and icon sizes
//!
//! # Custom Themes
//!
//! ```rust
//! use tincture_theme::{ThemeDocument, ThemeRegistry};
//!
//! let mut registry = ThemeRegistry::with_presets();
//! let theme = registry
//!     .load_toml_str(
//!         r#"
//!         name = "Brand"
//!         extends = "minimal"
//!
//!         [colors]
//!         primary_brand = { light = "FF0066", dark = "FF5C99" }
//!         "#,
//!     )
//!     .unwrap();
//!
//! assert_eq!(theme.corner_radius().sm, 2.0);
//! assert!(registry.contains("Brand"));
//! ```

pub mod config;
pub mod error;
pub mod overrides;
pub mod presets;
pub mod registry;
pub mod scale;
pub mod state;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use config::{ColorEntry, ColorPair, FontEntry, ShadowEntry, ThemeDocument};
pub use error::{Result, ThemeError};
pub use overrides::{
    build_theme, ColorOverride, FontStyleOverride, ShadowStyleOverride, ThemeOverrides,
};
pub use presets::{
    preset_theme, PalettePreset, RadiusPreset, ShadowPreset, SpacingPreset, ThemePreset,
    TypographyPreset,
};
pub use registry::ThemeRegistry;
pub use scale::{scale, scale_touch_target, ScaleFactor};
pub use state::{ThemeSnapshot, ThemeState};
pub use theme::DesignSystem;
pub use tincture_core::{Color, ColorScheme};
pub use tokens::*;
