//! Tincture Component Styles
//!
//! Pure style contracts that turn a [`DesignSystem`](tincture_theme::DesignSystem),
//! a [`ColorScheme`](tincture_core::ColorScheme) and an [`InteractionState`]
//! into the concrete appearance a host renderer draws.
//!
//! # Components
//!
//! - [`ButtonVariant`]: Primary, Secondary, Tertiary and Destructive buttons
//! - [`TextFieldStyle`]: Bordered text input
//! - [`LabeledTextField`]: Label + field + optional error line
//! - [`SearchFieldStyle`]: Icon-prefixed search input
//!
//! # Example
//!
//! ```rust
//! use tincture_styles::{ButtonVariant, InteractionState};
//! use tincture_theme::{ColorScheme, DesignSystem};
//!
//! let theme = DesignSystem::default();
//! let pressed = InteractionState::default().pressed(true);
//!
//! let appearance = ButtonVariant::Primary.resolve(&theme, ColorScheme::Light, pressed);
//! assert_eq!(appearance.opacity, 0.8);
//! ```

pub mod button;
pub mod interaction;
pub mod text_field;

pub use button::{ButtonAppearance, ButtonVariant, PressCurve, PressTransition, Stroke};
pub use interaction::InteractionState;
pub use text_field::{
    LabeledTextField, LabeledTextFieldAppearance, SearchFieldAppearance, SearchFieldStyle,
    TextFieldAppearance, TextFieldStyle,
};
