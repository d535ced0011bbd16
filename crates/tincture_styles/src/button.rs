//! Button style contracts

use tincture_core::{Color, ColorScheme};
use tincture_theme::{ColorToken, DesignSystem, FontStyle, RadiusToken, TypographyToken};

use crate::interaction::InteractionState;

/// Height of full-width filled and outlined buttons
pub const BUTTON_HEIGHT: f32 = 50.0;

/// Outline width of secondary buttons
pub const SECONDARY_STROKE_WIDTH: f32 = 1.5;

/// Alpha multiplier applied to a disabled button's base color
pub const DISABLED_ALPHA: f32 = 0.5;

/// Layer opacity of pressed filled and outlined buttons
pub const PRESSED_OPACITY: f32 = 0.8;

/// Layer opacity of pressed text-only buttons
pub const PRESSED_TEXT_OPACITY: f32 = 0.6;

/// Button visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    /// Filled with the primary brand color
    #[default]
    Primary,
    /// Outlined in the primary brand color
    Secondary,
    /// Brand-colored text only
    Tertiary,
    /// Filled with the error color
    Destructive,
}

/// Outline drawn around a button
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// Easing of the press animation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PressCurve {
    #[default]
    EaseInOut,
}

/// Animation the host should run between pressed and released opacity.
///
/// Descriptive only; nothing here evaluates it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PressTransition {
    pub duration_secs: f32,
    pub curve: PressCurve,
}

impl Default for PressTransition {
    fn default() -> Self {
        Self {
            duration_secs: 0.1,
            curve: PressCurve::EaseInOut,
        }
    }
}

/// Everything a renderer needs to draw one button
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonAppearance {
    pub text_color: Color,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
    /// Layer opacity; driven by the pressed state
    pub opacity: f32,
    pub corner_radius: f32,
    pub min_height: Option<f32>,
    pub full_width: bool,
    pub font: FontStyle,
    pub press_transition: PressTransition,
}

impl ButtonAppearance {
    /// Layer opacity times the alpha of the button's base color.
    ///
    /// The base color is the fill for filled buttons, the stroke for outlined
    /// ones and the text otherwise.
    pub fn effective_opacity(&self) -> f32 {
        let base_alpha = self
            .fill
            .map(|fill| fill.a)
            .or(self.stroke.map(|stroke| stroke.color.a))
            .unwrap_or(self.text_color.a);
        self.opacity * base_alpha
    }
}

impl ButtonVariant {
    pub fn all() -> &'static [ButtonVariant] {
        const VARIANTS: [ButtonVariant; 4] = [
            ButtonVariant::Primary,
            ButtonVariant::Secondary,
            ButtonVariant::Tertiary,
            ButtonVariant::Destructive,
        ];
        &VARIANTS
    }

    /// Whether the variant draws a filled background
    pub fn is_filled(self) -> bool {
        matches!(self, Self::Primary | Self::Destructive)
    }

    /// Layer opacity for a press state
    pub fn pressed_opacity(self, pressed: bool) -> f32 {
        match (self, pressed) {
            (_, false) => 1.0,
            (Self::Tertiary, true) => PRESSED_TEXT_OPACITY,
            (_, true) => PRESSED_OPACITY,
        }
    }

    pub fn resolve(
        self,
        theme: &DesignSystem,
        scheme: ColorScheme,
        state: InteractionState,
    ) -> ButtonAppearance {
        let dim = |color: Color| {
            if state.enabled {
                color
            } else {
                color.multiply_alpha(DISABLED_ALPHA)
            }
        };
        let brand = theme.color(ColorToken::PrimaryBrand, scheme);
        let opacity = self.pressed_opacity(state.pressed);

        tracing::trace!(variant = ?self, ?scheme, ?state, "resolving button style");

        match self {
            Self::Primary | Self::Destructive => {
                let fill = if self == Self::Destructive {
                    theme.color(ColorToken::Error, scheme)
                } else {
                    brand
                };
                ButtonAppearance {
                    text_color: Color::WHITE,
                    fill: Some(dim(fill)),
                    stroke: None,
                    opacity,
                    corner_radius: theme.radius(RadiusToken::Sm),
                    min_height: Some(BUTTON_HEIGHT),
                    full_width: true,
                    font: *theme.font(TypographyToken::ButtonLarge),
                    press_transition: PressTransition::default(),
                }
            }
            Self::Secondary => {
                let base = dim(brand);
                ButtonAppearance {
                    text_color: base,
                    fill: None,
                    stroke: Some(Stroke {
                        color: base,
                        width: SECONDARY_STROKE_WIDTH,
                    }),
                    opacity,
                    corner_radius: theme.radius(RadiusToken::Sm),
                    min_height: Some(BUTTON_HEIGHT),
                    full_width: true,
                    font: *theme.font(TypographyToken::ButtonLarge),
                    press_transition: PressTransition::default(),
                }
            }
            Self::Tertiary => ButtonAppearance {
                text_color: dim(brand),
                fill: None,
                stroke: None,
                opacity,
                corner_radius: 0.0,
                min_height: None,
                full_width: false,
                font: *theme.font(TypographyToken::ButtonMedium),
                press_transition: PressTransition::default(),
            },
        }
    }
}
