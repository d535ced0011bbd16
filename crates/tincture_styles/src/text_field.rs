//! Text field style contracts

use tincture_core::{Color, ColorScheme};
use tincture_theme::{
    ColorToken, DesignSystem, FontStyle, LayoutToken, RadiusToken, SpacingToken, TypographyToken,
};

use crate::interaction::InteractionState;

/// Border width of text fields
pub const TEXT_FIELD_BORDER_WIDTH: f32 = 1.0;

/// Bordered single-line text input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextFieldStyle;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextFieldAppearance {
    pub border_color: Color,
    pub border_width: f32,
    pub background: Color,
    pub corner_radius: f32,
    pub padding_horizontal: f32,
    pub padding_vertical: f32,
    pub font: FontStyle,
    pub text_color: Color,
}

impl TextFieldStyle {
    /// The border shows the error color whenever `has_error` is set, focused
    /// or not.
    pub fn resolve(
        self,
        theme: &DesignSystem,
        scheme: ColorScheme,
        state: InteractionState,
    ) -> TextFieldAppearance {
        let border = if state.has_error {
            ColorToken::Error
        } else {
            ColorToken::Border
        };

        TextFieldAppearance {
            border_color: theme.color(border, scheme),
            border_width: TEXT_FIELD_BORDER_WIDTH,
            background: theme.color(ColorToken::BackgroundTertiary, scheme),
            corner_radius: theme.radius(RadiusToken::Sm),
            padding_horizontal: theme.spacing_value(SpacingToken::Md),
            padding_vertical: theme.spacing_value(SpacingToken::Sm),
            font: *theme.font(TypographyToken::BodyLarge),
            text_color: theme.color(ColorToken::TextPrimary, scheme),
        }
    }
}

/// Label above a text field, with an optional error line below
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LabeledTextField;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabeledTextFieldAppearance {
    pub label_font: FontStyle,
    pub label_color: Color,
    /// Vertical gap between label, field and error line
    pub spacing: f32,
    pub field: TextFieldAppearance,
    pub error_font: FontStyle,
    pub error_color: Color,
    /// Whether the error line is shown
    pub shows_error: bool,
}

impl LabeledTextField {
    pub fn resolve(
        self,
        theme: &DesignSystem,
        scheme: ColorScheme,
        error_message: Option<&str>,
    ) -> LabeledTextFieldAppearance {
        // An empty message still marks the field invalid
        let shows_error = error_message.is_some();
        let field = TextFieldStyle.resolve(
            theme,
            scheme,
            InteractionState::default().has_error(shows_error),
        );

        LabeledTextFieldAppearance {
            label_font: *theme.font(TypographyToken::HeadlineSmall),
            label_color: theme.color(ColorToken::TextSecondary, scheme),
            spacing: theme.spacing_value(SpacingToken::Xs),
            field,
            error_font: *theme.font(TypographyToken::CaptionLarge),
            error_color: theme.color(ColorToken::Error, scheme),
            shows_error,
        }
    }
}

/// Search input with a leading magnifier icon
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SearchFieldStyle;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchFieldAppearance {
    pub icon_color: Color,
    pub icon_size: f32,
    pub font: FontStyle,
    pub padding_horizontal: f32,
    pub padding_vertical: f32,
    pub background: Color,
    pub corner_radius: f32,
    /// Gap between icon, text and clear button
    pub item_spacing: f32,
}

impl SearchFieldStyle {
    pub fn resolve(self, theme: &DesignSystem, scheme: ColorScheme) -> SearchFieldAppearance {
        SearchFieldAppearance {
            icon_color: theme.color(ColorToken::TextSecondary, scheme),
            icon_size: theme.layout_value(LayoutToken::IconSize),
            font: *theme.font(TypographyToken::BodyMedium),
            padding_horizontal: theme.spacing_value(SpacingToken::Sm),
            padding_vertical: theme.spacing_value(SpacingToken::Xs),
            background: theme.color(ColorToken::BackgroundSecondary, scheme),
            corner_radius: theme.radius(RadiusToken::Sm),
            item_spacing: theme.spacing_value(SpacingToken::Xs),
        }
    }
}
