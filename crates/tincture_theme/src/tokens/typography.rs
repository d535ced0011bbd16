//! Typography tokens for theming

use std::fmt;

use serde::{Deserialize, Serialize};

/// Font weight
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    UltraLight,
    Thin,
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}

impl FontWeight {
    /// Numeric weight on the 100-900 scale
    pub fn numeric(self) -> u16 {
        match self {
            Self::UltraLight => 100,
            Self::Thin => 200,
            Self::Light => 300,
            Self::Regular => 400,
            Self::Medium => 500,
            Self::Semibold => 600,
            Self::Bold => 700,
            Self::Heavy => 800,
            Self::Black => 900,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::UltraLight => "UltraLight",
            Self::Thin => "Thin",
            Self::Light => "Light",
            Self::Regular => "Regular",
            Self::Medium => "Medium",
            Self::Semibold => "Semibold",
            Self::Bold => "Bold",
            Self::Heavy => "Heavy",
            Self::Black => "Black",
        }
    }
}

/// Font design (shape family)
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontDesign {
    #[default]
    Default,
    Rounded,
    Serif,
    Monospaced,
}

impl FontDesign {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Rounded => "Rounded",
            Self::Serif => "Serif",
            Self::Monospaced => "Mono",
        }
    }
}

/// Dynamic Type text style a font scales relative to
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    LargeTitle,
    Title,
    Title2,
    Title3,
    Headline,
    Subheadline,
    #[default]
    Body,
    Callout,
    Footnote,
    Caption,
    Caption2,
}

/// Line spacing applied to resolved fonts
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum Leading {
    #[default]
    Standard,
}

/// A named text style: base size plus weight, design and scaling anchor
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub design: FontDesign,
    pub relative_to: TextStyle,
}

impl FontStyle {
    pub const fn new(size: f32, weight: FontWeight) -> Self {
        Self {
            size,
            weight,
            design: FontDesign::Default,
            relative_to: TextStyle::Body,
        }
    }

    pub const fn with_design(mut self, design: FontDesign) -> Self {
        self.design = design;
        self
    }

    pub const fn relative_to(mut self, text_style: TextStyle) -> Self {
        self.relative_to = text_style;
        self
    }

    /// The font handed to the host's text system.
    pub fn resolved_font(&self) -> ResolvedFont {
        ResolvedFont {
            size: self.size,
            weight: self.weight,
            design: self.design,
            relative_to: self.relative_to,
            leading: Leading::Standard,
        }
    }

    /// Size after applying a Dynamic Type scale factor.
    pub fn scaled_size(&self, factor: impl Into<crate::scale::ScaleFactor>) -> f32 {
        crate::scale::scale(self.size, factor)
    }

    /// e.g. `"Rounded Semibold 17pt"`
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}pt",
            self.design.display_name(),
            self.weight.display_name(),
            self.size as i32
        )
    }
}

/// Concrete font parameters for the host renderer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedFont {
    pub size: f32,
    pub weight: FontWeight,
    pub design: FontDesign,
    pub relative_to: TextStyle,
    pub leading: Leading,
}

impl ResolvedFont {
    pub fn scaled(mut self, factor: impl Into<crate::scale::ScaleFactor>) -> Self {
        self.size = crate::scale::scale(self.size, factor);
        self
    }
}

token_keys! {
    /// Typography token keys for dynamic access
    pub enum TypographyToken {
        DisplayLarge => "display_large",
        DisplayMedium => "display_medium",
        DisplaySmall => "display_small",
        HeadlineLarge => "headline_large",
        HeadlineMedium => "headline_medium",
        HeadlineSmall => "headline_small",
        BodyLarge => "body_large",
        BodyMedium => "body_medium",
        BodySmall => "body_small",
        CaptionLarge => "caption_large",
        CaptionSmall => "caption_small",
        ButtonLarge => "button_large",
        ButtonMedium => "button_medium",
        ButtonSmall => "button_small",
    }
}

/// Complete set of typography tokens
#[derive(Clone, Debug, PartialEq)]
pub struct Typography {
    // Display
    pub display_large: FontStyle,
    pub display_medium: FontStyle,
    pub display_small: FontStyle,

    // Headline
    pub headline_large: FontStyle,
    pub headline_medium: FontStyle,
    pub headline_small: FontStyle,

    // Body
    pub body_large: FontStyle,
    pub body_medium: FontStyle,
    pub body_small: FontStyle,

    // Caption
    pub caption_large: FontStyle,
    pub caption_small: FontStyle,

    // Button
    pub button_large: FontStyle,
    pub button_medium: FontStyle,
    pub button_small: FontStyle,
}

impl Typography {
    /// Get a font style by token key
    pub fn get(&self, token: TypographyToken) -> &FontStyle {
        match token {
            TypographyToken::DisplayLarge => &self.display_large,
            TypographyToken::DisplayMedium => &self.display_medium,
            TypographyToken::DisplaySmall => &self.display_small,
            TypographyToken::HeadlineLarge => &self.headline_large,
            TypographyToken::HeadlineMedium => &self.headline_medium,
            TypographyToken::HeadlineSmall => &self.headline_small,
            TypographyToken::BodyLarge => &self.body_large,
            TypographyToken::BodyMedium => &self.body_medium,
            TypographyToken::BodySmall => &self.body_small,
            TypographyToken::CaptionLarge => &self.caption_large,
            TypographyToken::CaptionSmall => &self.caption_small,
            TypographyToken::ButtonLarge => &self.button_large,
            TypographyToken::ButtonMedium => &self.button_medium,
            TypographyToken::ButtonSmall => &self.button_small,
        }
    }

    /// System typography scale
    pub fn default_scale() -> Self {
        use FontWeight::*;
        use TextStyle::*;

        Self {
            display_large: FontStyle::new(34.0, Bold).relative_to(LargeTitle),
            display_medium: FontStyle::new(28.0, Bold).relative_to(Title),
            display_small: FontStyle::new(22.0, Bold).relative_to(Title2),
            headline_large: FontStyle::new(17.0, Semibold).relative_to(Headline),
            headline_medium: FontStyle::new(15.0, Semibold).relative_to(Subheadline),
            headline_small: FontStyle::new(13.0, Semibold).relative_to(Footnote),
            body_large: FontStyle::new(17.0, Regular).relative_to(Body),
            body_medium: FontStyle::new(15.0, Regular).relative_to(Subheadline),
            body_small: FontStyle::new(13.0, Regular).relative_to(Footnote),
            caption_large: FontStyle::new(12.0, Regular).relative_to(Caption),
            caption_small: FontStyle::new(11.0, Regular).relative_to(Caption2),
            button_large: FontStyle::new(17.0, Semibold).relative_to(Body),
            button_medium: FontStyle::new(15.0, Semibold).relative_to(Subheadline),
            button_small: FontStyle::new(13.0, Medium).relative_to(Footnote),
        }
    }

    /// Rounded variant - friendly, casual feel
    pub fn rounded() -> Self {
        Self::default_scale().with_design(FontDesign::Rounded)
    }

    /// Returns a copy with every style switched to `design`.
    pub fn with_design(&self, design: FontDesign) -> Self {
        let mut typography = self.clone();
        for token in TypographyToken::ALL {
            typography.get_mut(*token).design = design;
        }
        typography
    }

    fn get_mut(&mut self, token: TypographyToken) -> &mut FontStyle {
        match token {
            TypographyToken::DisplayLarge => &mut self.display_large,
            TypographyToken::DisplayMedium => &mut self.display_medium,
            TypographyToken::DisplaySmall => &mut self.display_small,
            TypographyToken::HeadlineLarge => &mut self.headline_large,
            TypographyToken::HeadlineMedium => &mut self.headline_medium,
            TypographyToken::HeadlineSmall => &mut self.headline_small,
            TypographyToken::BodyLarge => &mut self.body_large,
            TypographyToken::BodyMedium => &mut self.body_medium,
            TypographyToken::BodySmall => &mut self.body_small,
            TypographyToken::CaptionLarge => &mut self.caption_large,
            TypographyToken::CaptionSmall => &mut self.caption_small,
            TypographyToken::ButtonLarge => &mut self.button_large,
            TypographyToken::ButtonMedium => &mut self.button_medium,
            TypographyToken::ButtonSmall => &mut self.button_small,
        }
    }
}

impl Default for Typography {
    fn default() -> Self {
        Self::default_scale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description() {
        let typography = Typography::default();
        assert_eq!(typography.body_large.description(), "Default Regular 17pt");
        assert_eq!(
            Typography::rounded().headline_large.description(),
            "Rounded Semibold 17pt"
        );
        assert_eq!(
            FontStyle::new(12.5, FontWeight::Light)
                .with_design(FontDesign::Monospaced)
                .description(),
            "Mono Light 12pt"
        );
    }

    #[test]
    fn test_rounded_only_changes_design() {
        let base = Typography::default();
        let rounded = Typography::rounded();
        for token in TypographyToken::ALL {
            let (a, b) = (base.get(*token), rounded.get(*token));
            assert_eq!(a.size, b.size, "{token}");
            assert_eq!(a.weight, b.weight, "{token}");
            assert_eq!(a.relative_to, b.relative_to, "{token}");
            assert_eq!(b.design, FontDesign::Rounded, "{token}");
        }
    }

    #[test]
    fn test_resolved_font() {
        let font = Typography::default().display_large.resolved_font();
        assert_eq!(font.size, 34.0);
        assert_eq!(font.weight.numeric(), 700);
        assert_eq!(font.relative_to, TextStyle::LargeTitle);
        assert_eq!(font.leading, Leading::Standard);
        assert_eq!(font.scaled(1.5).size, 51.0);
    }

    #[test]
    fn test_button_small_is_medium_weight() {
        assert_eq!(Typography::default().button_small.weight, FontWeight::Medium);
    }
}
