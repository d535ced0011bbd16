//! Layout constants for theming

use crate::scale::{scale, scale_touch_target, ScaleFactor};

token_keys! {
    /// Layout token keys for dynamic access
    pub enum LayoutToken {
        HorizontalPadding => "horizontal_padding",
        VerticalPadding => "vertical_padding",
        MinTouchTarget => "min_touch_target",
        IconSizeSmall => "icon_size_small",
        IconSize => "icon_size",
        IconSizeLarge => "icon_size_large",
    }
}

/// Base layout values, scaled with Dynamic Type via [`LayoutConstants::scaled`]
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConstants {
    pub horizontal_padding: f32,
    pub vertical_padding: f32,
    pub min_touch_target: f32,
    pub icon_size_small: f32,
    pub icon_size: f32,
    pub icon_size_large: f32,
}

impl LayoutConstants {
    /// Get layout value by token key
    pub fn get(&self, token: LayoutToken) -> f32 {
        match token {
            LayoutToken::HorizontalPadding => self.horizontal_padding,
            LayoutToken::VerticalPadding => self.vertical_padding,
            LayoutToken::MinTouchTarget => self.min_touch_target,
            LayoutToken::IconSizeSmall => self.icon_size_small,
            LayoutToken::IconSize => self.icon_size,
            LayoutToken::IconSizeLarge => self.icon_size_large,
        }
    }

    /// Applies a Dynamic Type scale factor.
    ///
    /// The minimum touch target may grow but never drops below its base value.
    pub fn scaled(&self, factor: impl Into<ScaleFactor>) -> ScaledLayout {
        let factor = factor.into();
        ScaledLayout {
            horizontal_padding: scale(self.horizontal_padding, factor),
            vertical_padding: scale(self.vertical_padding, factor),
            min_touch_target: scale_touch_target(self.min_touch_target, factor),
            icon_size_small: scale(self.icon_size_small, factor),
            icon_size: scale(self.icon_size, factor),
            icon_size_large: scale(self.icon_size_large, factor),
        }
    }
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            horizontal_padding: 16.0,
            vertical_padding: 16.0,
            min_touch_target: 44.0,
            icon_size_small: 16.0,
            icon_size: 24.0,
            icon_size_large: 32.0,
        }
    }
}

/// Layout values after Dynamic Type scaling
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaledLayout {
    pub horizontal_padding: f32,
    pub vertical_padding: f32,
    pub min_touch_target: f32,
    pub icon_size_small: f32,
    pub icon_size: f32,
    pub icon_size_large: f32,
}

impl ScaledLayout {
    pub fn get(&self, token: LayoutToken) -> f32 {
        match token {
            LayoutToken::HorizontalPadding => self.horizontal_padding,
            LayoutToken::VerticalPadding => self.vertical_padding,
            LayoutToken::MinTouchTarget => self.min_touch_target,
            LayoutToken::IconSizeSmall => self.icon_size_small,
            LayoutToken::IconSize => self.icon_size,
            LayoutToken::IconSizeLarge => self.icon_size_large,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_target_never_shrinks() {
        let scaled = LayoutConstants::default().scaled(0.5);
        assert_eq!(scaled.min_touch_target, 44.0);
        assert_eq!(scaled.icon_size, 12.0);
        assert_eq!(scaled.horizontal_padding, 8.0);
    }

    #[test]
    fn test_touch_target_grows() {
        let scaled = LayoutConstants::default().scaled(1.5);
        assert_eq!(scaled.min_touch_target, 66.0);
        assert_eq!(scaled.get(LayoutToken::IconSizeLarge), 48.0);
    }
}
