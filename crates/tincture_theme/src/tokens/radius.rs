//! Corner radius tokens for theming

token_keys! {
    /// Corner radius token keys for dynamic access
    pub enum RadiusToken {
        Xs => "xs",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Full => "full",
    }
}

/// Complete set of corner radius tokens
#[derive(Clone, Debug, PartialEq)]
pub struct CornerRadiusScale {
    /// Tags, badges
    pub xs: f32,
    /// Buttons, inputs
    pub sm: f32,
    /// Cards
    pub md: f32,
    /// Modals
    pub lg: f32,
    /// Pills
    pub xl: f32,
    /// Circular; the host clamps it to half the shorter side
    pub full: f32,
}

impl CornerRadiusScale {
    /// Get radius value by token key
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::Xs => self.xs,
            RadiusToken::Sm => self.sm,
            RadiusToken::Md => self.md,
            RadiusToken::Lg => self.lg,
            RadiusToken::Xl => self.xl,
            RadiusToken::Full => self.full,
        }
    }

    /// Sharp corners for minimal/modern style
    pub fn sharp() -> Self {
        Self {
            xs: 0.0,
            sm: 2.0,
            md: 4.0,
            lg: 6.0,
            xl: 8.0,
            full: f32::INFINITY,
        }
    }

    /// Rounded corners for friendly/soft style
    pub fn rounded() -> Self {
        Self {
            xs: 8.0,
            sm: 12.0,
            md: 16.0,
            lg: 20.0,
            xl: 28.0,
            full: f32::INFINITY,
        }
    }
}

impl Default for CornerRadiusScale {
    fn default() -> Self {
        Self {
            xs: 4.0,
            sm: 8.0,
            md: 12.0,
            lg: 16.0,
            xl: 24.0,
            full: f32::INFINITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_keep_full_circular() {
        for scale in [
            CornerRadiusScale::default(),
            CornerRadiusScale::sharp(),
            CornerRadiusScale::rounded(),
        ] {
            assert!(scale.get(RadiusToken::Full).is_infinite());
        }
    }

    #[test]
    fn test_preset_button_radii() {
        assert_eq!(CornerRadiusScale::default().get(RadiusToken::Sm), 8.0);
        assert_eq!(CornerRadiusScale::sharp().get(RadiusToken::Sm), 2.0);
        assert_eq!(CornerRadiusScale::rounded().get(RadiusToken::Sm), 12.0);
    }
}
