//! Spacing tokens for theming

use crate::scale::{scale, ScaleFactor};

token_keys! {
    /// Spacing token keys for dynamic access
    pub enum SpacingToken {
        Xxs => "xxs",
        Xs => "xs",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Xxl => "xxl",
        Xxxl => "xxxl",
    }
}

/// Spacing scale on an 8pt grid
#[derive(Clone, Debug, PartialEq)]
pub struct SpacingScale {
    pub xxs: f32,
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    pub xxxl: f32,
}

impl SpacingScale {
    /// Get spacing value by token key
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Xxs => self.xxs,
            SpacingToken::Xs => self.xs,
            SpacingToken::Sm => self.sm,
            SpacingToken::Md => self.md,
            SpacingToken::Lg => self.lg,
            SpacingToken::Xl => self.xl,
            SpacingToken::Xxl => self.xxl,
            SpacingToken::Xxxl => self.xxxl,
        }
    }

    /// Compact spacing for dense UIs
    pub fn compact() -> Self {
        Self {
            xxs: 2.0,
            xs: 4.0,
            sm: 8.0,
            md: 12.0,
            lg: 16.0,
            xl: 24.0,
            xxl: 32.0,
            xxxl: 48.0,
        }
    }

    /// Applies a Dynamic Type scale factor to every step.
    pub fn scaled(&self, factor: impl Into<ScaleFactor>) -> ScaledSpacing {
        let factor = factor.into();
        ScaledSpacing {
            xxs: scale(self.xxs, factor),
            xs: scale(self.xs, factor),
            sm: scale(self.sm, factor),
            md: scale(self.md, factor),
            lg: scale(self.lg, factor),
            xl: scale(self.xl, factor),
            xxl: scale(self.xxl, factor),
            xxxl: scale(self.xxxl, factor),
        }
    }
}

impl Default for SpacingScale {
    fn default() -> Self {
        Self {
            xxs: 4.0,
            xs: 8.0,
            sm: 12.0,
            md: 16.0,
            lg: 24.0,
            xl: 32.0,
            xxl: 48.0,
            xxxl: 64.0,
        }
    }
}

/// Spacing values after Dynamic Type scaling
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaledSpacing {
    pub xxs: f32,
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    pub xxxl: f32,
}

impl ScaledSpacing {
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Xxs => self.xxs,
            SpacingToken::Xs => self.xs,
            SpacingToken::Sm => self.sm,
            SpacingToken::Md => self.md,
            SpacingToken::Lg => self.lg,
            SpacingToken::Xl => self.xl,
            SpacingToken::Xxl => self.xxl,
            SpacingToken::Xxxl => self.xxxl,
        }
    }
}
