//! Dynamic Type scaling
//!
//! The host derives a scale factor from the user's text-size setting and
//! passes it in on every layout pass. Nothing here caches it.

/// Accessibility text-size multiplier supplied by the host.
///
/// Non-finite and non-positive inputs normalise to `1.0`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ScaleFactor(f32);

impl ScaleFactor {
    pub const IDENTITY: ScaleFactor = ScaleFactor(1.0);

    pub fn new(factor: f32) -> Self {
        if factor.is_finite() && factor > 0.0 {
            Self(factor)
        } else {
            tracing::warn!(factor, "invalid scale factor, using 1.0");
            Self::IDENTITY
        }
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<f32> for ScaleFactor {
    fn from(factor: f32) -> Self {
        Self::new(factor)
    }
}

/// `base * factor`
pub fn scale(base: f32, factor: impl Into<ScaleFactor>) -> f32 {
    base * factor.into().get()
}

/// Scales a minimum touch target; the result is never below `base`.
pub fn scale_touch_target(base: f32, factor: impl Into<ScaleFactor>) -> f32 {
    base.max(scale(base, factor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale() {
        assert_eq!(scale(16.0, 1.5), 24.0);
        assert_eq!(scale(16.0, 0.5), 8.0);
        assert_eq!(scale(16.0, ScaleFactor::IDENTITY), 16.0);
    }

    #[test]
    fn test_touch_target_clamp() {
        assert_eq!(scale_touch_target(44.0, 0.5), 44.0);
        assert_eq!(scale_touch_target(44.0, 1.0), 44.0);
        assert_eq!(scale_touch_target(44.0, 1.5), 66.0);
    }

    #[test]
    fn test_invalid_factors_normalise() {
        assert_eq!(ScaleFactor::new(f32::NAN).get(), 1.0);
        assert_eq!(ScaleFactor::new(f32::INFINITY).get(), 1.0);
        assert_eq!(ScaleFactor::new(0.0).get(), 1.0);
        assert_eq!(ScaleFactor::new(-2.0).get(), 1.0);
        assert_eq!(scale(10.0, -1.0), 10.0);
    }
}
