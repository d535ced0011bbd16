//! Appearance mode supplied by the host

use serde::{Deserialize, Deserializer, Serialize};

/// Light or dark appearance.
///
/// The host decides which mode is active; this crate never detects it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Stable id used in configuration files.
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Maps a host-provided mode name to a scheme.
    ///
    /// Only `"dark"` (case-insensitive) selects [`ColorScheme::Dark`]. Every
    /// other value, including modes this crate does not know about, resolves
    /// to [`ColorScheme::Light`].
    pub fn from_name(name: &str) -> Self {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "dark" => Self::Dark,
            "light" => Self::Light,
            _ => {
                tracing::debug!(mode = name, "unsupported appearance mode, using light");
                Self::Light
            }
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Deserializes through [`ColorScheme::from_name`], so unknown modes read as
/// light instead of failing.
impl<'de> Deserialize<'de> for ColorScheme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(ColorScheme::from_name("dark"), ColorScheme::Dark);
        assert_eq!(ColorScheme::from_name(" DARK "), ColorScheme::Dark);
        assert_eq!(ColorScheme::from_name("light"), ColorScheme::Light);
    }

    #[test]
    fn test_unknown_mode_fails_closed_to_light() {
        assert_eq!(ColorScheme::from_name("high-contrast"), ColorScheme::Light);
        assert_eq!(ColorScheme::from_name(""), ColorScheme::Light);
        assert_eq!(ColorScheme::default(), ColorScheme::Light);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(ColorScheme::Light.toggle(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggle().toggle(), ColorScheme::Dark);
    }

    #[test]
    fn test_deserialize_unknown_mode_as_light() {
        let dark: ColorScheme = serde_json::from_str("\"Dark\"").unwrap();
        assert_eq!(dark, ColorScheme::Dark);
        let sepia: ColorScheme = serde_json::from_str("\"sepia\"").unwrap();
        assert_eq!(sepia, ColorScheme::Light);
        assert_eq!(serde_json::to_string(&ColorScheme::Dark).unwrap(), "\"dark\"");
    }
}
