//! Theme construction errors

use std::path::PathBuf;

use thiserror::Error;
use tincture_core::ColorError;

/// Errors raised while building or loading a theme.
///
/// Every variant is raised at construction time; a built
/// [`DesignSystem`](crate::DesignSystem) never fails to resolve.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A color token could not be decoded
    #[error("invalid color for {table}.{token}: {source}")]
    Color {
        table: &'static str,
        token: String,
        #[source]
        source: ColorError,
    },

    /// A token has no value after merging overrides onto the base
    #[error("missing token {table}.{token}")]
    MissingToken { table: &'static str, token: String },

    /// A theme document names a token that does not exist
    #[error("unknown token {table}.{token}")]
    UnknownToken { table: &'static str, token: String },

    /// A preset selector names a preset that does not exist
    #[error("unknown {kind} preset '{name}'")]
    UnknownPreset { kind: &'static str, name: String },

    /// A registry already holds a theme with this name
    #[error("theme '{0}' is already registered")]
    DuplicateTheme(String),

    /// The theme document is not valid TOML
    #[error("failed to parse theme document: {0}")]
    Parse(#[from] toml::de::Error),

    /// A theme document could not be written as TOML
    #[error("failed to serialize theme document: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The theme document could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
