//! Tincture Core
//!
//! Foundational primitives shared by the theme and style crates:
//!
//! - [`Color`]: RGBA color with hex parsing
//! - [`ColorScheme`]: The light/dark appearance mode supplied by the host
//! - [`ColorError`]: Errors from parsing textual color tokens
//!
//! # Example
//!
//! ```rust
//! use tincture_core::{Color, ColorScheme};
//!
//! let brand = Color::parse_hex("#007AFF").unwrap();
//! assert_eq!(brand, Color::from_hex(0x007AFF));
//!
//! // Unknown modes fall back to light
//! assert_eq!(ColorScheme::from_name("sepia"), ColorScheme::Light);
//! ```

pub mod color;
pub mod error;
pub mod scheme;

pub use color::Color;
pub use error::ColorError;
pub use scheme::ColorScheme;
