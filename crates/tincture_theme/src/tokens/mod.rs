//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a design system:
//! - Adaptive colors (light/dark pairs)
//! - Typography (size, weight, design, Dynamic Type anchor)
//! - Spacing
//! - Corner radii
//! - Shadows
//! - Layout constants

/// Declares a token key enum with a stable config id per variant.
macro_rules! token_keys {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $id:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every key, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Stable id used in theme documents.
            pub fn id(self) -> &'static str {
                match self {
                    $($name::$variant => $id,)+
                }
            }

            /// Looks a key up by its id.
            pub fn from_id(id: &str) -> Option<Self> {
                match id {
                    $($id => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.id())
            }
        }
    };
}

mod color;
mod layout;
mod radius;
mod shadow;
mod spacing;
mod typography;

pub use color::*;
pub use layout::*;
pub use radius::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;
