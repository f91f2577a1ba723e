//! Built-in theme definitions

mod default;
mod matrix;
mod ninja_turtles;

pub use default::{default_dark_theme, default_theme};
pub use matrix::matrix_theme;
pub use ninja_turtles::ninja_turtles_theme;

use crate::name::ThemeName;
use crate::tokens::TokenSet;

/// Token set shipped for a built-in theme
pub fn builtin_tokens(name: ThemeName) -> TokenSet {
    match name {
        ThemeName::Default => default_theme(),
        ThemeName::DefaultDark => default_dark_theme(),
        ThemeName::NinjaTurtles => ninja_turtles_theme(),
        ThemeName::Matrix => matrix_theme(),
    }
}
