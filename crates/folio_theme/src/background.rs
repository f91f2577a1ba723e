//! Decorative hero backgrounds per theme

use crate::name::ThemeName;
use serde::Serialize;

/// Background images for the page sections of a theme.
///
/// `None` means the section uses its plain token background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HeroBackground {
    pub hero: Option<&'static str>,
}

/// Background configuration for a theme.
///
/// Only the decorative themes carry a hero image; a missing entry resolves to
/// no image rather than to another theme's.
pub fn hero_background(name: ThemeName) -> HeroBackground {
    let hero = match name {
        ThemeName::NinjaTurtles => Some("/images/backgrounds/ninja-turtles-hero.jpg"),
        ThemeName::Matrix => Some("/images/backgrounds/matrix-hero.gif"),
        ThemeName::Default | ThemeName::DefaultDark => None,
    };
    HeroBackground { hero }
}
