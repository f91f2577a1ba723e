//! Palette color tokens

use folio_core::Color;
use serde::{Deserialize, Serialize};

/// Semantic palette token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    PrimaryMain,
    PrimaryLight,
    PrimaryDark,
    SecondaryMain,
    SecondaryLight,
    SecondaryDark,
    BackgroundPrimary,
    BackgroundSecondary,
    TextPrimary,
    TextSecondary,
}

impl ColorToken {
    pub const ALL: [ColorToken; 10] = [
        ColorToken::PrimaryMain,
        ColorToken::PrimaryLight,
        ColorToken::PrimaryDark,
        ColorToken::SecondaryMain,
        ColorToken::SecondaryLight,
        ColorToken::SecondaryDark,
        ColorToken::BackgroundPrimary,
        ColorToken::BackgroundSecondary,
        ColorToken::TextPrimary,
        ColorToken::TextSecondary,
    ];

    /// CSS custom property carrying this token
    pub fn css_property(self) -> &'static str {
        match self {
            Self::PrimaryMain => "--color-primary-main",
            Self::PrimaryLight => "--color-primary-light",
            Self::PrimaryDark => "--color-primary-dark",
            Self::SecondaryMain => "--color-secondary-main",
            Self::SecondaryLight => "--color-secondary-light",
            Self::SecondaryDark => "--color-secondary-dark",
            Self::BackgroundPrimary => "--color-background-primary",
            Self::BackgroundSecondary => "--color-background-secondary",
            Self::TextPrimary => "--color-text-primary",
            Self::TextSecondary => "--color-text-secondary",
        }
    }
}

/// A brand color with its lighter and darker variants
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorScale {
    pub main: Color,
    pub light: Color,
    pub dark: Color,
}

impl ColorScale {
    pub fn new(main: u32, light: u32, dark: u32) -> Self {
        Self {
            main: Color::from_hex(main),
            light: Color::from_hex(light),
            dark: Color::from_hex(dark),
        }
    }
}

/// Page surface colors
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurfaceColors {
    pub primary: Color,
    pub secondary: Color,
}

impl SurfaceColors {
    pub fn new(primary: u32, secondary: u32) -> Self {
        Self {
            primary: Color::from_hex(primary),
            secondary: Color::from_hex(secondary),
        }
    }
}

/// Theme palette: brand scales plus background and text colors
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Palette {
    pub primary: ColorScale,
    pub secondary: ColorScale,
    pub background: SurfaceColors,
    pub text: SurfaceColors,
}

impl Palette {
    /// Get a color by token
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::PrimaryMain => self.primary.main,
            ColorToken::PrimaryLight => self.primary.light,
            ColorToken::PrimaryDark => self.primary.dark,
            ColorToken::SecondaryMain => self.secondary.main,
            ColorToken::SecondaryLight => self.secondary.light,
            ColorToken::SecondaryDark => self.secondary.dark,
            ColorToken::BackgroundPrimary => self.background.primary,
            ColorToken::BackgroundSecondary => self.background.secondary,
            ColorToken::TextPrimary => self.text.primary,
            ColorToken::TextSecondary => self.text.secondary,
        }
    }
}
