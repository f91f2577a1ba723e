//! Typography tokens

use serde::{Deserialize, Serialize};

/// Root font size used to convert rem sizes into pixels
pub const ROOT_FONT_PX: f32 = 16.0;

/// Font size token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FontSizeToken {
    Xs,
    Sm,
    Base,
    Lg,
    Xl,
    Xl2,
    Xl3,
    Xl4,
}

impl FontSizeToken {
    pub const ALL: [FontSizeToken; 8] = [
        FontSizeToken::Xs,
        FontSizeToken::Sm,
        FontSizeToken::Base,
        FontSizeToken::Lg,
        FontSizeToken::Xl,
        FontSizeToken::Xl2,
        FontSizeToken::Xl3,
        FontSizeToken::Xl4,
    ];

    pub fn css_property(self) -> &'static str {
        match self {
            Self::Xs => "--font-size-xs",
            Self::Sm => "--font-size-sm",
            Self::Base => "--font-size-base",
            Self::Lg => "--font-size-lg",
            Self::Xl => "--font-size-xl",
            Self::Xl2 => "--font-size-2xl",
            Self::Xl3 => "--font-size-3xl",
            Self::Xl4 => "--font-size-4xl",
        }
    }
}

/// Font size scale, in rem
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontSizes {
    pub xs: f32,
    pub sm: f32,
    pub base: f32,
    pub lg: f32,
    pub xl: f32,
    #[serde(rename = "2xl")]
    pub xl2: f32,
    #[serde(rename = "3xl")]
    pub xl3: f32,
    #[serde(rename = "4xl")]
    pub xl4: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            xs: 0.75,
            sm: 0.875,
            base: 1.0,
            lg: 1.125,
            xl: 1.25,
            xl2: 1.5,
            xl3: 2.25,
            xl4: 3.0,
        }
    }
}

/// Font families and size scale
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypographyTokens {
    pub font_family_base: String,
    pub font_family_heading: String,
    pub sizes: FontSizes,
}

impl TypographyTokens {
    /// Same family for body and headings, default size scale
    pub fn uniform(family: &str) -> Self {
        Self {
            font_family_base: family.to_string(),
            font_family_heading: family.to_string(),
            sizes: FontSizes::default(),
        }
    }

    pub fn with_heading(mut self, family: &str) -> Self {
        self.font_family_heading = family.to_string();
        self
    }

    /// Get a font size in rem
    pub fn get(&self, token: FontSizeToken) -> f32 {
        match token {
            FontSizeToken::Xs => self.sizes.xs,
            FontSizeToken::Sm => self.sizes.sm,
            FontSizeToken::Base => self.sizes.base,
            FontSizeToken::Lg => self.sizes.lg,
            FontSizeToken::Xl => self.sizes.xl,
            FontSizeToken::Xl2 => self.sizes.xl2,
            FontSizeToken::Xl3 => self.sizes.xl3,
            FontSizeToken::Xl4 => self.sizes.xl4,
        }
    }

    /// Get a font size in pixels
    pub fn px(&self, token: FontSizeToken) -> f32 {
        self.get(token) * ROOT_FONT_PX
    }
}
