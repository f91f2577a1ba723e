//! Shadow tokens for theming

use folio_core::Color;
use serde::{Deserialize, Serialize};

/// Semantic shadow token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowToken {
    Sm,
    Md,
    Lg,
    Xl,
}

impl ShadowToken {
    pub const ALL: [ShadowToken; 4] = [
        ShadowToken::Sm,
        ShadowToken::Md,
        ShadowToken::Lg,
        ShadowToken::Xl,
    ];

    pub fn css_property(self) -> &'static str {
        match self {
            Self::Sm => "--shadow-sm",
            Self::Md => "--shadow-md",
            Self::Lg => "--shadow-lg",
            Self::Xl => "--shadow-xl",
        }
    }
}

/// A box shadow definition
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    /// Format as a CSS `box-shadow` value
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px {}",
            self.offset_x,
            self.offset_y,
            self.blur,
            self.spread,
            self.color.to_css()
        )
    }
}

/// Complete set of shadow tokens
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShadowTokens {
    pub sm: Shadow,
    pub md: Shadow,
    pub lg: Shadow,
    pub xl: Shadow,
}

impl ShadowTokens {
    pub fn get(&self, token: ShadowToken) -> &Shadow {
        match token {
            ShadowToken::Sm => &self.sm,
            ShadowToken::Md => &self.md,
            ShadowToken::Lg => &self.lg,
            ShadowToken::Xl => &self.xl,
        }
    }

    /// Shadows tuned for light surfaces
    pub fn light() -> Self {
        let shadow = |a: f32| Color::BLACK.with_alpha(a);
        Self {
            sm: Shadow::new(0.0, 1.0, 2.0, 0.0, shadow(0.05)),
            md: Shadow::new(0.0, 4.0, 6.0, -1.0, shadow(0.1)),
            lg: Shadow::new(0.0, 10.0, 15.0, -3.0, shadow(0.1)),
            xl: Shadow::new(0.0, 20.0, 25.0, -5.0, shadow(0.1)),
        }
    }

    /// Shadows tuned for dark surfaces (higher opacity)
    pub fn dark() -> Self {
        let shadow = |a: f32| Color::BLACK.with_alpha(a);
        Self {
            sm: Shadow::new(0.0, 1.0, 2.0, 0.0, shadow(0.3)),
            md: Shadow::new(0.0, 4.0, 6.0, -1.0, shadow(0.4)),
            lg: Shadow::new(0.0, 10.0, 15.0, -3.0, shadow(0.4)),
            xl: Shadow::new(0.0, 20.0, 25.0, -5.0, shadow(0.5)),
        }
    }

    /// Colored glow instead of a drop shadow
    pub fn glow(color: Color) -> Self {
        Self {
            sm: Shadow::new(0.0, 0.0, 4.0, 0.0, color.with_alpha(0.3)),
            md: Shadow::new(0.0, 0.0, 8.0, 0.0, color.with_alpha(0.4)),
            lg: Shadow::new(0.0, 0.0, 16.0, 0.0, color.with_alpha(0.5)),
            xl: Shadow::new(0.0, 0.0, 24.0, 2.0, color.with_alpha(0.6)),
        }
    }
}
