//! Border radius tokens

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    Sm,
    Md,
    Lg,
    Full,
}

impl RadiusToken {
    pub const ALL: [RadiusToken; 4] = [
        RadiusToken::Sm,
        RadiusToken::Md,
        RadiusToken::Lg,
        RadiusToken::Full,
    ];

    pub fn css_property(self) -> &'static str {
        match self {
            Self::Sm => "--radius-sm",
            Self::Md => "--radius-md",
            Self::Lg => "--radius-lg",
            Self::Full => "--radius-full",
        }
    }
}

/// Border radii, in pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RadiusTokens {
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub full: f32,
}

impl RadiusTokens {
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::Sm => self.sm,
            RadiusToken::Md => self.md,
            RadiusToken::Lg => self.lg,
            RadiusToken::Full => self.full,
        }
    }

    /// Square corners everywhere except pills
    pub fn sharp() -> Self {
        Self {
            sm: 0.0,
            md: 0.0,
            lg: 0.0,
            full: 9999.0,
        }
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            sm: 4.0,
            md: 8.0,
            lg: 16.0,
            full: 9999.0,
        }
    }
}
