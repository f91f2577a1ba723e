//! Spacing tokens

use serde::{Deserialize, Serialize};

/// Spacing token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xl2,
}

impl SpacingToken {
    pub const ALL: [SpacingToken; 6] = [
        SpacingToken::Xs,
        SpacingToken::Sm,
        SpacingToken::Md,
        SpacingToken::Lg,
        SpacingToken::Xl,
        SpacingToken::Xl2,
    ];

    pub fn css_property(self) -> &'static str {
        match self {
            Self::Xs => "--spacing-xs",
            Self::Sm => "--spacing-sm",
            Self::Md => "--spacing-md",
            Self::Lg => "--spacing-lg",
            Self::Xl => "--spacing-xl",
            Self::Xl2 => "--spacing-2xl",
        }
    }
}

/// Spacing scale, in rem
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpacingTokens {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    #[serde(rename = "2xl")]
    pub xl2: f32,
}

impl SpacingTokens {
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Xs => self.xs,
            SpacingToken::Sm => self.sm,
            SpacingToken::Md => self.md,
            SpacingToken::Lg => self.lg,
            SpacingToken::Xl => self.xl,
            SpacingToken::Xl2 => self.xl2,
        }
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            xs: 0.25,
            sm: 0.5,
            md: 1.0,
            lg: 1.5,
            xl: 2.0,
            xl2: 3.0,
        }
    }
}
