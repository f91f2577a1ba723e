//! Transition duration tokens

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TransitionToken {
    Fast,
    Normal,
    Slow,
}

impl TransitionToken {
    pub const ALL: [TransitionToken; 3] = [
        TransitionToken::Fast,
        TransitionToken::Normal,
        TransitionToken::Slow,
    ];

    pub fn css_property(self) -> &'static str {
        match self {
            Self::Fast => "--transition-fast",
            Self::Normal => "--transition-normal",
            Self::Slow => "--transition-slow",
        }
    }
}

/// Transition durations, in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransitionTokens {
    pub fast: u32,
    pub normal: u32,
    pub slow: u32,
}

impl TransitionTokens {
    pub fn get(&self, token: TransitionToken) -> u32 {
        match token {
            TransitionToken::Fast => self.fast,
            TransitionToken::Normal => self.normal,
            TransitionToken::Slow => self.slow,
        }
    }
}

impl Default for TransitionTokens {
    fn default() -> Self {
        Self {
            fast: 150,
            normal: 300,
            slow: 500,
        }
    }
}
