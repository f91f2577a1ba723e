//! Theme identifiers

use crate::error::ThemeError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The closed set of site themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeName {
    /// Light default theme.
    Default,
    /// Dark default theme.
    DefaultDark,
    /// Green, orange and purple comic palette.
    NinjaTurtles,
    /// Phosphor green on black.
    Matrix,
}

impl ThemeName {
    /// Theme used when nothing valid is persisted.
    pub const FALLBACK: ThemeName = ThemeName::DefaultDark;

    /// Stable id used for storage and the `data-theme` attribute.
    pub fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::DefaultDark => "defaultDark",
            Self::NinjaTurtles => "ninjaTurtles",
            Self::Matrix => "matrix",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Light",
            Self::DefaultDark => "Dark",
            Self::NinjaTurtles => "Ninja Turtles",
            Self::Matrix => "Matrix",
        }
    }

    /// Every theme, in menu order.
    pub fn all() -> &'static [ThemeName] {
        const ALL: [ThemeName; 4] = [
            ThemeName::Default,
            ThemeName::DefaultDark,
            ThemeName::NinjaTurtles,
            ThemeName::Matrix,
        ];
        &ALL
    }
}

impl Display for ThemeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ThemeName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|name| name.id() == s)
            .ok_or_else(|| ThemeError::InvalidTheme(s.to_string()))
    }
}
