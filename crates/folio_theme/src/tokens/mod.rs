//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a theme:
//! - Palette colors (brand, surfaces, text)
//! - Typography (font families, sizes)
//! - Spacing
//! - Border radii
//! - Shadows
//! - Transition durations
//! - Layout breakpoints

mod breakpoint;
mod palette;
mod radius;
mod shadow;
mod spacing;
mod transition;
mod typography;

pub use breakpoint::*;
pub use palette::*;
pub use radius::*;
pub use shadow::*;
pub use spacing::*;
pub use transition::*;
pub use typography::*;

use serde::{Deserialize, Serialize};

/// Light or dark rendering mode of a theme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    #[default]
    Dark,
}

impl Mode {
    pub fn is_dark(self) -> bool {
        matches!(self, Mode::Dark)
    }
}

/// The complete token set resolved for one theme.
///
/// Every field is required when deserializing; a partial set is rejected
/// rather than filled in from another theme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenSet {
    pub mode: Mode,
    pub palette: Palette,
    pub typography: TypographyTokens,
    pub spacing: SpacingTokens,
    pub radii: RadiusTokens,
    pub shadows: ShadowTokens,
    pub transitions: TransitionTokens,
    pub breakpoints: BreakpointTokens,
}

impl TokenSet {
    /// Default layout tokens around a palette and font families
    pub fn with_palette(mode: Mode, palette: Palette, typography: TypographyTokens) -> Self {
        Self {
            mode,
            palette,
            typography,
            spacing: SpacingTokens::default(),
            radii: RadiusTokens::default(),
            shadows: match mode {
                Mode::Light => ShadowTokens::light(),
                Mode::Dark => ShadowTokens::dark(),
            },
            transitions: TransitionTokens::default(),
            breakpoints: BreakpointTokens::default(),
        }
    }
}
