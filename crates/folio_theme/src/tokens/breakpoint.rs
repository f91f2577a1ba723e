//! Responsive layout breakpoints

use serde::{Deserialize, Serialize};

/// Minimum viewport widths, in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BreakpointTokens {
    pub sm: u32,
    pub md: u32,
    pub lg: u32,
    pub xl: u32,
}

impl BreakpointTokens {
    /// Name of the largest breakpoint the viewport reaches
    pub fn classify(&self, viewport_px: u32) -> &'static str {
        if viewport_px >= self.xl {
            "xl"
        } else if viewport_px >= self.lg {
            "lg"
        } else if viewport_px >= self.md {
            "md"
        } else if viewport_px >= self.sm {
            "sm"
        } else {
            "xs"
        }
    }
}

impl Default for BreakpointTokens {
    fn default() -> Self {
        Self {
            sm: 640,
            md: 768,
            lg: 1024,
            xl: 1280,
        }
    }
}
