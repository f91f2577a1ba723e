//! The light and dark default themes
//!
//! Both share the blue/violet brand scales and differ in surfaces, text and
//! shadow depth.

use crate::tokens::{ColorScale, Mode, Palette, SurfaceColors, TokenSet, TypographyTokens};

const SANS: &str = "Inter, system-ui, -apple-system, sans-serif";

fn typography() -> TypographyTokens {
    TypographyTokens::uniform(SANS)
}

pub fn default_theme() -> TokenSet {
    let palette = Palette {
        primary: ColorScale::new(0x3b82f6, 0x60a5fa, 0x2563eb),
        secondary: ColorScale::new(0x8b5cf6, 0xa78bfa, 0x7c3aed),
        background: SurfaceColors::new(0xffffff, 0xf3f4f6),
        text: SurfaceColors::new(0x111827, 0x4b5563),
    };
    TokenSet::with_palette(Mode::Light, palette, typography())
}

pub fn default_dark_theme() -> TokenSet {
    let palette = Palette {
        primary: ColorScale::new(0x60a5fa, 0x93c5fd, 0x3b82f6),
        secondary: ColorScale::new(0xa78bfa, 0xc4b5fd, 0x8b5cf6),
        background: SurfaceColors::new(0x0f172a, 0x1e293b),
        text: SurfaceColors::new(0xf1f5f9, 0x94a3b8),
    };
    TokenSet::with_palette(Mode::Dark, palette, typography())
}
