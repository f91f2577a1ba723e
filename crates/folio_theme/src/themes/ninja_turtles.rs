//! Sewer green with orange and purple accents, comic display headings

use crate::tokens::{ColorScale, Mode, Palette, SurfaceColors, TokenSet, TypographyTokens};

pub fn ninja_turtles_theme() -> TokenSet {
    let palette = Palette {
        primary: ColorScale::new(0x4caf50, 0x81c784, 0x2e7d32),
        secondary: ColorScale::new(0xff9800, 0xffb74d, 0xf57c00),
        background: SurfaceColors::new(0x1a2e1a, 0x243d24),
        text: SurfaceColors::new(0xe8f5e9, 0xa5d6a7),
    };
    let typography = TypographyTokens::uniform("Inter, system-ui, sans-serif")
        .with_heading("Bangers, Impact, sans-serif");

    let mut tokens = TokenSet::with_palette(Mode::Dark, palette, typography);
    tokens.radii.md = 12.0;
    tokens.radii.lg = 24.0;
    tokens
}
