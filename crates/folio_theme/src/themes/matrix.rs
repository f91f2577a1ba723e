//! Phosphor green on black, monospace everywhere, glowing shadows

use crate::tokens::{
    ColorScale, Mode, Palette, RadiusTokens, ShadowTokens, SurfaceColors, TokenSet,
    TypographyTokens,
};

const MONO: &str = "'Courier New', Courier, monospace";

pub fn matrix_theme() -> TokenSet {
    let palette = Palette {
        primary: ColorScale::new(0x00ff41, 0x39ff6a, 0x00b82e),
        secondary: ColorScale::new(0x008f11, 0x00c417, 0x005c0b),
        background: SurfaceColors::new(0x000000, 0x0d0208),
        text: SurfaceColors::new(0x00ff41, 0x008f11),
    };

    let mut tokens = TokenSet::with_palette(Mode::Dark, palette, TypographyTokens::uniform(MONO));
    tokens.radii = RadiusTokens::sharp();
    tokens.shadows = ShadowTokens::glow(palette.primary.main);
    tokens.transitions.normal = 200;
    tokens
}
