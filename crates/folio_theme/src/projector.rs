//! Projects a token set onto the document root as CSS custom properties

use crate::tokens::{
    ColorToken, FontSizeToken, RadiusToken, ShadowToken, SpacingToken, TokenSet, TransitionToken,
};
use folio_core::DocumentRoot;

/// Every custom property written by [`project`], in write order.
///
/// Each theme supplies a value for every key, so a switch always overwrites
/// the whole set.
pub const PROPERTY_KEYS: [&str; 37] = [
    "--color-primary-main",
    "--color-primary-light",
    "--color-primary-dark",
    "--color-secondary-main",
    "--color-secondary-light",
    "--color-secondary-dark",
    "--color-background-primary",
    "--color-background-secondary",
    "--color-text-primary",
    "--color-text-secondary",
    "--font-family-base",
    "--font-family-heading",
    "--font-size-xs",
    "--font-size-sm",
    "--font-size-base",
    "--font-size-lg",
    "--font-size-xl",
    "--font-size-2xl",
    "--font-size-3xl",
    "--font-size-4xl",
    "--spacing-xs",
    "--spacing-sm",
    "--spacing-md",
    "--spacing-lg",
    "--spacing-xl",
    "--spacing-2xl",
    "--radius-sm",
    "--radius-md",
    "--radius-lg",
    "--radius-full",
    "--transition-fast",
    "--transition-normal",
    "--transition-slow",
    "--shadow-sm",
    "--shadow-md",
    "--shadow-lg",
    "--shadow-xl",
];

/// Flatten a token set into `(property, value)` pairs in [`PROPERTY_KEYS`] order
pub fn css_variables(tokens: &TokenSet) -> Vec<(&'static str, String)> {
    let mut vars = Vec::with_capacity(PROPERTY_KEYS.len());

    for token in ColorToken::ALL {
        vars.push((token.css_property(), tokens.palette.get(token).to_css()));
    }

    let typography = &tokens.typography;
    vars.push(("--font-family-base", typography.font_family_base.clone()));
    vars.push(("--font-family-heading", typography.font_family_heading.clone()));
    for token in FontSizeToken::ALL {
        vars.push((token.css_property(), rem(typography.get(token))));
    }

    for token in SpacingToken::ALL {
        vars.push((token.css_property(), rem(tokens.spacing.get(token))));
    }

    for token in RadiusToken::ALL {
        vars.push((token.css_property(), px(tokens.radii.get(token))));
    }

    for token in TransitionToken::ALL {
        vars.push((token.css_property(), format!("{}ms", tokens.transitions.get(token))));
    }

    for token in ShadowToken::ALL {
        vars.push((token.css_property(), tokens.shadows.get(token).to_css()));
    }

    vars
}

/// Write every token of `tokens` onto `doc`
pub fn project<D: DocumentRoot + ?Sized>(tokens: &TokenSet, doc: &mut D) {
    let vars = css_variables(tokens);
    tracing::trace!("Projecting {} CSS variables", vars.len());
    for (name, value) in &vars {
        doc.set_property(name, value);
    }
}

fn rem(value: f32) -> String {
    format!("{}rem", value)
}

fn px(value: f32) -> String {
    format!("{}px", value)
}
