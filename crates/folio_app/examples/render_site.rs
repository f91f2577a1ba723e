//! Mount the site headlessly, switch themes and print the resulting
//! stylesheet and hero frames.
//!
//! Run with: cargo run -p folio_app --example render_site [folio.toml]

use anyhow::Result;
use folio_app::{init_tracing, Site, SiteConfig};
use folio_core::MemoryDocument;
use std::path::PathBuf;

fn main() -> Result<()> {
    init_tracing("info");

    let config = match std::env::args().nth(1) {
        Some(path) => SiteConfig::load(&PathBuf::from(path))?,
        None => SiteConfig::default(),
    };

    let mut site = Site::from_config(config, MemoryDocument::new());
    let theme = site.mount();
    tracing::info!("Mounted with theme '{}'", theme);

    for id in ["matrix", "ninjaTurtles", "default"] {
        site.set_theme(id)?;
        site.advance(0.0);

        println!("/* {} */", id);
        site.store().with_document(|doc| {
            println!(":root[data-theme=\"{}\"] {{", id);
            for (name, value) in doc.properties() {
                println!("  {}: {};", name, value);
            }
            println!("}}");
        });
        println!("/* hero background: {:?} */", site.hero_background().hero);

        for _ in 0..10 {
            site.advance(500.0);
            if let Some(view) = site.hero_view() {
                println!(
                    "/* t={:>6}ms {:?} '{}' ({:.2}) -> '{}' ({:.2}) width {:.0}px */",
                    site.scheduler().now_ms(),
                    view.phase,
                    view.current.text,
                    view.current.opacity,
                    view.next.text,
                    view.next.opacity,
                    view.width_px
                );
            }
        }
    }

    site.unmount();
    Ok(())
}
