//! Folio site wiring
//!
//! Connects the theme store, the animation scheduler and the hero rotator
//! into a single [`Site`], configured from a `folio.toml` file.
//!
//! ```rust
//! use folio_app::{Site, SiteConfig};
//! use folio_core::MemoryDocument;
//! use folio_theme::MemoryStorage;
//!
//! let mut site = Site::new(SiteConfig::default(), MemoryStorage::new(), MemoryDocument::new());
//! site.mount();
//! site.set_theme("matrix").unwrap();
//! site.advance(1_000.0);
//!
//! assert!(site.hero_background().hero.is_some());
//! assert!(site.hero_view().is_some());
//! ```

pub mod config;
pub mod logging;
pub mod site;

pub use config::{DataConfig, RotatorSection, SiteConfig, ThemeConfig};
pub use logging::init_tracing;
pub use site::{hero_font, Site};
