//! Folio Theme System
//!
//! Runtime theming for the portfolio site: a closed set of themes, each
//! resolving to a complete token set, projected onto the document root as CSS
//! custom properties and persisted across sessions.
//!
//! # Overview
//!
//! - **Theme names**: [`ThemeName`] is a closed enum; unknown ids are rejected
//! - **Design tokens**: [`TokenSet`] bundles palette, typography, spacing,
//!   radii, shadows, transitions and breakpoints
//! - **Registry**: [`ThemeRegistry`] maps every theme to exactly one token set
//! - **Projection**: [`project`] writes every token as a `--custom-property`
//! - **Backgrounds**: [`hero_background`] picks a decorative hero image
//! - **Store**: [`ThemeStore`] holds the active theme, persists it through a
//!   [`ThemeStorage`] and notifies subscribers after the document is updated
//!
//! # Quick Start
//!
//! ```rust
//! use folio_core::MemoryDocument;
//! use folio_theme::{MemoryStorage, ThemeName, ThemeStore};
//!
//! let storage = MemoryStorage::new();
//! let store = ThemeStore::new(storage.clone(), MemoryDocument::new());
//!
//! // Nothing persisted yet: falls back to the dark default.
//! assert_eq!(store.current(), ThemeName::DefaultDark);
//!
//! store.set(ThemeName::Matrix).unwrap();
//! store.with_document(|doc| {
//!     assert_eq!(doc.attribute("data-theme"), Some("matrix"));
//! });
//!
//! // A fresh store over the same storage picks the choice back up.
//! let reloaded = ThemeStore::new(storage, MemoryDocument::new());
//! assert_eq!(reloaded.current(), ThemeName::Matrix);
//! ```

pub mod background;
pub mod error;
pub mod name;
pub mod projector;
pub mod registry;
pub mod storage;
pub mod store;
pub mod themes;
pub mod tokens;

pub use background::{hero_background, HeroBackground};
pub use error::{StorageError, ThemeError};
pub use name::ThemeName;
pub use projector::{css_variables, project, PROPERTY_KEYS};
pub use registry::{builtin_registry, ThemeRegistry};
pub use storage::{JsonFileStorage, MemoryStorage, ThemeStorage};
pub use store::{ThemeStore, DEFAULT_STORAGE_KEY, THEME_ATTRIBUTE};
pub use tokens::*;
