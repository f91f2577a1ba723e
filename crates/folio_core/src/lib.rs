//! Folio Core
//!
//! Foundational primitives shared by the Folio site crates:
//!
//! - **Color**: RGBA colors with hex parsing and CSS formatting
//! - **Document root**: the contract for writing custom properties and
//!   attributes onto the page root, plus an in-memory implementation
//! - **Subscribers**: a callback registry that hands out unsubscribe handles
//!
//! # Example
//!
//! ```rust
//! use folio_core::{Color, DocumentRoot, MemoryDocument};
//!
//! let mut doc = MemoryDocument::new();
//! doc.set_property("--color-primary-main", &Color::from_hex(0x1E66F5).to_css());
//! doc.set_attribute("data-theme", "default");
//!
//! assert_eq!(doc.property("--color-primary-main"), Some("#1e66f5"));
//! assert_eq!(doc.attribute("data-theme"), Some("default"));
//! ```

pub mod color;
pub mod document;
pub mod subscribers;

pub use color::{Color, ColorParseError};
pub use document::{DocumentRoot, MemoryDocument};
pub use subscribers::{SubscriberList, SubscriptionId};
