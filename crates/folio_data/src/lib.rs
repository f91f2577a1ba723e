//! Folio content data
//!
//! Typed records for the portfolio sections and a source that reads them from
//! JSON files. Failures are reported through [`Fetched::error`] instead of
//! being raised, so a missing section renders empty rather than aborting the
//! page.
//!
//! ```rust,no_run
//! use folio_data::LocalJsonSource;
//!
//! let source = LocalJsonSource::new("data");
//! let projects = source.fetch_projects();
//! if let Some(error) = &projects.error {
//!     eprintln!("projects unavailable: {error}");
//! }
//! ```

mod error;
mod model;
mod source;

pub use error::DataError;
pub use model::*;
pub use source::{Fetched, LocalJsonSource};
