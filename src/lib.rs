//! # bible-text
//!
//! A document model for marked-up scriptural text.
//!
//! Format converters build into it, validate against it and serialize from it. The crate
//! is split in two:
//!
//! - [`bible`]: the boundary to the surrounding Bible data model (book identifiers and the
//!   verse-index lookups cross references are resolved against).
//! - [`formatted`]: the formatted-text tree itself, its traversal protocol, the builder, the
//!   structural validator, whitespace normalization and element-type signatures.
//!
//! ## Lifecycle
//!
//! ```text
//! FormattedText::new()          open, empty
//!     ├── append_visitor()      Builder fed by traversal calls
//!     ├── trim_whitespace()     optional normalization
//!     └── finish()              sealed: read-only from here on
//!            ├── validate()     structural checks + dangling references
//!            └── element_types() / accept()
//! ```
//!
//! For comprehensive test helpers, see the [testing module](formatted::testing).

pub mod bible;
pub mod formatted;

pub use formatted::{Error, FormattedText, Result, SealedText, Visitor};
