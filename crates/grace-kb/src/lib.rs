//! Knowledge base for Grace.
//!
//! The knowledge base is a flat text file holding instructional sections
//! delimited by `=== LABEL ===` header lines. This crate provides the
//! header grammar, pure section extraction, a `KbSource` abstraction for
//! testability, and a `KbStore` that re-reads the file on every lookup so
//! edits between turns take effect immediately.

pub mod error;
pub mod mock;
pub mod section;
pub mod source;
pub mod store;

pub use error::{KbError, KbResult};
pub use mock::MockKbSource;
pub use section::{extract_section, is_header_line};
pub use source::{FileKbSource, KbSource};
pub use store::KbStore;
