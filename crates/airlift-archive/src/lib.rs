//! Directory packaging for airlift.
//!
//! # Packaging pipeline
//!
//! ```text
//! airlift deploy
//!   1. Ignore rules ── .gitignore at the directory root, if present
//!   2. Pack         ── tar the included tree, gzip it in memory
//!   3. Upload       ── the buffer moves on to airlift-platform
//! ```
//!
//! # Filtering strategy
//!
//! Exclusion is a capability: the packer asks a [`PathFilter`] whether
//! each relative path is denied and knows nothing about pattern
//! syntax. [`IgnoreRules`] is the gitignore-backed implementation:
//! later patterns override earlier ones, `!` patterns re-include, and
//! a denied directory prunes its whole subtree.
//!
//! The archive is built entirely in memory; any traversal or
//! compression failure aborts the operation with no partial buffer.

pub mod error;
pub mod filter;
pub mod pack;

pub use error::ArchiveError;
pub use filter::{IgnoreRules, PathFilter, IGNORE_FILE};
pub use pack::{pack_dir, pack_dir_with_ignore_file, unpack};
