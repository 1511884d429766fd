//! # yearstamp
//!
//! A tool that normalizes copyright year ranges in source file headers.
//!
//! `yearstamp` locates "Copyright … <years>" annotations anywhere in a text
//! file, merges overlapping and adjacent year ranges into canonical form,
//! and optionally extends them with a new year. It works on raw character
//! streams, so headers inside block comments, framed license boxes, and
//! RCS-style tags are all handled the same way.
//!
//! ## Features
//!
//! * Parse and merge year range lists (`2013,2012,1995-2014` becomes `1995-2014`)
//! * Extend year ranges with the current year without ever duplicating it
//! * A padded rewrite policy that preserves fixed-width header framing
//! * Ignore patterns to exempt specific headers from rewriting
//! * A git pre-commit hook that reconciles staged and unstaged content
//!   independently, so uncommitted edits are never lost
//! * An amend command that extends the headers of the files changed by
//!   the HEAD commit with that commit's year, for post-hoc fixups
//!
//! ## Usage as a Library
//!
//! ```rust
//! use yearstamp::normalize::{Normalizer, Policy};
//!
//! fn main() -> anyhow::Result<()> {
//!     let normalizer = Normalizer::new(Policy::Plain, Some(2025));
//!
//!     let (content, found) = normalizer.normalize("// Copyright (c) 2013 ACME")?;
//!     assert_eq!(content, "// Copyright (c) 2013,2025 ACME");
//!     assert_eq!(found, 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`range`] / [`ranges`] - The year range model: parsing, merging, stringification
//! * [`header`] - The copyright locator over free-form text
//! * [`normalize`] - Rewrite policies and the normalization loop
//! * [`hook`] - The pre-commit reconciliation procedure
//!
//! [`range`]: crate::range
//! [`ranges`]: crate::ranges
//! [`header`]: crate::header
//! [`normalize`]: crate::normalize
//! [`hook`]: crate::hook

pub mod cli;
pub mod diff;
pub mod git;
pub mod header;
pub mod hook;
pub mod logging;
pub mod normalize;
pub mod range;
pub mod ranges;
