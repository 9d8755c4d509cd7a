//! Scaffold Source
//!
//! Go source loading and anchor location for generated wiring files.
//!
//! # Core Concepts
//!
//! - [`GoSource`]: source text plus its tree-sitter syntax tree
//! - [`Locator`]: finds the import list, a struct's field list, a
//!   constructor's keyed literal and a method's statement list
//! - [`GoExpr`]: programmatic Go expressions for inserted entries
//! - [`ContentHash`]: Blake3 hash of a loaded text
//!
//! # Example
//!
//! ```rust,ignore
//! use scaffold_source::{GoSource, Locator};
//!
//! let doc = GoSource::parse(std::fs::read_to_string("container.go")?)?;
//! let fields = Locator::new(&doc).struct_type("Container");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod anchor;
mod document;
mod expr;
mod hash;

pub use anchor::{
    AnchorKind, Entry, EntryKind, EntryList, ImportAnchor, ImportDecl, LiteralAnchor, Located,
    Locator, MethodAnchor, StructAnchor,
};
pub use document::{GoSource, ParseError};
pub use expr::GoExpr;
pub use hash::ContentHash;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
