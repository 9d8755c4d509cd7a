//! Scaffold Wiring
//!
//! Idempotent registration of a generated module in a project's dependency
//! container file.
//!
//! # Core Concepts
//!
//! - [`Augmenter`]: locates the four anchors, plans the insertions and writes
//!   the file atomically under a [`PathLock`]
//! - [`ModuleNames`]: identifiers derived from a validated module name
//! - [`Mutator`]: identity check and append for one anchor
//! - [`MutationOutcome`]: what happened at each anchor
//! - [`WiringConfig`]: declaration names, project conventions and policy
//!
//! # Example
//!
//! ```rust,ignore
//! use scaffold_wiring::{Augmenter, ProjectLayout, WiringConfig};
//!
//! let config = WiringConfig::load("wiring.toml")?;
//! let layout = ProjectLayout::detect(".", &config)?;
//! let report = Augmenter::new(config).augment(&layout, "orders")?;
//! println!("written: {}", report.written);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod augment;
mod config;
mod delta;
mod error;
mod layout;
mod lock;
mod mutator;
mod names;
mod project;
mod serializer;

pub use augment::{AnchorOutcome, AugmentReport, Augmentation, Augmenter};
pub use config::{MissingAnchorPolicy, WiringConfig};
pub use delta::{MutationOutcome, Splice, WiringDelta};
pub use error::{
    ConfigError, EnvironmentError, SerializeError, ValidationError, WiringError, WiringResult,
};
pub use lock::PathLock;
pub use mutator::{Mutation, Mutator};
pub use names::ModuleNames;
pub use project::ProjectLayout;
pub use serializer::{render, write_atomic};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
