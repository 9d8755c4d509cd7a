//! Structural deltas for the wiring file
//!
//! Each anchor mutation yields a [`WiringDelta`]: the identity key it
//! inserted and the byte [`Splice`] that realises it. Deltas computed against
//! one source never touch the same bytes, so they can be applied in any order.

use scaffold_source::AnchorKind;
use std::fmt;
use std::ops::Range;

/// Byte-range replacement over a source text
///
/// An empty range is a pure insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    /// Replaced byte range
    pub range: Range<usize>,
    /// Replacement text
    pub text: String,
}

impl Splice {
    /// Insert `text` at `offset`
    #[inline]
    #[must_use]
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self {
            range: offset..offset,
            text: text.into(),
        }
    }

    /// Replace `range` with `text`
    #[inline]
    #[must_use]
    pub fn replace(range: Range<usize>, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }

    /// Check if the ranges of two splices intersect
    ///
    /// Two insertions at the same offset also conflict: their order would be
    /// ambiguous.
    #[must_use]
    pub fn overlaps(&self, other: &Splice) -> bool {
        if self.range.start == other.range.start {
            return true;
        }
        self.range.start < other.range.end && other.range.start < self.range.end
    }
}

/// One insertion into one anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WiringDelta {
    /// Target anchor
    pub anchor: AnchorKind,
    /// Identity key of the inserted entry
    pub key: String,
    /// Text edit
    pub splice: Splice,
}

/// Result of one anchor mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Entry appended
    Inserted,
    /// Entry with the same identity key already exists
    AlreadyPresent,
    /// Anchor declaration does not exist
    AnchorNotFound,
    /// Anchor declaration exists in an unexpected shape
    ShapeMismatch(String),
}

impl MutationOutcome {
    /// Check if the anchor could not be used
    #[inline]
    #[must_use]
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::AnchorNotFound | Self::ShapeMismatch(_))
    }
}

impl fmt::Display for MutationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inserted => f.write_str("inserted"),
            Self::AlreadyPresent => f.write_str("already present"),
            Self::AnchorNotFound => f.write_str("anchor not found"),
            Self::ShapeMismatch(reason) => write!(f, "shape mismatch: {reason}"),
        }
    }
}
