//! Error types for wiring augmentation
//!
//! Provides error handling for:
//! - Module identifier validation
//! - Project layout detection
//! - Anchor lookup (missing or misshapen declarations)
//! - Serialization and atomic replacement of the target file

use scaffold_source::{AnchorKind, ContentHash, ParseError};
use std::path::PathBuf;
use std::time::Duration;

/// Malformed module identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Empty identifier
    #[error("module name cannot be empty")]
    Empty,

    /// First character is not a lower-case ASCII letter
    #[error("module name '{0}' must start with a lower-case letter")]
    InvalidStart(String),

    /// Character outside `a-z`, `0-9`, `_`
    #[error("module name '{name}' contains invalid character {ch:?}")]
    InvalidCharacter { name: String, ch: char },

    /// Trailing or doubled underscore
    #[error("module name '{0}' has a misplaced underscore")]
    MisplacedUnderscore(String),

    /// Reserved Go keyword
    #[error("module name '{0}' is a Go keyword")]
    Keyword(String),
}

/// Caller is not inside a recognized project layout
#[derive(Debug, thiserror::Error)]
pub enum EnvironmentError {
    /// No go.mod at the project root
    #[error("not in a Go project directory (go.mod not found in {0})")]
    MissingGoMod(PathBuf),

    /// go.mod without a `module` directive
    #[error("go.mod at {0} has no module directive")]
    MissingModuleDirective(PathBuf),

    /// Modules directory missing
    #[error("not a scaffolded project ({0} not found)")]
    MissingModulesDir(PathBuf),
}

/// Errors while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading the configuration file
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed TOML
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Errors while rendering and writing the augmented source
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    /// Rendered text no longer parses
    #[error("augmented source is not valid Go: {0}")]
    InvalidOutput(#[source] ParseError),

    /// Two splices touch the same bytes
    #[error("overlapping edits at byte {0}")]
    OverlappingSplices(usize),

    /// File changed on disk since it was loaded
    #[error("{path} was modified concurrently (expected {expected}, found {actual})")]
    ConcurrentModification {
        path: PathBuf,
        expected: ContentHash,
        actual: ContentHash,
    },

    /// IO error during file write
    #[error("io error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SerializeError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Combined augmentation error
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("environment error: {0}")]
    Environment(#[from] EnvironmentError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("{kind} anchor '{name}' not found")]
    AnchorNotFound { kind: AnchorKind, name: String },

    #[error("{kind} anchor '{name}' has an unexpected shape: {reason}")]
    AnchorShapeMismatch {
        kind: AnchorKind,
        name: String,
        reason: String,
    },

    #[error("serialize error: {0}")]
    Serialize(#[from] SerializeError),

    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("timed out after {waited:?} waiting for lock {path}")]
    LockTimeout { path: PathBuf, waited: Duration },
}

impl WiringError {
    /// Create IO error for path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create parse error for path
    pub fn parse(path: impl Into<PathBuf>, source: ParseError) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Check if the error was raised before the target file was touched
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            WiringError::Validation(_) | WiringError::Environment(_) | WiringError::Config(_)
        )
    }
}

/// Result type alias for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;
