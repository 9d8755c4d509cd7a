//! Augmentation configuration
//!
//! Names of the wiring declarations and the conventions of the generated
//! project. Defaults match the layout produced by the project templates.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// What to do when the type, constructor or method anchor is missing or
/// misshapen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingAnchorPolicy {
    /// Abort augmentation; nothing is written
    #[default]
    Fail,
    /// Report the anchor and apply the remaining insertions
    Skip,
}

/// Wiring augmentation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WiringConfig {
    /// Container file, relative to the project root
    pub container_path: PathBuf,
    /// Modules directory, relative to the project root (slash-separated)
    pub modules_dir: String,
    /// Container struct name
    pub container_type: String,
    /// Container constructor function
    pub constructor: String,
    /// Method registering module routes
    pub registration_method: String,
    /// Identifier passed to module constructors
    pub database_handle: String,
    /// Identifier passed to module route registration
    pub route_group: String,
    /// Policy for missing or misshapen anchors
    pub missing_anchor_policy: MissingAnchorPolicy,
    /// Lock acquisition timeout in milliseconds
    pub lock_timeout_ms: u64,
    /// Align fields and keyed elements the way gofmt does
    pub align_entries: bool,
}

impl WiringConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML; missing keys take their defaults
    ///
    /// # Errors
    /// Returns `ConfigError::Toml` on malformed input
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// - `ConfigError::Io` if the file cannot be read
    /// - `ConfigError::Toml` on malformed input
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// With missing-anchor policy
    #[inline]
    #[must_use]
    pub fn with_policy(mut self, policy: MissingAnchorPolicy) -> Self {
        self.missing_anchor_policy = policy;
        self
    }

    /// With lock timeout
    #[inline]
    #[must_use]
    pub fn with_lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// With container file path
    #[inline]
    #[must_use]
    pub fn with_container_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.container_path = path.into();
        self
    }

    /// With entry alignment on or off
    #[inline]
    #[must_use]
    pub fn with_alignment(mut self, align: bool) -> Self {
        self.align_entries = align;
        self
    }

    /// Lock acquisition timeout
    #[inline]
    #[must_use]
    pub fn lock_timeout(&self) -> Duration {
        Duration::from_millis(self.lock_timeout_ms)
    }
}

impl Default for WiringConfig {
    fn default() -> Self {
        Self {
            container_path: PathBuf::from("internal/infrastructure/container/container.go"),
            modules_dir: "internal/modules".to_string(),
            container_type: "Container".to_string(),
            constructor: "NewContainer".to_string(),
            registration_method: "RegisterRoutes".to_string(),
            database_handle: "db".to_string(),
            route_group: "api".to_string(),
            missing_anchor_policy: MissingAnchorPolicy::Fail,
            lock_timeout_ms: 5_000,
            align_entries: true,
        }
    }
}
