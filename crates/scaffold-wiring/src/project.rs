//! Project layout detection
//!
//! Augmentation only runs inside a scaffolded Go project: a `go.mod` with a
//! `module` directive (which prefixes every module import path) and the
//! modules directory.

use crate::config::WiringConfig;
use crate::error::{EnvironmentError, WiringError, WiringResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A recognized project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    go_module: String,
}

impl ProjectLayout {
    /// Detect the project rooted at `root`
    ///
    /// # Errors
    /// - `EnvironmentError::MissingGoMod` if there is no `go.mod`
    /// - `EnvironmentError::MissingModuleDirective` if `go.mod` names no module
    /// - `EnvironmentError::MissingModulesDir` if the modules directory is absent
    /// - `WiringError::Io` if `go.mod` exists but cannot be read
    pub fn detect(root: impl AsRef<Path>, config: &WiringConfig) -> WiringResult<Self> {
        let root = root.as_ref();
        let go_mod = root.join("go.mod");

        let manifest = match std::fs::read_to_string(&go_mod) {
            Ok(manifest) => manifest,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(EnvironmentError::MissingGoMod(root.to_path_buf()).into())
            }
            Err(e) => return Err(WiringError::io(go_mod, e)),
        };

        let go_module = module_directive(&manifest)
            .ok_or_else(|| EnvironmentError::MissingModuleDirective(go_mod.clone()))?;

        let modules_dir = root.join(&config.modules_dir);
        if !modules_dir.is_dir() {
            return Err(EnvironmentError::MissingModulesDir(modules_dir).into());
        }

        tracing::debug!(root = %root.display(), go_module = %go_module, "detected project layout");

        Ok(Self {
            root: root.to_path_buf(),
            go_module,
        })
    }

    /// Project root
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Go module path from `go.mod`
    #[inline]
    #[must_use]
    pub fn go_module(&self) -> &str {
        &self.go_module
    }

    /// Absolute location of the container file
    #[inline]
    #[must_use]
    pub fn container_path(&self, config: &WiringConfig) -> PathBuf {
        self.root.join(&config.container_path)
    }
}

/// Module path from a go.mod `module` directive
fn module_directive(manifest: &str) -> Option<String> {
    manifest.lines().find_map(|line| {
        let line = line.split("//").next().unwrap_or_default().trim();
        let rest = line.strip_prefix("module")?;
        if !rest.starts_with([' ', '\t']) {
            return None;
        }
        let path = rest.trim().trim_matches('"');
        (!path.is_empty()).then(|| path.to_string())
    })
}
