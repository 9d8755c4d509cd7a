//! Wiring augmentation
//!
//! Registers a module in the container file: its import, its container
//! field, its constructor initializer and its route registration. All four
//! anchors are located against the unmodified source before anything is
//! mutated, and the file is only rewritten when at least one entry was
//! inserted.

use crate::config::{MissingAnchorPolicy, WiringConfig};
use crate::delta::{MutationOutcome, Splice};
use crate::error::{WiringError, WiringResult};
use crate::lock::PathLock;
use crate::mutator::{Mutation, Mutator};
use crate::names::ModuleNames;
use crate::project::ProjectLayout;
use crate::serializer::{render, write_atomic};
use scaffold_source::{AnchorKind, GoSource, Locator};
use std::path::{Path, PathBuf};

/// Outcome for one anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorOutcome {
    /// Anchor
    pub anchor: AnchorKind,
    /// Outcome
    pub outcome: MutationOutcome,
}

/// In-memory augmentation result
#[derive(Debug)]
pub struct Augmentation {
    /// Outcomes in anchor order: import, type, constructor, method
    pub outcomes: Vec<AnchorOutcome>,
    /// Augmented source, `None` if nothing was inserted
    pub output: Option<GoSource>,
}

/// Result of augmenting a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentReport {
    /// Module identifier
    pub module: String,
    /// Augmented file
    pub path: PathBuf,
    /// Outcomes in anchor order: import, type, constructor, method
    pub outcomes: Vec<AnchorOutcome>,
    /// Whether the file was rewritten
    pub written: bool,
}

impl AugmentReport {
    /// Outcome for `anchor`
    #[must_use]
    pub fn outcome(&self, anchor: AnchorKind) -> Option<&MutationOutcome> {
        self.outcomes
            .iter()
            .find(|o| o.anchor == anchor)
            .map(|o| &o.outcome)
    }

    /// Check if every anchor already held the module
    #[must_use]
    pub fn already_wired(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| o.outcome == MutationOutcome::AlreadyPresent)
    }
}

/// Container file augmenter
#[derive(Debug, Clone, Default)]
pub struct Augmenter {
    config: WiringConfig,
}

impl Augmenter {
    /// Create augmenter with configuration
    #[inline]
    #[must_use]
    pub fn new(config: WiringConfig) -> Self {
        Self { config }
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &WiringConfig {
        &self.config
    }

    /// Register module `name` in the container of `layout`
    ///
    /// # Errors
    /// - `WiringError::Validation` for a malformed module identifier
    /// - any error of [`Augmenter::augment_file`]
    pub fn augment(&self, layout: &ProjectLayout, name: &str) -> WiringResult<AugmentReport> {
        let names = ModuleNames::new(name)?;
        let import_path = names.import_path(layout.go_module(), &self.config.modules_dir);
        self.augment_file(&layout.container_path(&self.config), &names, &import_path)
    }

    /// Register a module in the container file at `path`
    ///
    /// Holds the path lock from load to write.
    ///
    /// # Errors
    /// - `WiringError::LockTimeout` if the file stays locked
    /// - `WiringError::Io` if the file cannot be read
    /// - `WiringError::Parse` if the file is not valid Go
    /// - `WiringError::AnchorNotFound` / `AnchorShapeMismatch` under the
    ///   `Fail` policy
    /// - `WiringError::Serialize` if the output is invalid or cannot be written
    pub fn augment_file(
        &self,
        path: &Path,
        names: &ModuleNames,
        import_path: &str,
    ) -> WiringResult<AugmentReport> {
        let _lock = PathLock::acquire(path, self.config.lock_timeout())?;

        let text = std::fs::read_to_string(path).map_err(|e| WiringError::io(path, e))?;
        let source = GoSource::parse(text).map_err(|e| WiringError::parse(path, e))?;

        let augmentation = self.augment_source(&source, names, import_path)?;
        let written = match &augmentation.output {
            Some(output) => {
                write_atomic(path, output.text(), source.hash())?;
                true
            }
            None => false,
        };

        tracing::info!(
            module = %names.package(),
            path = %path.display(),
            written,
            "augmented container"
        );

        Ok(AugmentReport {
            module: names.package().to_string(),
            path: path.to_path_buf(),
            outcomes: augmentation.outcomes,
            written,
        })
    }

    /// Register a module in `source` without touching the filesystem
    ///
    /// # Errors
    /// - `WiringError::AnchorNotFound` / `AnchorShapeMismatch` under the
    ///   `Fail` policy
    /// - `WiringError::Serialize` if the output is invalid
    pub fn augment_source(
        &self,
        source: &GoSource,
        names: &ModuleNames,
        import_path: &str,
    ) -> WiringResult<Augmentation> {
        let config = &self.config;
        let locator = Locator::new(source);
        let imports = locator.imports();
        let fields = locator.struct_type(&config.container_type);
        let literal = locator.constructor_literal(&config.constructor);
        let method = locator.method_body(&config.container_type, &config.registration_method);

        let field = names.field_name();
        let mutator = Mutator::new(source, config.align_entries);
        let mutations = [
            mutator.add_import(&imports, import_path),
            mutator.add_field(&fields, &field, &names.module_type()),
            mutator.add_initializer(
                &literal,
                &field,
                &names.constructor_call(&config.database_handle),
            ),
            mutator.add_registration(&method, &field, |receiver| {
                names.registration_call(receiver, &config.registration_method, &config.route_group)
            }),
        ];

        for mutation in &mutations {
            tracing::debug!(
                module = %names.package(),
                anchor = %mutation.anchor,
                outcome = %mutation.outcome,
                "anchor mutation"
            );
            if mutation.outcome.is_unresolved() {
                self.check_policy(mutation, names)?;
            }
        }

        let splices: Vec<&Splice> = mutations
            .iter()
            .filter_map(|m| m.delta.as_ref().map(|d| &d.splice))
            .collect();
        let output = if splices.is_empty() {
            None
        } else {
            Some(render(source, &splices)?)
        };

        Ok(Augmentation {
            outcomes: mutations
                .into_iter()
                .map(|m| AnchorOutcome {
                    anchor: m.anchor,
                    outcome: m.outcome,
                })
                .collect(),
            output,
        })
    }

    /// Apply the missing-anchor policy to an unresolved mutation
    fn check_policy(&self, mutation: &Mutation, names: &ModuleNames) -> WiringResult<()> {
        let name = self.anchor_name(mutation.anchor).to_string();
        match (self.config.missing_anchor_policy, &mutation.outcome) {
            (MissingAnchorPolicy::Skip, outcome) => {
                tracing::warn!(
                    module = %names.package(),
                    anchor = %mutation.anchor,
                    name = %name,
                    %outcome,
                    "skipping unresolved anchor"
                );
                Ok(())
            }
            (MissingAnchorPolicy::Fail, MutationOutcome::ShapeMismatch(reason)) => {
                Err(WiringError::AnchorShapeMismatch {
                    kind: mutation.anchor,
                    name,
                    reason: reason.clone(),
                })
            }
            (MissingAnchorPolicy::Fail, _) => Err(WiringError::AnchorNotFound {
                kind: mutation.anchor,
                name,
            }),
        }
    }

    /// Declaration name configured for `anchor`
    fn anchor_name(&self, anchor: AnchorKind) -> &str {
        match anchor {
            AnchorKind::Import => "import",
            AnchorKind::Type => &self.config.container_type,
            AnchorKind::Constructor => &self.config.constructor,
            AnchorKind::Method => &self.config.registration_method,
        }
    }
}
