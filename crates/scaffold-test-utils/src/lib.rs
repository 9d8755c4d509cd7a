//! Testing utilities for the scaffold workspace
//!
//! Container fixtures, temporary project sandboxes and tracing setup.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Go module path of every fixture project
pub const GO_MODULE: &str = "app";

/// Container path relative to the project root
pub const CONTAINER_PATH: &str = "internal/infrastructure/container/container.go";

/// Container as generated for a new project
pub const CONTAINER_TEMPLATE: &str = r#"package container

import (
	"database/sql"

	"app/internal/modules/health"
	"github.com/gin-gonic/gin"
)

type Container struct {
	DB           *sql.DB
	HealthModule *health.HealthModule
}

func NewContainer(db *sql.DB) *Container {
	return &Container{
		DB:           db,
		HealthModule: health.NewHealthModule(),
	}
}

func (c *Container) RegisterRoutes(r *gin.Engine) {
	api := r.Group("/api/v1")
	c.HealthModule.RegisterRoutes(api)
}
"#;

/// Container with empty import list, initializer and registration body
pub const EMPTY_CONTAINER: &str = r#"package container

import ()

type Container struct {
	DB *sql.DB
}

func NewContainer(db *sql.DB) *Container {
	return &Container{}
}

func (c *Container) RegisterRoutes(api *gin.RouterGroup) {
}
"#;

/// Temporary scaffolded project: `go.mod`, modules directory and container
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Project whose container holds [`CONTAINER_TEMPLATE`]
    pub fn new() -> Self {
        Self::with_container(CONTAINER_TEMPLATE)
    }

    /// Project whose container holds `container`
    pub fn with_container(container: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("go.mod"), format!("module {GO_MODULE}\n\ngo 1.22\n"))
            .unwrap();
        std::fs::create_dir_all(dir.path().join("internal/modules/health")).unwrap();

        let project = Self { dir };
        std::fs::create_dir_all(project.container_path().parent().unwrap()).unwrap();
        project.write_container(container);
        project
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn container_path(&self) -> PathBuf {
        self.dir.path().join(CONTAINER_PATH)
    }

    pub fn read_container(&self) -> String {
        std::fs::read_to_string(self.container_path()).unwrap()
    }

    pub fn write_container(&self, text: &str) {
        std::fs::write(self.container_path(), text).unwrap();
    }

    /// Modification time of the container file
    pub fn container_mtime(&self) -> std::time::SystemTime {
        std::fs::metadata(self.container_path())
            .unwrap()
            .modified()
            .unwrap()
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Route test logs through the test harness; `RUST_LOG` filters them
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Number of occurrences of `needle` in `haystack`
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
