//! # Laragen Codegen
//!
//! Code generation engine for Laragen.
//!
//! This crate renders resolved plans from `laragen_schema` into PHP source
//! files and writes them into a Laravel application tree.
//!
//! ## Features
//!
//! - **Migration Generation**: `up`/`down` schema classes from a [`MigrationPlan`]
//! - **Controller Generation**: Controller classes with method stubs
//! - **Model Generation**: Eloquent model skeletons
//! - **View Generation**: Blade templates from dotted view paths
//! - **Asset Generation**: css/js starter files routed by extension
//! - **Formatter**: Idempotent whitespace cleanup for PHP sources
//! - **Store**: A file-store seam so generation is testable without a disk
//!
//! [`MigrationPlan`]: laragen_schema::MigrationPlan

// ============================================================================
// Modules
// ============================================================================

pub mod asset;
pub mod controller;
pub mod formatter;
pub mod migration;
pub mod model;
pub mod resource;
pub mod store;
pub mod view;

// ============================================================================
// Re-exports
// ============================================================================

pub use asset::{AssetBatch, generate_assets};
pub use controller::generate_controller;
pub use formatter::format_source;
pub use migration::generate_migration;
pub use model::generate_model;
pub use resource::generate_resource;
pub use store::{DiskStore, FileStore, MemoryStore, Writer};
pub use view::{generate_view, generate_views};

use std::path::{Path, PathBuf};

use laragen_core::PathsConfig;
use serde::Serialize;

// ============================================================================
// ScaffoldContext
// ============================================================================

/// Context shared by every generator: the target path layout plus the
/// timestamp stamped onto migration file names.
///
/// Built once per invocation so that a batch of migrations shares one
/// timestamp.
#[derive(Debug, Clone)]
pub struct ScaffoldContext {
    /// Where each kind of file lands
    pub paths: PathsConfig,

    /// Application root the planned paths resolve against
    pub root: PathBuf,

    /// Migration filename prefix, `YYYY_MM_DD_HHMMSS`
    timestamp: String,
}

impl ScaffoldContext {
    /// Create a context stamped with the current local time.
    pub fn new(paths: PathsConfig) -> Self {
        let timestamp = chrono::Local::now().format("%Y_%m_%d_%H%M%S").to_string();
        Self {
            paths,
            root: PathBuf::from("."),
            timestamp,
        }
    }

    /// Set the application root the planned files will land under.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Override the timestamp (used by tests for stable file names).
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Where a planned relative path lands once the root is applied.
    ///
    /// The default root `.` leaves the path untouched.
    pub fn target(&self, relative: impl AsRef<Path>) -> PathBuf {
        if self.root == Path::new(".") {
            relative.as_ref().to_path_buf()
        } else {
            self.root.join(relative)
        }
    }

    /// The migration filename prefix.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Full migration file name for a file stem,
    /// e.g. `2026_08_23_101500_create_users_table.php`.
    pub fn migration_filename(&self, stem: &str) -> String {
        format!("{}_{}.{}", self.timestamp, stem, self.paths.extension)
    }
}

impl Default for ScaffoldContext {
    fn default() -> Self {
        Self::new(PathsConfig::default())
    }
}

// ============================================================================
// GeneratedFile
// ============================================================================

/// Represents a single generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the application root
    pub path: PathBuf,

    /// File content
    pub content: String,

    /// File kind for categorization
    pub kind: FileKind,
}

impl GeneratedFile {
    /// Create a new generated file
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>, kind: FileKind) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            kind,
        }
    }

    /// Create a PHP source file
    pub fn php(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileKind::Php)
    }

    /// Create a Blade template
    pub fn blade(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileKind::Blade)
    }

    /// Create a stylesheet
    pub fn css(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileKind::Css)
    }

    /// Create a script file
    pub fn js(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileKind::Js)
    }

    /// Get the canonical file extension for this kind
    pub fn extension(&self) -> &str {
        self.kind.extension()
    }
}

/// Kind of generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Php,
    Blade,
    Css,
    Js,
}

impl FileKind {
    /// Get the canonical file extension for this kind
    pub fn extension(&self) -> &str {
        match self {
            FileKind::Php => "php",
            FileKind::Blade => "blade.php",
            FileKind::Css => "css",
            FileKind::Js => "js",
        }
    }
}

// ============================================================================
// GenerationReport
// ============================================================================

/// What happened to one planned file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteOutcome {
    /// File written to disk
    Written(PathBuf),

    /// Dry run: the file would have been written
    Planned(PathBuf),

    /// Skipped because the target already exists
    SkippedExists(PathBuf),

    /// Write attempted and failed
    Failed { path: PathBuf, message: String },
}

impl WriteOutcome {
    /// The path this outcome refers to
    pub fn path(&self) -> &Path {
        match self {
            WriteOutcome::Written(path)
            | WriteOutcome::Planned(path)
            | WriteOutcome::SkippedExists(path) => path,
            WriteOutcome::Failed { path, .. } => path,
        }
    }
}

/// Collected results of one generator invocation
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    /// Per-file outcomes, in write order
    pub outcomes: Vec<WriteOutcome>,

    /// Warnings raised during planning (e.g. skipped asset arguments)
    pub warnings: Vec<String>,
}

impl GenerationReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for one file
    pub fn record(&mut self, outcome: WriteOutcome) {
        self.outcomes.push(outcome);
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Number of files actually written
    pub fn written_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, WriteOutcome::Written(_)))
            .count()
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if any write failed
    pub fn has_failures(&self) -> bool {
        self.outcomes
            .iter()
            .any(|o| matches!(o, WriteOutcome::Failed { .. }))
    }

    /// Check if any file was skipped because it already existed
    pub fn has_skips(&self) -> bool {
        self.outcomes
            .iter()
            .any(|o| matches!(o, WriteOutcome::SkippedExists(_)))
    }
}

// ============================================================================
// Path hygiene
// ============================================================================

/// Drop empty segments from a raw path argument.
///
/// Leading, trailing, and doubled separators disappear, so the result is
/// always relative and can never re-root a `join`.
pub(crate) fn relative_path(raw: &str) -> String {
    raw.split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_file_constructors() {
        let file = GeneratedFile::php("application/models/user.php", "<?php\n");
        assert_eq!(file.kind, FileKind::Php);
        assert_eq!(file.extension(), "php");

        let file = GeneratedFile::blade("application/views/home/index.blade.php", "");
        assert_eq!(file.extension(), "blade.php");
    }

    #[test]
    fn test_scaffold_context_migration_filename() {
        let ctx = ScaffoldContext::default().with_timestamp("2026_08_23_101500");
        assert_eq!(
            ctx.migration_filename("create_users_table"),
            "2026_08_23_101500_create_users_table.php"
        );
    }

    #[test]
    fn test_fresh_context_timestamp_shape() {
        let ctx = ScaffoldContext::default();
        // YYYY_MM_DD_HHMMSS
        assert_eq!(ctx.timestamp().len(), 17);
        assert_eq!(ctx.timestamp().matches('_').count(), 3);
    }

    #[test]
    fn test_target_applies_the_root() {
        let ctx = ScaffoldContext::default();
        assert_eq!(
            ctx.target("application/views/book"),
            PathBuf::from("application/views/book")
        );

        let ctx = ScaffoldContext::default().with_root("/srv/app");
        assert_eq!(
            ctx.target("application/views/book"),
            PathBuf::from("/srv/app/application/views/book")
        );
    }

    #[test]
    fn test_relative_path_drops_empty_segments() {
        assert_eq!(relative_path("/admin/show"), "admin/show");
        assert_eq!(relative_path("admin//show/"), "admin/show");
        assert_eq!(relative_path("style.css"), "style.css");
    }

    #[test]
    fn test_report_counters() {
        let mut report = GenerationReport::new();
        report.record(WriteOutcome::Written(PathBuf::from("a.php")));
        report.record(WriteOutcome::SkippedExists(PathBuf::from("b.php")));
        report.record(WriteOutcome::Failed {
            path: PathBuf::from("c.php"),
            message: "disk full".to_string(),
        });

        assert_eq!(report.written_count(), 1);
        assert!(report.has_failures());
        assert!(report.has_skips());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_outcome_path() {
        let outcome = WriteOutcome::Failed {
            path: PathBuf::from("c.php"),
            message: "denied".to_string(),
        };
        assert_eq!(outcome.path(), Path::new("c.php"));
    }
}
