//! File store seam.
//!
//! Generators plan files; the [`Writer`] puts them on a [`FileStore`].
//! [`DiskStore`] is the real thing, [`MemoryStore`] keeps everything in a
//! map so planning and writing stay testable without touching a disk.
//!
//! The writer never overwrites: an existing target is recorded as a skip
//! and the rest of the batch proceeds. A failed write is recorded the same
//! way, so one bad file cannot abort a resource bundle halfway through.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use laragen_core::GeneratorError;

use crate::{GeneratedFile, GenerationReport, WriteOutcome};

// ============================================================================
// FileStore
// ============================================================================

/// Minimal file system surface needed by the writer.
pub trait FileStore {
    /// Whether a path already exists
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all its ancestors
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Write a file, replacing any previous content
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// Store backed by the real file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStore;

impl FileStore for DiskStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RefCell<HashMap<PathBuf, String>>,
    dirs: RefCell<HashSet<PathBuf>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, e.g. to simulate an existing target
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.borrow_mut().insert(path.into(), content.into());
    }

    /// Content of a stored file
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    /// Number of stored files
    pub fn file_count(&self) -> usize {
        self.files.borrow().len()
    }

    /// Whether a directory was created
    pub fn has_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }
}

impl FileStore for MemoryStore {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut dirs = self.dirs.borrow_mut();
        let mut current = Some(path);
        while let Some(dir) = current {
            dirs.insert(dir.to_path_buf());
            current = dir.parent().filter(|p| !p.as_os_str().is_empty());
        }
        Ok(())
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

// ============================================================================
// Writer
// ============================================================================

/// Writes planned files under an application root, recording one outcome
/// per file.
#[derive(Debug)]
pub struct Writer<'a, S: FileStore> {
    store: &'a S,
    app_dir: PathBuf,
    dry_run: bool,
}

impl<'a, S: FileStore> Writer<'a, S> {
    /// Create a writer rooted at `app_dir`.
    pub fn new(store: &'a S, app_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            app_dir: app_dir.into(),
            dry_run: false,
        }
    }

    /// Record what would be written without touching the store.
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Write every file, continuing past skips and failures.
    pub fn write_all(&self, files: &[GeneratedFile], report: &mut GenerationReport) {
        for file in files {
            self.write_file(file, report);
        }
    }

    /// Write a single file.
    pub fn write_file(&self, file: &GeneratedFile, report: &mut GenerationReport) {
        let target = self.app_dir.join(&file.path);

        if self.dry_run {
            report.record(WriteOutcome::Planned(target));
            return;
        }

        if self.store.exists(&target) {
            tracing::warn!(path = %target.display(), "target already exists, skipping");
            report.record(WriteOutcome::SkippedExists(target));
            return;
        }

        if let Some(parent) = target.parent() {
            if let Err(err) = self.store.create_dir_all(parent) {
                let failure = GeneratorError::directory_create(parent, err.to_string());
                tracing::error!(%failure, "directory creation failed");
                report.record(WriteOutcome::Failed {
                    path: target,
                    message: failure.to_string(),
                });
                return;
            }
        }

        match self.store.write(&target, &file.content) {
            Ok(()) => {
                tracing::info!(path = %target.display(), "file written");
                report.record(WriteOutcome::Written(target));
            }
            Err(err) => {
                let failure = GeneratorError::file_write(&target, err.to_string());
                tracing::error!(%failure, "write failed");
                report.record(WriteOutcome::Failed {
                    path: target,
                    message: err.to_string(),
                });
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
