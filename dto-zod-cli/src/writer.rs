//! Output directory sink.
//!
//! [`DirectorySink`] stores generated schemas under an output directory.
//! Besides writing, it can run as a dry run (nothing touches the disk) or
//! as a staleness check against files already on disk.

use crate::error::WriteError;
use dto_zod::SchemaSink;
use std::path::{Path, PathBuf};

/// What the sink does with each generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write files to disk.
    #[default]
    Write,

    /// Record content without writing.
    DryRun,

    /// Compare content with existing files.
    Check,
}

/// Why a checked file does not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaleReason {
    /// No file exists at the path.
    Missing,

    /// The file exists with different content.
    Outdated,
}

/// Result of a write operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written successfully.
    Written {
        /// Path to the written file.
        path: PathBuf,
        /// Number of bytes written.
        bytes: usize,
    },
    /// Dry run - content was not written.
    DryRun {
        /// Content that would have been written.
        content: String,
        /// Path where content would have been written.
        path: PathBuf,
    },
    /// Check - file on disk matches.
    Unchanged {
        /// Path of the checked file.
        path: PathBuf,
    },
    /// Check - file on disk is missing or differs.
    Stale {
        /// Path of the checked file.
        path: PathBuf,
        /// How it differs.
        reason: StaleReason,
    },
}

impl WriteResult {
    /// Get the path associated with this result.
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path, .. }
            | WriteResult::DryRun { path, .. }
            | WriteResult::Unchanged { path }
            | WriteResult::Stale { path, .. } => path,
        }
    }

    /// Check if the file was actually written.
    pub fn was_written(&self) -> bool {
        matches!(self, WriteResult::Written { .. })
    }

    /// Check if a staleness check failed for this file.
    pub fn is_stale(&self) -> bool {
        matches!(self, WriteResult::Stale { .. })
    }

    /// Get the number of bytes written (0 unless written).
    pub fn bytes(&self) -> usize {
        match self {
            WriteResult::Written { bytes, .. } => *bytes,
            _ => 0,
        }
    }
}

/// Create the output directory when files are going to be written.
///
/// Dry runs and checks never create anything.
pub fn prepare_output_dir(dir: &Path, mode: WriteMode) -> Result<(), WriteError> {
    if mode != WriteMode::Write || dir.is_dir() {
        return Ok(());
    }

    std::fs::create_dir_all(dir).map_err(|e| WriteError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(dir = %dir.display(), "Created output directory");
    Ok(())
}

/// Sink that stores schema files under a directory.
#[derive(Debug)]
pub struct DirectorySink {
    output_dir: PathBuf,
    mode: WriteMode,
    results: Vec<WriteResult>,
}

impl DirectorySink {
    /// Create a sink rooted at `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>, mode: WriteMode) -> Self {
        Self {
            output_dir: output_dir.into(),
            mode,
            results: Vec::new(),
        }
    }

    /// The sink's mode.
    pub fn mode(&self) -> WriteMode {
        self.mode
    }

    /// The output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Results in write order.
    pub fn results(&self) -> &[WriteResult] {
        &self.results
    }

    /// Consume the sink, returning its results.
    pub fn into_results(self) -> Vec<WriteResult> {
        self.results
    }

    /// Results of files found stale by a check.
    pub fn stale(&self) -> impl Iterator<Item = &WriteResult> {
        self.results.iter().filter(|r| r.is_stale())
    }

    /// Store one file relative to the output directory.
    pub fn write_file(&mut self, file_name: &str, content: &str) -> Result<&WriteResult, WriteError> {
        let path = self.output_dir.join(file_name);

        let result = match self.mode {
            WriteMode::Write => write_to_disk(path, content)?,
            WriteMode::DryRun => WriteResult::DryRun {
                content: content.to_string(),
                path,
            },
            WriteMode::Check => check_against_disk(path, content)?,
        };

        tracing::debug!(path = %result.path().display(), mode = ?self.mode, "Stored schema");
        self.results.push(result);

        Ok(&self.results[self.results.len() - 1])
    }
}

impl SchemaSink for DirectorySink {
    type Error = WriteError;

    fn write(&mut self, file_name: &str, content: &str) -> Result<(), Self::Error> {
        self.write_file(file_name, content).map(|_| ())
    }
}

fn write_to_disk(path: PathBuf, content: &str) -> Result<WriteResult, WriteError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| WriteError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    std::fs::write(&path, content).map_err(|e| WriteError::WriteFile {
        path: path.clone(),
        source: e,
    })?;

    Ok(WriteResult::Written {
        path,
        bytes: content.len(),
    })
}

fn check_against_disk(path: PathBuf, content: &str) -> Result<WriteResult, WriteError> {
    if !path.exists() {
        return Ok(WriteResult::Stale {
            path,
            reason: StaleReason::Missing,
        });
    }

    let existing = std::fs::read_to_string(&path).map_err(|e| WriteError::ReadFile {
        path: path.clone(),
        source: e,
    })?;

    if existing == content {
        Ok(WriteResult::Unchanged { path })
    } else {
        Ok(WriteResult::Stale {
            path,
            reason: StaleReason::Outdated,
        })
    }
}
