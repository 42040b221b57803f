//! Manifest discovery.
//!
//! Walks the input directory for `*.dto.json` and `*.dto.toml` files,
//! respecting `.gitignore` patterns and an optional glob filter.

use crate::error::{CliResult, ScanError};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// File name suffixes recognized as descriptor manifests.
pub const MANIFEST_SUFFIXES: &[&str] = &[".dto.json", ".dto.toml"];

/// Whether a path names a descriptor manifest.
pub fn is_manifest_path(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| MANIFEST_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)))
}

/// Scanner for discovering descriptor manifests.
#[derive(Debug)]
pub struct ManifestScanner {
    /// Manifest file or directory to scan.
    root: PathBuf,

    /// Whether to respect .gitignore files.
    respect_gitignore: bool,

    /// Optional glob filter pattern.
    filter: Option<glob::Pattern>,
}

impl ManifestScanner {
    /// Create a new scanner for the given input path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            respect_gitignore: true,
            filter: None,
        }
    }

    /// Set whether to respect .gitignore files.
    pub fn with_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = respect;
        self
    }

    /// Set a glob filter pattern, matched against paths relative to the root.
    pub fn with_filter(mut self, pattern: &str) -> Result<Self, ScanError> {
        let glob_pattern = glob::Pattern::new(pattern)
            .map_err(|e| ScanError::invalid_pattern(pattern, e.to_string()))?;
        self.filter = Some(glob_pattern);
        Ok(self)
    }

    /// Return manifest paths in a stable, name-sorted order.
    ///
    /// A file root is returned as is, whatever its name. An empty directory
    /// yields an empty list.
    pub fn scan(&self) -> CliResult<Vec<PathBuf>> {
        if !self.root.exists() {
            return Err(ScanError::not_found(self.root.clone()).into());
        }

        if self.root.is_file() {
            return Ok(vec![self.root.clone()]);
        }

        let walker = WalkBuilder::new(&self.root)
            .git_ignore(self.respect_gitignore)
            .git_global(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .hidden(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut manifests = Vec::new();
        for entry in walker {
            let entry = entry.map_err(ScanError::Walk)?;
            let path = entry.path();

            if !path.is_file() || !is_manifest_path(path) {
                continue;
            }

            if let Some(ref pattern) = self.filter {
                if !pattern.matches_path(self.relative_path(path)) {
                    continue;
                }
            }

            manifests.push(path.to_path_buf());
        }

        if manifests.is_empty() {
            tracing::warn!(root = %self.root.display(), "No DTO manifests found");
        } else {
            tracing::debug!(root = %self.root.display(), count = manifests.len(), "Found manifests");
        }

        Ok(manifests)
    }

    fn relative_path<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    /// Get the scan root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
