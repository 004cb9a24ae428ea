//! Bounded-depth application bundle search.
//!
//! The locator walks the search root up to `max_depth` levels and collects
//! every entry whose file name equals the target bundle name exactly. A match
//! only counts when the walk itself completed without an I/O error and the
//! match is a directory.
//!
//! When several bundles match, the shallowest one wins; ties at the same
//! depth are broken by path order. Matched bundles are not descended into,
//! so helper apps nested inside a bundle never shadow it.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::AuditError;

/// Result of searching for an application bundle.
#[derive(Debug)]
pub enum LocateOutcome {
    /// A directory with exactly the target name was found.
    Found(PathBuf),
    /// The walk completed but no valid bundle matched.
    NotFound,
    /// The walk reported an I/O failure; presence cannot be confirmed.
    SearchFailed(AuditError),
}

impl LocateOutcome {
    /// The resolved bundle path, if found.
    pub fn path(&self) -> Option<&Path> {
        match self {
            LocateOutcome::Found(path) => Some(path),
            _ => None,
        }
    }
}

/// Searches a root directory for a named application bundle.
#[derive(Debug, Clone)]
pub struct BundleLocator {
    root: PathBuf,
    max_depth: usize,
}

impl BundleLocator {
    /// Create a locator for the given root and depth limit.
    pub fn new(root: impl Into<PathBuf>, max_depth: usize) -> Self {
        Self {
            root: root.into(),
            max_depth,
        }
    }

    /// The search root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The maximum traversal depth below the root.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Find the bundle named `app_name`.
    pub fn locate(&self, app_name: &str) -> LocateOutcome {
        if !self.root.is_dir() {
            return LocateOutcome::SearchFailed(AuditError::SearchFailed {
                root: self.root.clone(),
                message: "search root is not a directory".to_string(),
            });
        }

        let target = OsStr::new(app_name);
        let mut candidates: Vec<(usize, PathBuf)> = Vec::new();

        let mut walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(self.max_depth)
            .sort_by_file_name()
            .into_iter();

        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    return LocateOutcome::SearchFailed(AuditError::SearchFailed {
                        root: self.root.clone(),
                        message: e.to_string(),
                    });
                }
            };

            if entry.file_name() != target {
                continue;
            }

            tracing::debug!("Candidate match at {}", entry.path().display());
            if entry.file_type().is_dir() && entry.depth() < self.max_depth {
                walker.skip_current_dir();
            }
            candidates.push((entry.depth(), entry.into_path()));
        }

        candidates.sort();

        let found = candidates
            .into_iter()
            .map(|(_, path)| path)
            .find(|path| is_valid_bundle(path, target));

        match found {
            Some(path) => LocateOutcome::Found(std::path::absolute(&path).unwrap_or(path)),
            None => LocateOutcome::NotFound,
        }
    }
}

/// A bundle must be a directory whose own name equals the target.
fn is_valid_bundle(path: &Path, target: &OsStr) -> bool {
    if !path.is_dir() {
        tracing::debug!("Ignoring {}: not a directory", path.display());
        return false;
    }
    path.file_name() == Some(target)
}
