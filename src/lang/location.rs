//! Source positions and the repository they can be linked into.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A line and column within a file, both 1-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Repository information used to build browsable source links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    /// Browsable remote, e.g. `https://github.com/org/project`.
    pub remote: String,
    pub default_branch: String,
    /// Path of the working directory relative to the repository root.
    pub path_from_root: String,
}

impl Repo {
    pub fn new(
        remote: impl Into<String>,
        default_branch: impl Into<String>,
        path_from_root: impl Into<String>,
    ) -> Self {
        Self {
            remote: remote.into(),
            default_branch: default_branch.into(),
            path_from_root: path_from_root.into(),
        }
    }
}

/// Where a declaration lives, plus the repository context needed to link to it.
///
/// The repository is shared with the package configuration and is only read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub start: Position,
    pub end: Position,
    pub filepath: String,
    pub work_dir: String,
    pub repo: Option<Arc<Repo>>,
}

impl Location {
    pub fn new(
        start: Position,
        end: Position,
        filepath: impl Into<String>,
        work_dir: impl Into<String>,
        repo: Option<Arc<Repo>>,
    ) -> Self {
        Self {
            start,
            end,
            filepath: filepath.into(),
            work_dir: work_dir.into(),
            repo,
        }
    }
}
