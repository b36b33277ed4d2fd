//! Per-package context shared by every entity and doc comment of a package.

use super::location::Repo;
use super::symbol::SymbolTable;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Default host for doc links that leave the package.
pub const DEFAULT_DOC_HOST: &str = "https://pkg.go.dev/";

/// Contextual information used to resolve documentation for a construct.
///
/// Cloning is cheap: the repository, symbol table and import map are shared
/// and never mutated once the package has been assembled.
#[derive(Debug, Clone)]
pub struct Config {
    pub level: usize,
    pub repo: Option<Arc<Repo>>,
    pub pkg_dir: PathBuf,
    pub work_dir: PathBuf,
    pub doc_host: String,
    pub symbols: Arc<SymbolTable>,
    /// Package name to import path for packages referenced by doc links.
    pub imports: Arc<BTreeMap<String, String>>,
}

impl Config {
    /// Create a level 1 configuration for the package at `pkg_dir`.
    pub fn new(pkg_dir: impl Into<PathBuf>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            level: 1,
            repo: None,
            pkg_dir: pkg_dir.into(),
            work_dir: work_dir.into(),
            doc_host: DEFAULT_DOC_HOST.to_string(),
            symbols: Arc::new(SymbolTable::default()),
            imports: Arc::new(BTreeMap::new()),
        }
    }

    pub fn with_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    pub fn with_repo(mut self, repo: Repo) -> Self {
        self.repo = Some(Arc::new(repo));
        self
    }

    pub fn with_doc_host(mut self, host: impl Into<String>) -> Self {
        self.doc_host = host.into();
        self
    }

    pub fn with_symbols(mut self, symbols: SymbolTable) -> Self {
        self.symbols = Arc::new(symbols);
        self
    }

    pub fn with_imports(mut self, imports: BTreeMap<String, String>) -> Self {
        self.imports = Arc::new(imports);
        self
    }

    /// Copy of this configuration with the level raised by `step`.
    pub fn inc(&self, step: usize) -> Self {
        let mut next = self.clone();
        next.level += step;
        next
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }
}
