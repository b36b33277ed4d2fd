//! Layered configuration for the docmark command line.
//!
//! `defaults/docmark.default.toml` is embedded into the binary so the
//! documented defaults and runtime behavior stay in sync. User files and
//! command-line settings are layered on top through [`Loader`] before
//! deserializing into [`DocmarkConfig`].

use crate::lang::Repo;
use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_TOML: &str = include_str!("../defaults/docmark.default.toml");

/// Name of the configuration file picked up from the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".docmark.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] ::config::ConfigError),

    #[error("unable to read {what} from {path}: {source}")]
    Read {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DocmarkConfig {
    /// Dialect name, see [`FormatRegistry`](crate::format::FormatRegistry).
    pub format: String,
    pub header: String,
    pub header_file: String,
    pub footer: String,
    pub footer_file: String,
    pub doc_host: String,
    /// Inline template overrides by template name.
    #[serde(default)]
    pub template: BTreeMap<String, String>,
    /// Template override files by template name.
    #[serde(default)]
    pub template_file: BTreeMap<String, PathBuf>,
    pub repository: RepositoryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryConfig {
    pub url: String,
    pub default_branch: String,
    pub path: String,
}

impl DocmarkConfig {
    /// Text placed before the packages. Inline text wins over a file.
    pub fn header_text(&self) -> Result<String, ConfigError> {
        inline_or_file("header", &self.header, &self.header_file)
    }

    /// Text placed after the packages. Inline text wins over a file.
    pub fn footer_text(&self) -> Result<String, ConfigError> {
        inline_or_file("footer", &self.footer, &self.footer_file)
    }

    /// Repository used for source links, if a remote URL is configured.
    pub fn repo(&self) -> Option<Repo> {
        let repo = &self.repository;
        if repo.url.is_empty() {
            return None;
        }
        Some(Repo::new(
            repo.url.trim_end_matches('/'),
            &repo.default_branch,
            &repo.path,
        ))
    }
}

fn inline_or_file(what: &'static str, text: &str, path: &str) -> Result<String, ConfigError> {
    if !text.is_empty() || path.is_empty() {
        return Ok(text.to_string());
    }
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        what,
        path: PathBuf::from(path),
        source,
    })
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (command-line settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<DocmarkConfig, ConfigError> {
        Ok(self.builder.build()?.try_deserialize()?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DocmarkConfig, ConfigError> {
    Loader::new().build()
}
