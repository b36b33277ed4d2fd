//! Constant and variable declarations.

use super::config::Config;
use super::doc::Doc;
use super::error::LangError;
use super::location::Location;
use super::source::ValueSource;
use super::text::{extract_summary, print_source};

/// A const or var declaration, which may declare a whole group of names.
#[derive(Debug, Clone)]
pub struct Value {
    cfg: Config,
    src: ValueSource,
}

impl Value {
    pub fn new(cfg: Config, src: ValueSource) -> Self {
        Self { cfg, src }
    }

    pub fn level(&self) -> usize {
        self.cfg.level
    }

    pub fn names(&self) -> &[String] {
        &self.src.names
    }

    /// Anchor shared by every name in the group: the first name.
    pub fn anchor(&self) -> &str {
        self.src.names.first().map_or("", String::as_str)
    }

    pub fn summary(&self) -> String {
        extract_summary(&self.src.doc)
    }

    pub fn doc(&self) -> Doc {
        Doc::new(&self.cfg.inc(1), &self.src.doc)
    }

    pub fn decl(&self) -> Result<String, LangError> {
        print_source("declaration", &self.src.decl)
    }

    pub fn location(&self) -> Location {
        super::location_of(&self.cfg, &self.src.location)
    }
}
