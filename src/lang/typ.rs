//! Type declarations together with their constructors, methods and values.

use super::config::Config;
use super::doc::Doc;
use super::error::LangError;
use super::example::{examples_for, Example};
use super::func::Func;
use super::location::Location;
use super::source::{ExampleSource, TypeSource};
use super::text::{extract_summary, print_source};
use super::value::Value;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Type {
    cfg: Config,
    src: TypeSource,
    examples: Arc<Vec<ExampleSource>>,
}

impl Type {
    pub fn new(cfg: Config, src: TypeSource, examples: Arc<Vec<ExampleSource>>) -> Self {
        Self { cfg, src, examples }
    }

    pub fn level(&self) -> usize {
        self.cfg.level
    }

    pub fn name(&self) -> &str {
        &self.src.name
    }

    pub fn title(&self) -> String {
        format!("type {}", self.src.name)
    }

    pub fn anchor(&self) -> &str {
        &self.src.name
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

    /// Examples named after the type itself, excluding those that belong to
    /// one of its methods.
    pub fn examples(&self) -> Vec<Example> {
        examples_for(&self.cfg, &self.src.name, &self.examples, |name| {
            self.is_method_example(name)
        })
    }

    fn is_method_example(&self, example: &str) -> bool {
        self.src.methods.iter().any(|m| {
            let full = format!("{}_{}", self.src.name, m.name);
            example == full || example.starts_with(&format!("{}_", full))
        })
    }

    /// Package-level funcs associated with the type, such as constructors.
    pub fn funcs(&self) -> Vec<Func> {
        self.src
            .funcs
            .iter()
            .map(|f| Func::new(self.cfg.inc(1), f.clone(), Arc::clone(&self.examples)))
            .collect()
    }

    pub fn methods(&self) -> Vec<Func> {
        self.src
            .methods
            .iter()
            .map(|f| Func::new(self.cfg.inc(1), f.clone(), Arc::clone(&self.examples)))
            .collect()
    }

    pub fn consts(&self) -> Vec<Value> {
        self.values(&self.src.consts)
    }

    pub fn vars(&self) -> Vec<Value> {
        self.values(&self.src.vars)
    }

    fn values(&self, values: &[super::source::ValueSource]) -> Vec<Value> {
        values
            .iter()
            .map(|v| Value::new(self.cfg.inc(1), v.clone()))
            .collect()
    }
}
