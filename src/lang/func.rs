//! Functions and methods.

use super::config::Config;
use super::doc::Doc;
use super::error::LangError;
use super::example::{examples_for, Example};
use super::location::Location;
use super::source::{ExampleSource, FuncSource};
use super::text::{extract_summary, print_source};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Func {
    cfg: Config,
    src: FuncSource,
    examples: Arc<Vec<ExampleSource>>,
}

impl Func {
    pub fn new(cfg: Config, src: FuncSource, examples: Arc<Vec<ExampleSource>>) -> Self {
        Self { cfg, src, examples }
    }

    pub fn level(&self) -> usize {
        self.cfg.level
    }

    pub fn name(&self) -> &str {
        &self.src.name
    }

    /// Receiver as written in the source, e.g. `*Client`. Empty for functions.
    pub fn receiver(&self) -> &str {
        &self.src.recv
    }

    fn raw_receiver(&self) -> &str {
        self.src.recv.trim_start_matches('*')
    }

    pub fn title(&self) -> String {
        if self.src.recv.is_empty() {
            format!("func {}", self.src.name)
        } else {
            format!("func ({}) {}", self.src.recv, self.src.name)
        }
    }

    /// `Recv.Name` for methods, the name for functions.
    pub fn anchor(&self) -> String {
        if self.src.recv.is_empty() {
            self.src.name.clone()
        } else {
            format!("{}.{}", self.raw_receiver(), self.src.name)
        }
    }

    pub fn summary(&self) -> String {
        extract_summary(&self.src.doc)
    }

    pub fn doc(&self) -> Doc {
        Doc::new(&self.cfg.inc(1), &self.src.doc)
    }

    pub fn signature(&self) -> Result<String, LangError> {
        print_source("signature", &self.src.decl)
    }

    pub fn location(&self) -> Location {
        super::location_of(&self.cfg, &self.src.location)
    }

    /// Examples named `Name`, `Name_suffix`, or `Recv_Name[_suffix]` for methods.
    pub fn examples(&self) -> Vec<Example> {
        let subject = if self.src.recv.is_empty() {
            self.src.name.clone()
        } else {
            format!("{}_{}", self.raw_receiver(), self.src.name)
        };
        examples_for(&self.cfg, &subject, &self.examples, |_| false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn method() -> Func {
        let examples = vec![
            ExampleSource {
                name: "Client_Do".into(),
                ..Default::default()
            },
            ExampleSource {
                name: "Client_Do_withRetries".into(),
                ..Default::default()
            },
            ExampleSource {
                name: "Client".into(),
                ..Default::default()
            },
        ];
        Func::new(
            Config::new("/p", "/p").with_level(3),
            FuncSource {
                name: "Do".into(),
                recv: "*Client".into(),
                doc: "Do sends a request. It retries.".into(),
                decl: "func (c *Client) Do(req *Request) error".into(),
                ..Default::default()
            },
            Arc::new(examples),
        )
    }

    #[test]
    fn method_identity() {
        let func = method();
        assert_eq!(func.title(), "func (*Client) Do");
        assert_eq!(func.anchor(), "Client.Do");
        assert_eq!(func.summary(), "Do sends a request.");
        assert_eq!(func.doc().level(), 4);
    }

    #[test]
    fn method_examples_use_the_suffix() {
        let names: Vec<String> = method().examples().iter().map(Example::name).collect();
        assert_eq!(names, vec!["", "With Retries"]);
    }

    #[test]
    fn plain_function_title() {
        let func = Func::new(
            Config::new("/p", "/p"),
            FuncSource {
                name: "Open".into(),
                ..Default::default()
            },
            Arc::default(),
        );
        assert_eq!(func.title(), "func Open");
        assert_eq!(func.anchor(), "Open");
        assert!(func.examples().is_empty());
    }

    #[test]
    fn empty_signature_is_an_error() {
        let func = Func::new(Config::new("/p", "/p"), FuncSource::default(), Arc::default());
        assert!(matches!(func.signature(), Err(LangError::EmptySource { .. })));
    }
}
