//! Runnable examples attached to packages, types and funcs.

use super::config::Config;
use super::doc::Doc;
use super::error::LangError;
use super::source::ExampleSource;
use super::text::{extract_summary, print_source, split_camel};

#[derive(Debug, Clone)]
pub struct Example {
    cfg: Config,
    name: String,
    src: ExampleSource,
}

impl Example {
    /// `name` is the part of the example function name after its subject,
    /// e.g. `withRetries` for `Client_Do_withRetries`. Empty for the subject's
    /// main example.
    pub fn new(cfg: Config, name: impl Into<String>, src: ExampleSource) -> Self {
        Self {
            cfg,
            name: name.into(),
            src,
        }
    }

    pub fn level(&self) -> usize {
        self.cfg.level
    }

    /// Human readable name, split into words.
    pub fn name(&self) -> String {
        split_camel(&self.name)
    }

    pub fn title(&self) -> String {
        let name = self.name();
        if name.is_empty() {
            "Example".to_string()
        } else {
            format!("Example ({})", name)
        }
    }

    pub fn summary(&self) -> String {
        extract_summary(&self.src.doc)
    }

    pub fn doc(&self) -> Doc {
        Doc::new(&self.cfg.inc(1), &self.src.doc)
    }

    pub fn code(&self) -> Result<String, LangError> {
        print_source("example code", &self.src.code)
    }

    pub fn has_output(&self) -> bool {
        self.src.output.is_some()
    }

    pub fn output(&self) -> &str {
        self.src.output.as_deref().unwrap_or_default()
    }
}

/// Examples whose function name is exactly `subject` or `subject_suffix`,
/// paired with their suffix. `skip` rejects names claimed by a more specific
/// subject (e.g. a method example when collecting a type's examples).
pub(crate) fn examples_for(
    cfg: &Config,
    subject: &str,
    examples: &[ExampleSource],
    skip: impl Fn(&str) -> bool,
) -> Vec<Example> {
    let prefix = format!("{}_", subject);
    examples
        .iter()
        .filter_map(|example| {
            let suffix = if example.name == subject {
                ""
            } else {
                example.name.strip_prefix(&prefix)?
            };
            if skip(&example.name) {
                return None;
            }
            Some(Example::new(cfg.inc(1), suffix, example.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(name: &str, output: Option<&str>) -> ExampleSource {
        ExampleSource {
            name: name.to_string(),
            doc: "Shows usage".to_string(),
            code: "{\n\tfmt.Println(1)\n}".to_string(),
            output: output.map(str::to_string),
        }
    }

    #[test]
    fn titles() {
        let cfg = Config::new("/p", "/p");
        assert_eq!(Example::new(cfg.clone(), "", example("", None)).title(), "Example");
        assert_eq!(
            Example::new(cfg, "withRetries", example("", None)).title(),
            "Example (With Retries)"
        );
    }

    #[test]
    fn output_is_optional() {
        let cfg = Config::new("/p", "/p");
        let with = Example::new(cfg.clone(), "", example("", Some("1\n")));
        let without = Example::new(cfg, "", example("", None));

        assert!(with.has_output());
        assert_eq!(with.output(), "1\n");
        assert!(!without.has_output());
        assert_eq!(without.output(), "");
    }

    #[test]
    fn selects_by_subject_and_suffix() {
        let cfg = Config::new("/p", "/p").with_level(3);
        let all = vec![
            example("Open", None),
            example("Open_readOnly", None),
            example("OpenFile", None),
            example("Close", None),
        ];
        let found = examples_for(&cfg, "Open", &all, |_| false);

        let names: Vec<String> = found.iter().map(Example::name).collect();
        assert_eq!(names, vec!["", "Read Only"]);
        assert!(found.iter().all(|e| e.level() == 4));
    }
}
