//! Template functions.
//!
//! Structural helpers (`add`, `spacer`, `inlineSpacer`, `hangingIndent`,
//! `iter`, `include`) plus one function per format primitive, named the way
//! templates call them (`codeBlock`, `rawHeader`, ...).

use crate::format::{Format, FormatError};
use crate::lang::Location;
use minijinja::value::{Value, ValueKind, ViaDeserialize};
use minijinja::{Environment, Error, ErrorKind, State};
use serde::Serialize;
use std::sync::Arc;

/// A sequence entry decorated with its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IterEntry<T> {
    pub first: bool,
    pub last: bool,
    pub entry: T,
}

/// Pair every item with first/last flags, for separator logic in templates.
pub fn iter<T>(items: impl IntoIterator<Item = T>) -> Vec<IterEntry<T>> {
    let items: Vec<T> = items.into_iter().collect();
    let len = items.len();
    items
        .into_iter()
        .enumerate()
        .map(|(i, entry)| IterEntry {
            first: i == 0,
            last: i + 1 == len,
            entry,
        })
        .collect()
}

/// Indent every line but the first by `n` spaces, so multi-line content
/// lines up under a list marker. Blank lines stay empty.
pub fn hanging_indent(text: &str, n: usize) -> String {
    let pad = " ".repeat(n);
    let mut lines = text.split('\n');
    let mut out = lines.next().unwrap_or_default().to_string();
    for line in lines {
        out.push('\n');
        if !line.is_empty() {
            out.push_str(&pad);
        }
        out.push_str(line);
    }
    out
}

fn format_error(err: FormatError) -> Error {
    Error::new(ErrorKind::InvalidOperation, "format primitive failed").with_source(err)
}

fn iter_values(seq: Value) -> Result<Value, Error> {
    if seq.kind() != ValueKind::Seq {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            "iter only accepts sequences",
        ));
    }
    Ok(Value::from_serialize(iter(seq.try_iter()?)))
}

fn include(state: &State, name: String, data: Value) -> Result<String, Error> {
    state.env().get_template(&name)?.render(data)
}

/// Register the structural helpers.
pub fn register_helpers(env: &mut Environment<'static>) {
    env.add_function("add", |a: i64, b: i64| a + b);
    env.add_function("spacer", || "\n\n".to_string());
    env.add_function("inlineSpacer", || "\n".to_string());
    env.add_function("hangingIndent", |text: String, n: usize| {
        hanging_indent(&text, n)
    });
    env.add_function("iter", iter_values);
    env.add_function("include", include);
}

/// Register the primitives of `format` under their template names.
pub fn register_format(env: &mut Environment<'static>, format: Arc<dyn Format>) {
    let f = Arc::clone(&format);
    env.add_function("bold", move |text: String| f.bold(&text));

    let f = Arc::clone(&format);
    env.add_function("anchor", move |anchor: String| f.anchor(&anchor));

    let f = Arc::clone(&format);
    env.add_function(
        "anchorHeader",
        move |level: usize, text: String, anchor: String| {
            f.anchor_header(level, &text, &anchor).map_err(format_error)
        },
    );

    let f = Arc::clone(&format);
    env.add_function("header", move |level: usize, text: String| {
        f.header(level, &text).map_err(format_error)
    });

    let f = Arc::clone(&format);
    env.add_function(
        "rawAnchorHeader",
        move |level: usize, text: String, anchor: String| {
            f.raw_anchor_header(level, &text, &anchor)
                .map_err(format_error)
        },
    );

    let f = Arc::clone(&format);
    env.add_function("rawHeader", move |level: usize, text: String| {
        f.raw_header(level, &text).map_err(format_error)
    });

    let f = Arc::clone(&format);
    env.add_function("codeBlock", move |language: String, code: String| {
        f.code_block(&language, &code)
    });

    let f = Arc::clone(&format);
    env.add_function("link", move |text: String, href: String| f.link(&text, &href));

    let f = Arc::clone(&format);
    env.add_function("listEntry", move |depth: usize, text: String| {
        f.list_entry(depth, &text)
    });

    let f = Arc::clone(&format);
    env.add_function("accordion", move |title: String, body: String| {
        f.accordion(&title, &body).map_err(format_error)
    });

    let f = Arc::clone(&format);
    env.add_function("accordionHeader", move |title: String| {
        f.accordion_header(&title).map_err(format_error)
    });

    let f = Arc::clone(&format);
    env.add_function("accordionTerminator", move || f.accordion_terminator());

    let f = Arc::clone(&format);
    env.add_function("localHref", move |text: String| f.local_href(&text));

    let f = Arc::clone(&format);
    env.add_function("rawLocalHref", move |anchor: String| f.raw_local_href(&anchor));

    let f = Arc::clone(&format);
    env.add_function("codeHref", move |location: ViaDeserialize<Location>| {
        f.code_href(&location).map_err(format_error)
    });

    let f = Arc::clone(&format);
    env.add_function("paragraph", move |text: String| f.paragraph(&text));

    let f = format;
    env.add_function("escape", move |text: String| f.escape(&text));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{GitHubFlavoredMarkdown, PlainMarkdown};
    use rstest::rstest;

    fn env(format: Arc<dyn Format>) -> Environment<'static> {
        let mut env = Environment::new();
        register_helpers(&mut env);
        register_format(&mut env, format);
        env
    }

    fn eval(format: Arc<dyn Format>, source: &str) -> Result<String, Error> {
        env(format).render_str(source, ())
    }

    #[test]
    fn iter_flags_first_and_last() {
        let entries = iter(["a", "b", "c"]);
        assert!(entries[0].first && !entries[0].last);
        assert!(!entries[1].first && !entries[1].last);
        assert!(!entries[2].first && entries[2].last);
        assert!(iter(Vec::<u8>::new()).is_empty());
    }

    #[test]
    fn single_entry_is_first_and_last() {
        assert_eq!(
            iter(["only"]),
            vec![IterEntry {
                first: true,
                last: true,
                entry: "only"
            }]
        );
    }

    #[rstest]
    #[case("one line", "one line")]
    #[case("first\nsecond", "first\n  second")]
    #[case("first\n\nthird", "first\n\n  third")]
    fn hanging_indents(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(hanging_indent(text, 2), expected);
    }

    #[test]
    fn iter_in_templates() {
        let out = eval(
            Arc::new(GitHubFlavoredMarkdown),
            "{% for e in iter(['a', 'b']) %}{{ e.entry }}{% if not e.last %},{% endif %}{% endfor %}",
        )
        .unwrap();
        assert_eq!(out, "a,b");
    }

    #[test]
    fn iter_rejects_non_sequences() {
        let err = eval(Arc::new(GitHubFlavoredMarkdown), "{{ iter(3) }}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    }

    #[test]
    fn structural_helpers() {
        let out = eval(
            Arc::new(GitHubFlavoredMarkdown),
            "{{ add(2, 1) }}|{{ spacer() }}|{{ inlineSpacer() }}|{{ hangingIndent('a\\nb', 4) }}",
        )
        .unwrap();
        assert_eq!(out, "3|\n\n|\n|a\n    b");
    }

    #[test]
    fn primitives_follow_the_dialect() {
        let source = "{{ codeBlock('go', 'x := 1') }}";
        assert_eq!(
            eval(Arc::new(GitHubFlavoredMarkdown), source).unwrap(),
            "```go\nx := 1\n```\n\n"
        );
        assert_eq!(eval(Arc::new(PlainMarkdown), source).unwrap(), "\tx := 1\n\n");
    }

    #[test]
    fn format_errors_surface_from_the_call_site() {
        let err = eval(Arc::new(GitHubFlavoredMarkdown), "{{ header(0, 'x') }}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    }

    #[test]
    fn include_renders_with_the_given_data() {
        let mut env = env(Arc::new(GitHubFlavoredMarkdown));
        env.add_template("greeting", "hello {{ name }}").unwrap();
        let out = env
            .render_str("{{ include('greeting', {'name': 'docs'}) }}", ())
            .unwrap();
        assert_eq!(out, "hello docs");
    }
}
