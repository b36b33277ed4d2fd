//! Inline text spans and the inline parser that produces them.
//!
//! Paragraph and header text is split into plain runs, verbatim code spans,
//! links and autolinks. Bracketed references are resolved in this order:
//!
//! 1. `[text](url)` with an explicit target
//! 2. `[text]` matching a link definition of the same comment
//! 3. `[Name]`, `[Recv.Name]` found in the package symbol table
//! 4. `[pkg.Name]`, `[import/path]`, `[import/path.Name]` pointing at the
//!    documentation host
//!
//! Identifier-shaped references that resolve nowhere degrade to their label
//! as plain text and are reported with a warning. Bracketed text that is not
//! a reference at all (e.g. `[broken link]`) is kept verbatim.

use super::config::Config;
use super::text::trim_url;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpanKind {
    Text,
    RawText,
    Link,
    /// Link to a symbol of the same package. `url` holds its anchor name.
    LocalLink,
    Autolink,
}

/// A run of inline text. `url` is only set for links and autolinks, and
/// holds the bare anchor name for local links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    kind: SpanKind,
    text: String,
    url: String,
}

impl Span {
    pub fn new(kind: SpanKind, text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            url: url.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Text, text, "")
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Self::new(SpanKind::RawText, text, "")
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(SpanKind::Link, text, url)
    }

    pub fn local_link(text: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self::new(SpanKind::LocalLink, text, anchor)
    }

    pub fn autolink(url: impl Into<String>) -> Self {
        let url = url.into();
        Self::new(SpanKind::Autolink, url.clone(), url)
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn text_str(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// `[Text]: URL` definitions collected from a doc comment.
pub type LinkDefs = HashMap<String, String>;

static INLINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        (?P<code>`[^`]+`)
        | \[(?P<label>[^\[\]]+)\](?:\((?P<href>[^()\s]+)\))?
        | (?P<url>(?:https?|ftp|file)://[^\s<>\[\]]+)
        ",
    )
    .unwrap()
});

static IDENT_REF_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\*?[\p{L}_][\p{L}\p{N}_]*(?:\.[\p{L}_][\p{L}\p{N}_]*)?$").unwrap()
});

static IMPORT_PATH_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.\-~]+(?:/[A-Za-z0-9_.\-~]+)+$").unwrap());

static IDENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*?[\p{L}_][\p{L}\p{N}_]*$").unwrap());

/// Split a (whitespace-collapsed) run of paragraph text into spans.
pub fn parse_spans(text: &str, cfg: &Config, defs: &LinkDefs) -> Vec<Span> {
    let mut spans = SpanBuilder::default();
    let mut cursor = 0;

    for caps in INLINE_REGEX.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        spans.push_text(&text[cursor..whole.start()]);
        cursor = whole.end();

        if let Some(code) = caps.name("code") {
            spans.push(Span::raw(code.as_str()));
        } else if let Some(url) = caps.name("url") {
            let candidate = url.as_str();
            let url = trim_url(candidate);
            spans.push(Span::autolink(url));
            spans.push_text(&candidate[url.len()..]);
        } else {
            resolve_bracket(&caps, cfg, defs, &mut spans);
        }
    }

    spans.push_text(&text[cursor..]);
    spans.finish()
}

fn resolve_bracket(caps: &Captures<'_>, cfg: &Config, defs: &LinkDefs, spans: &mut SpanBuilder) {
    let whole = caps.get(0).map_or("", |m| m.as_str());
    let label = caps.name("label").map_or("", |m| m.as_str());

    if let Some(href) = caps.name("href") {
        spans.push(Span::link(label, href.as_str()));
        return;
    }

    if let Some(url) = defs.get(label) {
        spans.push(Span::link(label, url.as_str()));
        return;
    }

    if let Some(url) = external_doc_url(label, cfg) {
        spans.push(Span::link(label, url));
        return;
    }

    if IDENT_REF_REGEX.is_match(label) {
        match cfg.symbols.resolve(label) {
            Some(anchor) => spans.push(Span::local_link(label, anchor)),
            None => {
                tracing::warn!(symbol = label, "unable to find symbol for doc link");
                spans.push_text(label);
            }
        }
        return;
    }

    spans.push_text(whole);
}

/// URL on the documentation host for references to other packages.
///
/// `pkg.Name` forms only count when `pkg` starts lowercase and does not name
/// a local symbol, since exported local names start uppercase.
fn external_doc_url(label: &str, cfg: &Config) -> Option<String> {
    if label.contains('/') {
        return import_path_url(label, &cfg.doc_host);
    }

    let (pkg, name) = label.split_once('.')?;
    if !pkg.starts_with(|c: char| c.is_lowercase()) || cfg.symbols.lookup(label).is_some() {
        return None;
    }
    if !IDENT_REGEX.is_match(pkg) || !IDENT_REF_REGEX.is_match(name) {
        return None;
    }

    let path = cfg.imports.get(pkg).map_or(pkg, String::as_str);
    Some(format!("{}{}#{}", cfg.doc_host, path, name))
}

/// `import/path`, `import/path.Name` or `import/path.Recv.Name`.
fn import_path_url(label: &str, host: &str) -> Option<String> {
    let slash = label.rfind('/')?;
    let (dir, last) = label.split_at(slash + 1);

    let mut parts = last.splitn(2, '.');
    let elem = parts.next().unwrap_or_default();
    let symbol = parts.next();

    // A dotted final element that isn't an identifier chain is part of the path.
    let (path, symbol) = match symbol {
        Some(sym) if IDENT_REF_REGEX.is_match(sym) => (format!("{}{}", dir, elem), Some(sym)),
        _ => (label.to_string(), None),
    };

    if !IMPORT_PATH_REGEX.is_match(&path) {
        return None;
    }

    Some(match symbol {
        Some(sym) => format!("{}{}#{}", host, path, sym.trim_start_matches('*')),
        None => format!("{}{}", host, path),
    })
}

/// Accumulates spans, merging adjacent plain text runs.
#[derive(Default)]
struct SpanBuilder {
    spans: Vec<Span>,
    text: String,
}

impl SpanBuilder {
    fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn push(&mut self, span: Span) {
        self.flush();
        self.spans.push(span);
    }

    fn flush(&mut self) {
        if !self.text.is_empty() {
            let text = std::mem::take(&mut self.text);
            self.spans.push(Span::text(text));
        }
    }

    fn finish(mut self) -> Vec<Span> {
        self.flush();
        self.spans
    }
}
