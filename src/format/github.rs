//! GitHub Flavored Markdown.
//!
//! Supports fenced code blocks with a language, `<details>` accordions and
//! header slugs as GitHub generates them. Source links point at
//! `{remote}/blob/{branch}/{path}#L{start}-L{end}`.

use super::core;
use super::{Format, FormatError};
use crate::lang::Location;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s").unwrap());
static SLUG_REMOVE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\-_\d]+").unwrap());

#[derive(Debug, Clone, Copy, Default)]
pub struct GitHubFlavoredMarkdown;

impl Format for GitHubFlavoredMarkdown {
    fn name(&self) -> &str {
        "github"
    }

    fn description(&self) -> &str {
        "GitHub Flavored Markdown"
    }

    fn bold(&self, text: &str) -> String {
        core::bold(text)
    }

    fn anchor(&self, anchor: &str) -> String {
        core::html_anchor(anchor)
    }

    fn anchor_header(&self, level: usize, text: &str, anchor: &str) -> Result<String, FormatError> {
        core::header(level, &format!("{} {}", core::html_anchor(anchor), core::escape(text)))
    }

    fn header(&self, level: usize, text: &str) -> Result<String, FormatError> {
        core::header(level, &core::escape(text))
    }

    fn raw_anchor_header(&self, level: usize, text: &str, anchor: &str) -> Result<String, FormatError> {
        core::header(level, &format!("{} {}", core::html_anchor(anchor), text))
    }

    fn raw_header(&self, level: usize, text: &str) -> Result<String, FormatError> {
        core::header(level, text)
    }

    fn code_block(&self, language: &str, code: &str) -> String {
        core::fenced_code_block(language, code)
    }

    fn link(&self, text: &str, href: &str) -> String {
        core::link(text, href)
    }

    fn list_entry(&self, depth: usize, text: &str) -> String {
        core::list_entry(depth, text)
    }

    fn accordion(&self, title: &str, body: &str) -> Result<String, FormatError> {
        Ok(core::details_accordion(title, body))
    }

    fn accordion_header(&self, title: &str) -> Result<String, FormatError> {
        Ok(core::details_accordion_header(title))
    }

    fn accordion_terminator(&self) -> String {
        core::details_accordion_terminator()
    }

    fn local_href(&self, header_text: &str) -> String {
        let slug = core::plain_text(header_text).to_lowercase();
        let slug = WHITESPACE_REGEX.replace_all(slug.trim(), "-");
        let slug = SLUG_REMOVE_REGEX.replace_all(&slug, "");
        format!("#{}", slug)
    }

    fn raw_local_href(&self, anchor: &str) -> String {
        format!("#{}", anchor)
    }

    fn code_href(&self, location: &Location) -> Result<String, FormatError> {
        let Some(repo) = location.repo.as_deref() else {
            return Ok(String::new());
        };

        let path = core::repo_path(location, repo)?;
        let lines = if location.start.line == location.end.line {
            format!("L{}", location.start.line)
        } else {
            format!("L{}-L{}", location.start.line, location.end.line)
        };

        Ok(format!(
            "{}/blob/{}/{}#{}",
            repo.remote, repo.default_branch, path, lines
        ))
    }

    fn paragraph(&self, text: &str) -> String {
        core::paragraph(text)
    }

    fn escape(&self, text: &str) -> String {
        core::escape(text)
    }
}
