//! Azure DevOps flavored markdown.
//!
//! Same block syntax as GitHub, but header slugs keep special characters
//! percent-encoded and source links use DevOps' query-string line ranges.

use super::core;
use super::{Format, FormatError};
use crate::lang::Location;
use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

/// Characters left alone when escaping a single URL path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s").unwrap());

fn path_escape(text: &str) -> String {
    utf8_percent_encode(text, PATH_SEGMENT).to_string()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AzureDevOpsMarkdown;

impl Format for AzureDevOpsMarkdown {
    fn name(&self) -> &str {
        "azure-devops"
    }

    fn description(&self) -> &str {
        "Azure DevOps flavored markdown"
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
        let slug = header_text.to_lowercase();
        let slug = WHITESPACE_REGEX.replace_all(slug.trim(), "-");
        format!("#{}", path_escape(&slug).replace(':', "%3A"))
    }

    fn raw_local_href(&self, anchor: &str) -> String {
        format!("#{}", anchor)
    }

    fn code_href(&self, location: &Location) -> Result<String, FormatError> {
        let Some(repo) = location.repo.as_deref() else {
            return Ok(String::new());
        };

        let path = core::repo_path(location, repo)?;
        Ok(format!(
            "{}?path={}&version=GB{}&lineStyle=plain&line={}&lineEnd={}&lineStartColumn={}&lineEndColumn={}",
            repo.remote,
            path_escape(&path),
            repo.default_branch,
            location.start.line,
            location.end.line,
            location.start.col,
            location.end.col,
        ))
    }

    fn paragraph(&self, text: &str) -> String {
        core::paragraph(text)
    }

    fn escape(&self, text: &str) -> String {
        core::escape(text)
    }
}
