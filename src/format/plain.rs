//! Plain markdown, for renderers without any extensions.
//!
//! There are no fenced code blocks, collapsible sections, header anchors or
//! source links here. Accordions degrade to a level 6 header and a paragraph.

use super::core;
use super::{Format, FormatError};
use crate::lang::Location;

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainMarkdown;

impl Format for PlainMarkdown {
    fn name(&self) -> &str {
        "plain"
    }

    fn description(&self) -> &str {
        "Plain markdown without extensions"
    }

    fn bold(&self, text: &str) -> String {
        core::bold(text)
    }

    fn anchor(&self, _anchor: &str) -> String {
        String::new()
    }

    fn anchor_header(&self, level: usize, text: &str, _anchor: &str) -> Result<String, FormatError> {
        core::header(level, &core::escape(text))
    }

    fn header(&self, level: usize, text: &str) -> Result<String, FormatError> {
        core::header(level, &core::escape(text))
    }

    fn raw_anchor_header(&self, level: usize, text: &str, _anchor: &str) -> Result<String, FormatError> {
        core::header(level, text)
    }

    fn raw_header(&self, level: usize, text: &str) -> Result<String, FormatError> {
        core::header(level, text)
    }

    /// The language is dropped; plain markdown only has indented code.
    fn code_block(&self, _language: &str, code: &str) -> String {
        core::indented_code_block(code)
    }

    fn link(&self, text: &str, href: &str) -> String {
        core::link(text, href)
    }

    fn list_entry(&self, depth: usize, text: &str) -> String {
        core::list_entry(depth, text)
    }

    fn accordion(&self, title: &str, body: &str) -> Result<String, FormatError> {
        Ok(format!("{}{}", core::header(6, title)?, core::paragraph(body)))
    }

    fn accordion_header(&self, title: &str) -> Result<String, FormatError> {
        core::header(6, title)
    }

    /// Nothing to close: the body already ends its last block.
    fn accordion_terminator(&self) -> String {
        String::new()
    }

    fn local_href(&self, _header_text: &str) -> String {
        String::new()
    }

    fn raw_local_href(&self, _anchor: &str) -> String {
        String::new()
    }

    fn code_href(&self, _location: &Location) -> Result<String, FormatError> {
        Ok(String::new())
    }

    fn paragraph(&self, text: &str) -> String {
        core::paragraph(text)
    }

    fn escape(&self, text: &str) -> String {
        core::escape(text)
    }
}
