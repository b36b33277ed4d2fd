//! Markdown dialects.
//!
//! A [`Format`] exposes the primitive text operations the templates are built
//! from (headers, code blocks, links, collapsible sections, escaping, anchors
//! and source links). Dialects are stateless values; pick one by name through
//! the [`FormatRegistry`].

pub mod core;
pub mod devops;
pub mod github;
pub mod plain;
pub mod registry;

pub use devops::AzureDevOpsMarkdown;
pub use github::GitHubFlavoredMarkdown;
pub use plain::PlainMarkdown;
pub use registry::FormatRegistry;

use crate::lang::Location;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("header level cannot be less than 1")]
    InvalidHeaderLevel,

    #[error("format '{0}' not found")]
    FormatNotFound(String),

    #[error("unable to link to {path}: {reason}")]
    CodeHref { path: String, reason: String },
}

/// Primitive formatting operations of a markdown dialect.
///
/// Block-level outputs (headers, code blocks, paragraphs, accordions, list
/// entries) carry their own trailing line breaks so they can be concatenated
/// directly.
pub trait Format: Send + Sync {
    /// Identifier used to select the dialect, e.g. `github`.
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Bold text, or nothing for empty text.
    fn bold(&self, text: &str) -> String;

    /// Target that [`Format::raw_local_href`] for the same anchor points at.
    fn anchor(&self, anchor: &str) -> String;

    /// Header with escaped text preceded by an anchor.
    fn anchor_header(&self, level: usize, text: &str, anchor: &str) -> Result<String, FormatError>;

    /// Header with escaped text. Levels above 6 render as 6.
    fn header(&self, level: usize, text: &str) -> Result<String, FormatError>;

    /// Like [`Format::anchor_header`] without escaping the text.
    fn raw_anchor_header(&self, level: usize, text: &str, anchor: &str) -> Result<String, FormatError>;

    /// Header whose text already holds inline markup.
    fn raw_header(&self, level: usize, text: &str) -> Result<String, FormatError>;

    fn code_block(&self, language: &str, code: &str) -> String;

    /// Link to `href`. Empty text yields nothing, an empty href the bare text.
    fn link(&self, text: &str, href: &str) -> String;

    /// Unordered list entry at a zero-based nesting depth.
    fn list_entry(&self, depth: usize, text: &str) -> String;

    fn accordion(&self, title: &str, body: &str) -> Result<String, FormatError>;

    /// Opening half of an accordion whose body is rendered separately.
    fn accordion_header(&self, title: &str) -> Result<String, FormatError>;

    fn accordion_terminator(&self) -> String;

    /// In-document link target for the header with the given text.
    fn local_href(&self, header_text: &str) -> String;

    /// In-document link target for an anchor emitted by [`Format::anchor`].
    fn raw_local_href(&self, anchor: &str) -> String;

    /// Browsable URL for a source location; empty without a repository.
    fn code_href(&self, location: &Location) -> Result<String, FormatError>;

    fn paragraph(&self, text: &str) -> String;

    /// Backslash-escape markdown metacharacters outside of URLs.
    fn escape(&self, text: &str) -> String;
}
