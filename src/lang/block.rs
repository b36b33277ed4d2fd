//! Block-level elements of a parsed doc comment.

use super::list::List;
use super::span::{Span, SpanKind};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Paragraph,
    Code,
    Header,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum BlockContent {
    Spans(Vec<Span>),
    List(List),
}

/// A paragraph, code block, header or list.
///
/// Text-bearing blocks hold spans, list blocks hold a [`List`]. Blocks are
/// never modified after the parser creates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    kind: BlockKind,
    level: usize,
    content: BlockContent,
}

impl Block {
    /// Create a text-bearing block. Code blocks carry a single raw span.
    pub fn new(kind: BlockKind, spans: Vec<Span>, level: usize) -> Self {
        debug_assert!(kind != BlockKind::List, "list blocks are built with new_list");
        Self {
            kind,
            level,
            content: BlockContent::Spans(spans),
        }
    }

    pub fn new_list(list: List, level: usize) -> Self {
        Self {
            kind: BlockKind::List,
            level,
            content: BlockContent::List(list),
        }
    }

    /// Code block holding `code` verbatim.
    pub fn code(code: impl Into<String>, level: usize) -> Self {
        Self::new(BlockKind::Code, vec![Span::raw(code)], level)
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    /// Heading depth for headers; carried along for every other kind.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Spans of a text-bearing block; empty for lists.
    pub fn spans(&self) -> &[Span] {
        match &self.content {
            BlockContent::Spans(spans) => spans,
            BlockContent::List(_) => &[],
        }
    }

    pub fn list(&self) -> Option<&List> {
        match &self.content {
            BlockContent::List(list) => Some(list),
            BlockContent::Spans(_) => None,
        }
    }

    /// Display text of the block's spans, concatenated.
    pub fn text(&self) -> String {
        self.spans().iter().map(Span::text_str).collect()
    }

    pub fn is_code(&self) -> bool {
        self.kind == BlockKind::Code
            && matches!(self.spans(), [span] if span.kind() == SpanKind::RawText)
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("kind", &self.kind)?;
        map.serialize_entry("level", &self.level)?;
        match &self.content {
            BlockContent::Spans(spans) => {
                map.serialize_entry("spans", spans)?;
                map.serialize_entry("text", &self.text())?;
            }
            BlockContent::List(list) => map.serialize_entry("list", list)?,
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_blocks_have_no_list() {
        let block = Block::new(BlockKind::Paragraph, vec![Span::text("hi")], 2);
        assert!(block.list().is_none());
        assert_eq!(block.text(), "hi");
        assert_eq!(block.level(), 2);
    }

    #[test]
    fn list_blocks_have_no_spans() {
        let block = Block::new_list(List::new(false, Vec::new()), 1);
        assert!(block.spans().is_empty());
        assert_eq!(block.kind(), BlockKind::List);
    }

    #[test]
    fn code_block_is_one_raw_span() {
        let block = Block::code("x := 1", 1);
        assert!(block.is_code());
        assert_eq!(block.text(), "x := 1");
    }

    #[test]
    fn serializes_kind_and_text() {
        let block = Block::new(BlockKind::Header, vec![Span::text("Usage")], 3);
        let json = serde_json::to_value(&block).unwrap();

        assert_eq!(json["kind"], "header");
        assert_eq!(json["level"], 3);
        assert_eq!(json["text"], "Usage");
        assert_eq!(json["spans"][0]["kind"], "text");
    }
}
