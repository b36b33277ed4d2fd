//! Ordered and unordered lists inside doc comments.

use super::block::Block;
use super::config::Config;
use super::parser::{self, RawList};
use super::span::LinkDefs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Ordered,
    Unordered,
}

/// One list entry. Entries can hold several blocks, e.g. two paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    kind: ItemKind,
    /// Marker number of ordered items; 0 for unordered ones.
    number: u32,
    blocks: Vec<Block>,
}

impl Item {
    pub fn new(number: Option<u32>, blocks: Vec<Block>) -> Self {
        match number {
            Some(number) => Self {
                kind: ItemKind::Ordered,
                number,
                blocks,
            },
            None => Self {
                kind: ItemKind::Unordered,
                number: 0,
                blocks,
            },
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    blank_between: bool,
    items: Vec<Item>,
}

impl List {
    pub fn new(blank_between: bool, items: Vec<Item>) -> Self {
        Self {
            blank_between,
            items,
        }
    }

    /// Build a list from the raw items found by the parser, parsing each
    /// item's content into blocks at the parent's level.
    pub fn from_raw(raw: RawList, cfg: &Config, defs: &LinkDefs) -> Self {
        let items: Vec<Item> = raw
            .items
            .into_iter()
            .map(|item| {
                let lines: Vec<&str> = item.lines.iter().map(String::as_str).collect();
                Item::new(item.number, parser::parse_lines(&lines, cfg, defs))
            })
            // A marker with nothing after it has no content to render.
            .filter(|item| !item.blocks.is_empty())
            .collect();

        let blank_between = raw.blank_between || items.iter().any(|i| i.blocks.len() != 1);
        Self::new(blank_between, items)
    }

    /// Whether items are separated by blank lines when rendered.
    pub fn blank_between(&self) -> bool {
        self.blank_between
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}
