//! Structured form of one documentation comment.

use super::block::Block;
use super::config::Config;
use super::parser;
use serde::Serialize;

/// Parsed doc comment. Built fresh from raw text whenever an entity's
/// documentation is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Doc {
    level: usize,
    blocks: Vec<Block>,
}

impl Doc {
    /// Parse `text`, rendering headers at the configuration's level.
    pub fn new(cfg: &Config, text: &str) -> Self {
        Self {
            level: cfg.level,
            blocks: parser::parse(text, cfg),
        }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
