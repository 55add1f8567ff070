use crate::modifiers::Modifiers;
use serde::{Deserialize, Serialize};

/// Structured block description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub name: String,

    /// Default modifiers for the block. Reserved: composition does not read them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Modifiers>,
}

impl Block {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: None,
        }
    }

    pub fn with_modifiers(mut self, modifiers: impl Into<Modifiers>) -> Self {
        self.modifiers = Some(modifiers.into());
        self
    }
}

/// Either a plain block name or a structured [`Block`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockRef {
    Name(String),
    Record(Block),
}

impl BlockRef {
    /// The block name used as the root of every generated class
    pub fn name(&self) -> &str {
        match self {
            BlockRef::Name(name) => name,
            BlockRef::Record(block) => &block.name,
        }
    }
}

impl From<&str> for BlockRef {
    fn from(name: &str) -> Self {
        BlockRef::Name(name.to_string())
    }
}

impl From<String> for BlockRef {
    fn from(name: String) -> Self {
        BlockRef::Name(name)
    }
}

impl From<&String> for BlockRef {
    fn from(name: &String) -> Self {
        BlockRef::Name(name.clone())
    }
}

impl From<Block> for BlockRef {
    fn from(block: Block) -> Self {
        BlockRef::Record(block)
    }
}

impl From<&BlockRef> for BlockRef {
    fn from(block: &BlockRef) -> Self {
        block.clone()
    }
}
