//! Intermediate Tree
//!
//! Node definitions produced by the tree builder and consumed by the
//! folder. Processing instructions and comments carry their raw text and
//! never have children or attributes.

use indexmap::IndexMap;
use serde::Serialize;

/// Key under which processing instructions fold
pub const PROCESSING_INSTRUCTION_KEY: &str = "?";
/// Key under which comments fold
pub const COMMENT_KEY: &str = "!";
/// Key under which text folds
pub const TEXT_KEY: &str = "";

/// Attribute key to value; `None` marks a valueless attribute
pub type Attributes = IndexMap<String, Option<String>>;

/// One entry in a child list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Child {
    Text(String),
    Element(Element),
    ProcessingInstruction(String),
    Comment(String),
}

impl Child {
    /// The key this child folds under inside a mapping
    pub fn key(&self) -> &str {
        match self {
            Child::Text(_) => TEXT_KEY,
            Child::Element(el) => &el.name,
            Child::ProcessingInstruction(_) => PROCESSING_INSTRUCTION_KEY,
            Child::Comment(_) => COMMENT_KEY,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Child::Text(_))
    }
}

/// Element node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub name: String,
    pub attributes: Attributes,
    pub children: Vec<Child>,
    /// Written as `<name/>`
    pub self_closed: bool,
}

impl Element {
    pub fn new(name: String, attributes: Attributes) -> Self {
        Element {
            name,
            attributes,
            children: Vec::new(),
            self_closed: false,
        }
    }
}

/// Children are released through a worklist so deep trees drop without
/// recursing
impl Drop for Element {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(child) = pending.pop() {
            if let Child::Element(mut el) = child {
                pending.append(&mut el.children);
            }
        }
    }
}

/// Synthetic nameless root holding the top-level children
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub children: Vec<Child>,
}

impl Document {
    pub fn new(children: Vec<Child>) -> Self {
        Document { children }
    }
}
