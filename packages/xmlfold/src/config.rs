//! Parser Options
//!
//! Knobs that decide how the parser treats loosely formed input.

use serde::{Deserialize, Serialize};

/// How unbalanced open/close tags are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnbalancedTags {
    /// Ignore stray close tags and implicitly close elements left open at
    /// the end of the input.
    #[default]
    Lenient,
    /// Report stray, mismatched and unclosed tags as errors.
    Strict,
}

/// How an attribute key repeated within one tag is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DuplicateAttributes {
    #[default]
    LastWins,
    FirstWins,
    Error,
}

/// Parser options
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    pub unbalanced: UnbalancedTags,
    pub duplicate_attributes: DuplicateAttributes,
    /// Also decode `&#NN;` and `&#xHH;` references
    pub decode_char_refs: bool,
}

impl ParseOptions {
    /// Lenient defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that reject unbalanced documents and repeated attributes
    pub fn strict() -> Self {
        ParseOptions {
            unbalanced: UnbalancedTags::Strict,
            duplicate_attributes: DuplicateAttributes::Error,
            decode_char_refs: false,
        }
    }

    pub fn with_unbalanced(mut self, unbalanced: UnbalancedTags) -> Self {
        self.unbalanced = unbalanced;
        self
    }

    pub fn with_duplicate_attributes(mut self, policy: DuplicateAttributes) -> Self {
        self.duplicate_attributes = policy;
        self
    }

    pub fn with_char_refs(mut self, decode: bool) -> Self {
        self.decode_char_refs = decode;
        self
    }
}
