#![deny(clippy::all)]

//! xmlfold
//!
//! Converts XML text into a `serde_json::Value` using a fixed flattening
//! scheme: elements become single-key mappings, attributes and child
//! elements share one mapping, repeated keys become sequences and mixed
//! content becomes a sequence under the empty key.

pub mod chars;
mod config;
mod error;
pub mod fold;
pub mod xml_parser;

// Re-exports
pub use config::{DuplicateAttributes, ParseOptions, UnbalancedTags};
pub use error::{Error, Result};
pub use fold::{fold_document, Folder, Reviver};
pub use serde_json::Value;
pub use xml_parser::{tokenize, Child, Document, Element, Parser, Token};

/// Parse and fold XML with a fixed set of options
#[derive(Debug, Clone, Default)]
pub struct XmlParser {
    parser: Parser,
}

impl XmlParser {
    pub fn new(options: ParseOptions) -> Self {
        XmlParser {
            parser: Parser::new(options),
        }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.parser.options
    }

    /// Build the intermediate tree without folding it
    pub fn parse_tree(&self, source: &str) -> Result<Document> {
        self.parser.parse(source)
    }

    /// Parse XML into its folded value
    pub fn parse(&self, source: &str) -> Result<Value> {
        let document = self.parse_tree(source)?;
        Ok(fold_document(&document, None))
    }

    /// Parse XML, passing every assembled value through `reviver`
    pub fn parse_with_reviver<F>(&self, source: &str, mut reviver: F) -> Result<Value>
    where
        F: FnMut(&str, Value) -> Value,
    {
        let document = self.parse_tree(source)?;
        Ok(fold_document(&document, Some(&mut reviver)))
    }
}

/// Parse XML with default (lenient) options
///
/// Lenient parsing recovers from every structural problem, so this only
/// returns `Err` for options that ask for strictness.
pub fn parse_xml(text: &str) -> Result<Value> {
    XmlParser::default().parse(text)
}

/// Parse XML with default options and a reviver
pub fn parse_xml_with_reviver<F>(text: &str, reviver: F) -> Result<Value>
where
    F: FnMut(&str, Value) -> Value,
{
    XmlParser::default().parse_with_reviver(text, reviver)
}
