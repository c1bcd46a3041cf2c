//! XML Parser
//!
//! Builds the intermediate tree from the token stream using an explicit
//! stack of open elements, so nesting depth is not bounded by the call
//! stack.
//!
//! Unbalanced input is handled according to [`UnbalancedTags`]:
//! - `Lenient`: a close tag with nothing open is dropped, and elements still
//!   open at the end are closed innermost first. Close tag names are not
//!   compared; a close tag always closes the innermost open element.
//! - `Strict`: both situations, and a close tag naming a different element,
//!   are reported as errors.

use super::ast::{Child, Document, Element};
use super::entities::unescape;
use super::lexer::tokenize;
use super::tags::parse_open_tag;
use super::tokens::{classify_tag, TagKind, Token};
use crate::config::{ParseOptions, UnbalancedTags};
use crate::error::{Error, Result};

/// Main parser class
#[derive(Debug, Clone, Default)]
pub struct Parser {
    pub options: ParseOptions,
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Parser { options }
    }

    /// Tokenize and build the intermediate tree
    pub fn parse(&self, source: &str) -> Result<Document> {
        let tokens = tokenize(source);
        TreeBuilder::new(&self.options).build(tokens)
    }
}

/// Internal tree builder
struct TreeBuilder<'o> {
    options: &'o ParseOptions,
    container_stack: Vec<Element>,
    root_nodes: Vec<Child>,
}

impl<'o> TreeBuilder<'o> {
    fn new(options: &'o ParseOptions) -> Self {
        TreeBuilder {
            options,
            container_stack: Vec::new(),
            root_nodes: Vec::new(),
        }
    }

    fn build(mut self, tokens: Vec<Token<'_>>) -> Result<Document> {
        for token in tokens {
            log::trace!(
                "{:?} token at {}: {:?}",
                token.token_type(),
                token.offset(),
                token.value()
            );
            match token {
                Token::Text { value, .. } => self.consume_text(value),
                Token::Tag { body, offset } => self.consume_tag(body, offset)?,
            }
        }

        // Flush all remaining containers
        while let Some(el) = self.container_stack.pop() {
            if self.is_strict() {
                return Err(Error::Unclosed { name: el.name.clone() });
            }
            log::debug!("closing <{}> left open at end of input", el.name);
            self.add_to_parent(Child::Element(el));
        }

        Ok(Document::new(self.root_nodes))
    }

    fn consume_tag(&mut self, body: &str, offset: usize) -> Result<()> {
        let kind = classify_tag(body);
        log::trace!("classified as {:?}", kind);

        match kind {
            TagKind::Close(name) => self.consume_element_end_tag(name, offset)?,
            TagKind::ProcessingInstruction(content) => {
                self.add_to_parent(Child::ProcessingInstruction(content.to_string()))
            }
            TagKind::Comment(content) => self.add_to_parent(Child::Comment(content.to_string())),
            TagKind::Cdata(content) => self.consume_cdata(content),
            TagKind::SelfClosing(open) => {
                let mut el = parse_open_tag(open, self.options)?;
                el.self_closed = true;
                self.add_to_parent(Child::Element(el));
            }
            TagKind::Open(open) => {
                let el = parse_open_tag(open, self.options)?;
                self.container_stack.push(el);
            }
        }
        Ok(())
    }

    /// Whitespace-only runs between tags are insignificant
    fn consume_text(&mut self, value: &str) {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return;
        }
        let text = unescape(trimmed, self.options.decode_char_refs).into_owned();
        self.add_to_parent(Child::Text(text));
    }

    /// CDATA is kept verbatim, but only when it has non-whitespace content
    fn consume_cdata(&mut self, content: &str) {
        if content.trim().is_empty() {
            return;
        }
        self.add_to_parent(Child::Text(content.to_string()));
    }

    fn consume_element_end_tag(&mut self, name: &str, offset: usize) -> Result<()> {
        let Some(el) = self.container_stack.pop() else {
            if self.is_strict() {
                return Err(Error::UnexpectedClose {
                    name: name.to_string(),
                    offset,
                });
            }
            log::debug!("ignoring closing tag </{}> at {}: no element is open", name, offset);
            return Ok(());
        };

        if self.is_strict() && el.name != name {
            return Err(Error::MismatchedClose {
                expected: el.name.clone(),
                found: name.to_string(),
                offset,
            });
        }

        self.add_to_parent(Child::Element(el));
        Ok(())
    }

    fn add_to_parent(&mut self, node: Child) {
        match self.container_stack.last_mut() {
            Some(el) => el.children.push(node),
            None => self.root_nodes.push(node),
        }
    }

    fn is_strict(&self) -> bool {
        self.options.unbalanced == UnbalancedTags::Strict
    }
}
