#![allow(dead_code)]

//! Test Utilities
//!
//! Token and tree humanizers shared by the integration tests

use xmlfold::xml_parser::ast::{Child, Document, Element};
use xmlfold::xml_parser::lexer::tokenize;
use xmlfold::xml_parser::tokens::{classify_tag, TagKind, Token};
use xmlfold::{ParseOptions, Parser};

/// Tokenize and return `[type, value]` rows
pub fn tokenize_and_humanize_parts(input: &str) -> Vec<Vec<String>> {
    tokenize(input)
        .iter()
        .map(|token| match token {
            Token::Text { value, .. } => vec!["TEXT".to_string(), value.to_string()],
            Token::Tag { body, .. } => vec!["TAG".to_string(), body.to_string()],
        })
        .collect()
}

/// Tokenize and return `[kind, content]` rows for tags only
pub fn tokenize_and_humanize_tags(input: &str) -> Vec<Vec<String>> {
    tokenize(input)
        .iter()
        .filter_map(|token| match token {
            Token::Tag { body, .. } => Some(humanize_tag(classify_tag(body))),
            Token::Text { .. } => None,
        })
        .collect()
}

fn humanize_tag(kind: TagKind<'_>) -> Vec<String> {
    let (name, content) = match kind {
        TagKind::Close(c) => ("CLOSE", c),
        TagKind::ProcessingInstruction(c) => ("PI", c),
        TagKind::Comment(c) => ("COMMENT", c),
        TagKind::Cdata(c) => ("CDATA", c),
        TagKind::SelfClosing(c) => ("SELF_CLOSING", c),
        TagKind::Open(c) => ("OPEN", c),
    };
    vec![name.to_string(), content.to_string()]
}

/// Parse with default options and humanize the tree
pub fn parse_and_humanize(input: &str) -> Vec<Vec<String>> {
    let document = Parser::new(ParseOptions::default())
        .parse(input)
        .expect("lenient parsing never fails");
    humanize_document(&document)
}

/// Flatten a document into `[kind, value, depth]` rows; attributes follow
/// their element as `[Attribute, key=value, depth]`
pub fn humanize_document(document: &Document) -> Vec<Vec<String>> {
    let mut humanizer = Humanizer::default();
    for child in &document.children {
        humanizer.visit(child);
    }
    humanizer.result
}

#[derive(Default)]
struct Humanizer {
    result: Vec<Vec<String>>,
    el_depth: usize,
}

impl Humanizer {
    fn visit(&mut self, child: &Child) {
        match child {
            Child::Element(el) => self.visit_element(el),
            Child::Text(text) => self.push("Text", text),
            Child::ProcessingInstruction(content) => self.push("ProcessingInstruction", content),
            Child::Comment(content) => self.push("Comment", content),
        }
    }

    fn visit_element(&mut self, el: &Element) {
        let kind = if el.self_closed {
            "SelfClosedElement"
        } else {
            "Element"
        };
        self.push(kind, &el.name);
        self.el_depth += 1;
        for (key, value) in &el.attributes {
            let rendered = match value {
                Some(v) => format!("{}={}", key, v),
                None => key.clone(),
            };
            self.push("Attribute", &rendered);
        }
        for child in &el.children {
            self.visit(child);
        }
        self.el_depth -= 1;
    }

    fn push(&mut self, kind: &str, value: &str) {
        self.result
            .push(vec![kind.to_string(), value.to_string(), self.el_depth.to_string()]);
    }
}
