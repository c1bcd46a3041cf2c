//! XML Tokens
//!
//! The tokenizer emits text runs and raw tag bodies in strict alternation.
//! A tag body is only classified when the tree builder consumes it.

use serde::Serialize;

use crate::chars;

/// Token types for XML parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum TokenType {
    Text,
    Tag,
}

/// A text run or the raw text between `<` and `>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Token<'a> {
    /// Text between two tags, possibly empty or whitespace-only
    Text { value: &'a str, offset: usize },
    /// Tag body without its angle brackets; `offset` points at the `<`
    Tag { body: &'a str, offset: usize },
}

impl<'a> Token<'a> {
    pub fn token_type(&self) -> TokenType {
        match self {
            Token::Text { .. } => TokenType::Text,
            Token::Tag { .. } => TokenType::Tag,
        }
    }

    /// Raw text carried by the token
    pub fn value(&self) -> &'a str {
        match self {
            Token::Text { value, .. } => value,
            Token::Tag { body, .. } => body,
        }
    }

    pub fn offset(&self) -> usize {
        match self {
            Token::Text { offset, .. } | Token::Tag { offset, .. } => *offset,
        }
    }
}

/// What a tag body stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TagKind<'a> {
    /// `</name>`, holding the name
    Close(&'a str),
    /// `<?content?>`
    ProcessingInstruction(&'a str),
    /// `<!content>`, holding everything after the `!`
    Comment(&'a str),
    /// `<![CDATA[content]]>`
    Cdata(&'a str),
    /// `<body/>`, holding the body without the trailing slash
    SelfClosing(&'a str),
    /// `<body>`
    Open(&'a str),
}

const CDATA_START: &str = "[CDATA[";
const CDATA_END: &str = "]]";

/// Classify a tag body by its first (and for self-closing tags, last) character
pub fn classify_tag(body: &str) -> TagKind<'_> {
    if let Some(name) = body.strip_prefix(chars::SLASH) {
        return TagKind::Close(name.trim());
    }
    if let Some(rest) = body.strip_prefix(chars::QUESTION) {
        return TagKind::ProcessingInstruction(rest.strip_suffix(chars::QUESTION).unwrap_or(rest));
    }
    if let Some(rest) = body.strip_prefix(chars::BANG) {
        return match rest
            .strip_prefix(CDATA_START)
            .and_then(|inner| inner.strip_suffix(CDATA_END))
        {
            Some(content) => TagKind::Cdata(content),
            None => TagKind::Comment(rest),
        };
    }
    match body.strip_suffix(chars::SLASH) {
        Some(open) => TagKind::SelfClosing(open),
        None => TagKind::Open(body),
    }
}
