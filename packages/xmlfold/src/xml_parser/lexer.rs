//! XML Lexer
//!
//! Splits input into alternating text runs and tag bodies with one
//! markup-boundary pattern. The pattern steps over `<` and `>` that sit
//! inside quoted attribute values, comments, CDATA sections and
//! processing instructions.

use once_cell::sync::Lazy;
use regex::Regex;

use super::tokens::Token;

/// Matches one piece of markup, brackets included.
///
/// Alternatives are tried in order: comment, CDATA, processing
/// instruction, then any other tag whose quoted values may hold `<`/`>`.
/// A `<` that never reaches a `>` stays part of the surrounding text.
static MARKUP_REGEXP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)<(?:!--.*?--|!\[CDATA\[.*?\]\]|\?.*?\?|(?:[^<>"']|"[^"]*"|'[^']*')*)>"#,
    )
    .unwrap()
});

/// Tokenize input into `Text, Tag, Text, ..., Tag, Text`
///
/// The result always starts and ends with a text token, so a document
/// with `n` tags yields `2n + 1` tokens.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    for markup in MARKUP_REGEXP.find_iter(input) {
        tokens.push(Token::Text {
            value: &input[cursor..markup.start()],
            offset: cursor,
        });
        tokens.push(Token::Tag {
            body: &input[markup.start() + 1..markup.end() - 1],
            offset: markup.start(),
        });
        cursor = markup.end();
    }

    tokens.push(Token::Text {
        value: &input[cursor..],
        offset: cursor,
    });

    log::trace!("tokenized {} bytes into {} tokens", input.len(), tokens.len());
    tokens
}
