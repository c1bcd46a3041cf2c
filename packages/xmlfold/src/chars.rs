/*
 * Character Codes
 *
 * Markup characters recognised by the tokenizer and the open-tag parser
 */

//! Character constants used throughout the parser

// Markup delimiters
pub const SLASH: char = '/';
pub const QUESTION: char = '?';
pub const BANG: char = '!';
pub const EQ: char = '=';

// Quotes
pub const DQ: char = '"';
pub const SQ: char = '\'';

// Entity references
pub const AMPERSAND: char = '&';
pub const HASH: char = '#';

/// Check if character is an attribute value quote
pub fn is_quote(ch: char) -> bool {
    ch == SQ || ch == DQ
}
