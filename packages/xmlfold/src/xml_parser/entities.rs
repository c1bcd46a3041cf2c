//! XML Entity Decoding
//!
//! Handles the five predefined entities (`&amp; &lt; &gt; &apos; &quot;`)
//! and, when asked, numeric character references (`&#123; &#x7B;`).
//! Anything else is left exactly as written.

use std::borrow::Cow;
use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::chars;

/// Predefined XML entities
static NAMED_ENTITIES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("amp", "&");
    map.insert("lt", "<");
    map.insert("gt", ">");
    map.insert("apos", "'");
    map.insert("quot", "\"");
    map
});

static ENTITY_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#x[0-9A-Fa-f]+|#[0-9]+|[A-Za-z][A-Za-z0-9]*);").unwrap());

/// Decode entity references in text or attribute values
///
/// Returns Borrowed when the input holds no `&`.
pub fn unescape(input: &str, decode_char_refs: bool) -> Cow<'_, str> {
    if !input.contains(chars::AMPERSAND) {
        return Cow::Borrowed(input);
    }
    ENTITY_REGEXP.replace_all(input, |caps: &Captures| {
        let whole = &caps[0];
        decode_entity(&caps[1], decode_char_refs).unwrap_or_else(|| whole.to_string())
    })
}

/// Decode a single entity body (the text between `&` and `;`)
fn decode_entity(entity: &str, decode_char_refs: bool) -> Option<String> {
    match entity.strip_prefix(chars::HASH) {
        Some(numeric) if decode_char_refs => decode_numeric(numeric).map(String::from),
        Some(_) => None,
        None => NAMED_ENTITIES.get(entity).map(|s| s.to_string()),
    }
}

/// Decode `x7B` or `123` into the referenced character
fn decode_numeric(reference: &str) -> Option<char> {
    let code = match reference.strip_prefix('x') {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => reference.parse::<u32>().ok()?,
    };
    // NUL is not an XML character
    if code == 0 {
        return None;
    }
    char::from_u32(code)
}
