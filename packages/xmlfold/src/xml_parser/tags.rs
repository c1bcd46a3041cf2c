//! Open Tag Parsing
//!
//! Turns the body of an open tag (`name key="value" flag`) into an element
//! with its attribute map.
//!
//! Spaces around `=` are not supported: `x = "1"` is read as three runs,
//! giving the attributes `x`, `""` and `"1"` (quotes included).

use once_cell::sync::Lazy;
use regex::Regex;

use super::ast::{Attributes, Element};
use super::entities::unescape;
use crate::chars;
use crate::config::{DuplicateAttributes, ParseOptions};
use crate::error::{Error, Result};

/// Whitespace-delimited run; quoted sections may contain whitespace
static TAG_RUN_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:"[^"]*"|'[^']*'|\S)+"#).unwrap());

/// Parse an open tag body into an element without children
pub fn parse_open_tag(body: &str, options: &ParseOptions) -> Result<Element> {
    let mut runs = TAG_RUN_REGEXP.find_iter(body).map(|m| m.as_str());
    let name = runs.next().unwrap_or_default().to_string();
    let mut attributes = Attributes::new();

    for run in runs {
        let (key, value) = parse_attribute(run, options.decode_char_refs);
        insert_attribute(&mut attributes, &name, key, value, options.duplicate_attributes)?;
    }

    Ok(Element::new(name, attributes))
}

/// Split `key=value` or a bare `key` into an attribute entry
fn parse_attribute(run: &str, decode_char_refs: bool) -> (String, Option<String>) {
    match run.split_once(chars::EQ) {
        Some((key, value)) => (
            unescape(key, decode_char_refs).into_owned(),
            Some(unescape(strip_quotes(value), decode_char_refs).into_owned()),
        ),
        None => (unescape(run, decode_char_refs).into_owned(), None),
    }
}

/// Remove one layer of matching single or double quotes
fn strip_quotes(value: &str) -> &str {
    let mut chars_iter = value.chars();
    match (chars_iter.next(), chars_iter.next_back()) {
        (Some(first), Some(last)) if first == last && chars::is_quote(first) => {
            &value[1..value.len() - 1]
        }
        _ => value,
    }
}

fn insert_attribute(
    attributes: &mut Attributes,
    element: &str,
    key: String,
    value: Option<String>,
    policy: DuplicateAttributes,
) -> Result<()> {
    if !attributes.contains_key(&key) {
        attributes.insert(key, value);
        return Ok(());
    }

    match policy {
        DuplicateAttributes::LastWins => {
            log::debug!("attribute \"{}\" repeated on <{}>, keeping last", key, element);
            attributes.insert(key, value);
            Ok(())
        }
        DuplicateAttributes::FirstWins => {
            log::debug!("attribute \"{}\" repeated on <{}>, keeping first", key, element);
            Ok(())
        }
        DuplicateAttributes::Error => Err(Error::DuplicateAttribute {
            element: element.to_string(),
            key,
        }),
    }
}
