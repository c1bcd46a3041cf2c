//! Object Folder
//!
//! Collapses the intermediate tree into a `serde_json::Value`.
//!
//! An element's *child object* is chosen by the first matching rule:
//! 1. more than one text child: attributes plus every child, in order,
//!    as a sequence under `""`
//! 2. exactly one child and no attributes: that child's folded value
//! 3. no children and no attributes: `null` when self-closed, else `""`
//! 4. otherwise a mapping of attributes and children keyed by name, where
//!    repeated keys turn into sequences
//!
//! An element folds to `{name: child object}`; the document folds to its
//! child object directly.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::xml_parser::ast::{Attributes, Child, Document, Element, TEXT_KEY};

/// Caller hook that may replace values as they are assembled
///
/// Called post-order with:
/// - each attribute value and its key,
/// - each text child with key `""`,
/// - each element's child object with the element name, and processing
///   instruction / comment contents with `"?"` / `"!"`,
/// - finally the whole document value with key `""`.
pub trait Reviver {
    fn revive(&mut self, key: &str, value: Value) -> Value;
}

impl<F> Reviver for F
where
    F: FnMut(&str, Value) -> Value,
{
    fn revive(&mut self, key: &str, value: Value) -> Value {
        self(key, value)
    }
}

/// Fold a document, optionally passing values through a reviver
pub fn fold_document(document: &Document, reviver: Option<&mut dyn Reviver>) -> Value {
    Folder::new(reviver).fold_document(document)
}

/// Folder holding the reviver for one call
///
/// Walks the tree post-order with an explicit stack of frames, so nesting
/// depth is not bounded by the call stack.
pub struct Folder<'r> {
    reviver: Option<&'r mut dyn Reviver>,
}

impl<'r> Folder<'r> {
    pub fn new(reviver: Option<&'r mut dyn Reviver>) -> Self {
        Folder { reviver }
    }

    pub fn fold_document(&mut self, document: &Document) -> Value {
        let root = self.open_frame(None, &document.children, &Attributes::new(), false);
        self.run(root)
    }

    /// `{name: child object}`
    pub fn fold_element(&mut self, el: &Element) -> Value {
        let root = self.open_frame(Some(&el.name), &el.children, &el.attributes, el.self_closed);
        let object = self.run(root);
        wrap(&el.name, object)
    }

    /// Revives the attributes and picks the shape rule for a child list
    fn open_frame<'t>(
        &mut self,
        name: Option<&'t str>,
        children: &'t [Child],
        attributes: &Attributes,
        self_closed: bool,
    ) -> Frame<'t> {
        let mut entries = Entries::default();
        for (key, value) in attributes {
            let value = value.clone().map_or(Value::Null, Value::String);
            let value = self.revive(key, value);
            entries.push(key, value);
        }

        let shape = if children.iter().filter(|c| c.is_text()).count() > 1 {
            Shape::Mixed(Vec::with_capacity(children.len()))
        } else if attributes.is_empty() && children.len() == 1 {
            Shape::Single(None)
        } else if attributes.is_empty() && children.is_empty() {
            Shape::Empty { self_closed }
        } else {
            Shape::Mapping
        };

        Frame {
            name,
            children,
            next: 0,
            shape,
            entries,
        }
    }

    fn run(&mut self, root: Frame<'_>) -> Value {
        let mut stack = vec![root];

        while let Some(frame) = stack.last_mut() {
            let children = frame.children;
            if let Some(child) = children.get(frame.next) {
                frame.next += 1;
                match child {
                    Child::Element(el) => {
                        let nested = self.open_frame(
                            Some(&el.name),
                            &el.children,
                            &el.attributes,
                            el.self_closed,
                        );
                        stack.push(nested);
                    }
                    Child::Text(text) | Child::ProcessingInstruction(text) | Child::Comment(text) => {
                        let value = self.revive(child.key(), Value::String(text.clone()));
                        frame.accept(child, value);
                    }
                }
                continue;
            }

            // Every child folded: close the frame and hand it to its parent
            let Some(done) = stack.pop() else { break };
            let key = done.name.unwrap_or(TEXT_KEY);
            let object = done.finish();
            let value = self.revive(key, object);
            match stack.last_mut() {
                Some(parent) => {
                    let children = parent.children;
                    parent.accept(&children[parent.next - 1], value);
                }
                None => return value,
            }
        }

        unreachable!("the root frame returns its value")
    }

    fn revive(&mut self, key: &str, value: Value) -> Value {
        match self.reviver.as_deref_mut() {
            Some(reviver) => reviver.revive(key, value),
            None => value,
        }
    }
}

fn wrap(name: &str, object: Value) -> Value {
    let mut map = Map::new();
    map.insert(name.to_string(), object);
    Value::Object(map)
}

/// Shape rule chosen for a child list
enum Shape {
    /// Rule 1: children collected as a sequence under `""`
    Mixed(Vec<Value>),
    /// Rule 2: the one child's folded value
    Single(Option<Value>),
    /// Rule 3
    Empty { self_closed: bool },
    /// Rule 4
    Mapping,
}

/// An element (or the document, with no name) whose children are being folded
struct Frame<'t> {
    name: Option<&'t str>,
    children: &'t [Child],
    next: usize,
    shape: Shape,
    entries: Entries,
}

impl<'t> Frame<'t> {
    /// Takes the folded value of one child
    ///
    /// Elements arrive as their revived child object; they are wrapped only
    /// when they stand alone.
    fn accept(&mut self, child: &Child, value: Value) {
        match &mut self.shape {
            Shape::Mixed(items) => items.push(value),
            Shape::Single(slot) => {
                *slot = Some(match child {
                    Child::Element(el) => wrap(&el.name, value),
                    _ => value,
                })
            }
            Shape::Empty { .. } => {}
            Shape::Mapping => self.entries.push(child.key(), value),
        }
    }

    fn finish(self) -> Value {
        match self.shape {
            Shape::Mixed(items) => {
                let mut entries = self.entries;
                entries.push(TEXT_KEY, Value::Array(items));
                entries.into_value()
            }
            Shape::Single(value) => value.unwrap_or(Value::Null),
            Shape::Empty { self_closed: true } => Value::Null,
            Shape::Empty { .. } => Value::String(String::new()),
            Shape::Mapping => self.entries.into_value(),
        }
    }
}

/// Mapping under construction; a key seen more than once becomes a sequence
#[derive(Default)]
struct Entries {
    entries: IndexMap<String, Vec<Value>>,
}

impl Entries {
    fn push(&mut self, key: &str, value: Value) {
        match self.entries.get_mut(key) {
            Some(values) => values.push(value),
            None => {
                self.entries.insert(key.to_string(), vec![value]);
            }
        }
    }

    fn into_value(self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .into_iter()
            .map(|(key, mut values)| {
                let value = if values.len() == 1 {
                    values.remove(0)
                } else {
                    Value::Array(values)
                };
                (key, value)
            })
            .collect();
        Value::Object(map)
    }
}
