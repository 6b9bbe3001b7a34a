//! Path resolution
//!
//! Re-descends a document along a path string and renders what it finds.
//! Resolution never fails loudly: anything that cannot be located yields
//! [`NOT_FOUND`].

use std::borrow::Cow;

use serde_json::Value;

use super::path::{self, Segment};
use crate::json::{self, Document};

/// Returned for any path that does not resolve
pub const NOT_FOUND: &str = "Query failed. No matching data found.";

/// Outcome of evaluating a path against a value
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<'a> {
    /// One value (borrowed from the document, or computed for `#`)
    Single(Cow<'a, Value>),
    /// One rendered line per matching array element, in element order
    Projection(Vec<String>),
}

impl Resolved<'_> {
    /// Display form: pretty-printed single value, or newline-joined projection
    pub fn render(&self) -> String {
        match self {
            Resolved::Single(value) => json::render_value(value),
            Resolved::Projection(items) => items.join("\n"),
        }
    }
}

/// Resolve a path against a parsed document
///
/// - `""` is the whole document, pretty-printed
/// - a path containing `[]` projects the rest of the path over every element
///   of the array it names; elements missing the rest are skipped
/// - `name[N]` (or `name.N`) picks one element
/// - `name.#` is the array's length
/// - anything else is a plain member lookup
pub fn resolve(query: &str, document: &Document) -> String {
    if query.is_empty() {
        return document.pretty();
    }

    match lookup(query, document.root()) {
        Some(resolved) => resolved.render(),
        None => NOT_FOUND.to_string(),
    }
}

/// Resolve a path against raw document bytes
///
/// Unparseable bytes yield the raw text for the empty path and [`NOT_FOUND`]
/// for everything else.
pub fn resolve_bytes(query: &str, bytes: &[u8]) -> String {
    match Document::parse(bytes.to_vec()) {
        Ok(document) => resolve(query, &document),
        Err(_) if query.is_empty() => String::from_utf8_lossy(bytes).into_owned(),
        Err(_) => NOT_FOUND.to_string(),
    }
}

/// Evaluate a path string against a value without rendering
pub fn lookup<'a>(query: &str, root: &'a Value) -> Option<Resolved<'a>> {
    let segments = path::parse(query).ok()?;
    evaluate(root, &segments)
}

fn evaluate<'a>(value: &'a Value, segments: &[Segment]) -> Option<Resolved<'a>> {
    let mut current = value;

    for (position, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Field(name) => current = member(current, name)?,
            Segment::Index(index) => current = current.as_array()?.get(*index)?,
            Segment::Wildcard => {
                return project(current, &segments[position + 1..]).map(Resolved::Projection);
            }
            Segment::Count => {
                // `#` only ever ends a path
                if position + 1 != segments.len() {
                    return None;
                }
                let len = current.as_array()?.len();
                return Some(Resolved::Single(Cow::Owned(Value::from(len))));
            }
        }
    }

    Some(Resolved::Single(Cow::Borrowed(current)))
}

/// Object member by name; an all-digit name also indexes into arrays
fn member<'a>(value: &'a Value, name: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(name),
        Value::Array(items) if name.bytes().all(|b| b.is_ascii_digit()) => {
            items.get(name.parse::<usize>().ok()?)
        }
        _ => None,
    }
}

fn project(value: &Value, rest: &[Segment]) -> Option<Vec<String>> {
    let items = value.as_array()?;

    let mut projected = Vec::with_capacity(items.len());
    for item in items {
        match evaluate(item, rest) {
            Some(Resolved::Single(found)) => projected.push(json::render_compact(&found)),
            Some(Resolved::Projection(nested)) => projected.extend(nested),
            None => {}
        }
    }

    if projected.is_empty() {
        None
    } else {
        Some(projected)
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod resolver_tests;
