//! JSON document handling
//!
//! Owns the raw input bytes together with the parsed tree, and provides the
//! renderings shared by the path index and the resolver.

use serde_json::Value;

use crate::error::JexError;

/// A parsed JSON document.
///
/// The raw bytes are kept alongside the tree so the whole-document view can
/// fall back to the original text if re-serialization ever fails.
#[derive(Debug, Clone)]
pub struct Document {
    raw: Vec<u8>,
    root: Value,
}

impl Document {
    /// Parse raw bytes into a document
    ///
    /// # Returns
    /// * `Ok(Document)` - Parsed document
    /// * `Err(JexError::InvalidJson)` - If the bytes are not a single valid JSON value
    pub fn parse(bytes: impl Into<Vec<u8>>) -> Result<Self, JexError> {
        let raw = bytes.into();
        let root = serde_json::from_slice::<Value>(&raw)
            .map_err(|e| JexError::InvalidJson(e.to_string()))?;
        Ok(Self { raw, root })
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Size of the raw input in bytes
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Whole document with 2-space indentation, or the raw text if that fails
    pub fn pretty(&self) -> String {
        to_pretty(&self.root).unwrap_or_else(|| String::from_utf8_lossy(&self.raw).into_owned())
    }
}

/// Serialize with stable 2-space indentation
pub fn to_pretty(value: &Value) -> Option<String> {
    serde_json::to_string_pretty(value).ok()
}

/// Render a single resolved value for display
///
/// Objects and arrays are pretty-printed (compact form if that fails),
/// scalars use their natural text form.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Object(_) | Value::Array(_) => {
            to_pretty(value).unwrap_or_else(|| value.to_string())
        }
        _ => render_scalar(value),
    }
}

/// Render a value on a single line
///
/// Used for projection entries, where each element must stay on its own line.
pub fn render_compact(value: &Value) -> String {
    match value {
        Value::Object(_) | Value::Array(_) => value.to_string(),
        _ => render_scalar(value),
    }
}

/// Natural text form of a scalar: strings verbatim, numbers in canonical
/// decimal form, `true`/`false`, `null`
pub fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Object(_) | Value::Array(_) => value.to_string(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod json_tests;
