//! Path grammar shared by the indexer and the resolver
//!
//! A path is a sequence of segments joined into a string:
//! `user.name`, `items[]`, `items[].price`, `items[0].price`, `items.#`.

use std::fmt::Write;

use thiserror::Error;

/// Marker for "every element of this array"
pub const WILDCARD: &str = "[]";

/// Reserved segment for an array's length. A member literally named `#`
/// cannot be addressed.
pub const COUNT_MARKER: &str = "#";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Object member, or array element when the name is all digits
    Field(String),
    /// `[]`
    Wildcard,
    /// `[N]`
    Index(usize),
    /// `.#`
    Count,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("empty field name at position {0}")]
    EmptyField(usize),

    #[error("unclosed bracket at position {0}")]
    UnclosedBracket(usize),

    #[error("invalid array index '{0}'")]
    InvalidIndex(String),

    #[error("unexpected '{0}' at position {1}")]
    UnexpectedChar(char, usize),
}

/// Parse a path string into segments
///
/// The empty path parses to no segments (the whole document). A path may start
/// with a bracket group when the document root is an array (`[].id`).
pub fn parse(path: &str) -> Result<Vec<Segment>, PathError> {
    let mut segments = Vec::new();
    if path.is_empty() {
        return Ok(segments);
    }

    let bytes = path.as_bytes();
    let len = bytes.len();
    let mut pos = 0;

    loop {
        let start = pos;
        while pos < len && !matches!(bytes[pos], b'.' | b'[' | b']') {
            pos += 1;
        }

        let name = &path[start..pos];
        if name == COUNT_MARKER {
            segments.push(Segment::Count);
        } else if !name.is_empty() {
            segments.push(Segment::Field(name.to_string()));
        } else if !(start == 0 && pos < len && bytes[pos] == b'[') {
            return Err(PathError::EmptyField(start));
        }

        while pos < len && bytes[pos] == b'[' {
            let close = path[pos..]
                .find(']')
                .map(|offset| pos + offset)
                .ok_or(PathError::UnclosedBracket(pos))?;
            segments.push(parse_bracket(&path[pos + 1..close])?);
            pos = close + 1;
        }

        if pos == len {
            break;
        }

        match bytes[pos] {
            b'.' => pos += 1,
            other => return Err(PathError::UnexpectedChar(other as char, pos)),
        }
    }

    Ok(segments)
}

fn parse_bracket(inner: &str) -> Result<Segment, PathError> {
    if inner.is_empty() {
        return Ok(Segment::Wildcard);
    }
    if !inner.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PathError::InvalidIndex(inner.to_string()));
    }
    inner
        .parse::<usize>()
        .map(Segment::Index)
        .map_err(|_| PathError::InvalidIndex(inner.to_string()))
}

/// Render segments back into a path string
pub fn render(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Field(name) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(name);
            }
            Segment::Count => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(COUNT_MARKER);
            }
            Segment::Wildcard => out.push_str(WILDCARD),
            Segment::Index(index) => {
                let _ = write!(out, "[{}]", index);
            }
        }
    }
    out
}

/// Whether an object member name can be written in a path
pub fn is_addressable_field(name: &str) -> bool {
    !name.is_empty() && name != COUNT_MARKER && !name.contains(['.', '[', ']'])
}

/// `prefix.key`, or just `key` at the root
pub fn join_field(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

pub fn join_wildcard(prefix: &str) -> String {
    format!("{}{}", prefix, WILDCARD)
}

pub fn join_index(prefix: &str, index: usize) -> String {
    format!("{}[{}]", prefix, index)
}

pub fn join_count(prefix: &str) -> String {
    join_field(prefix, COUNT_MARKER)
}

/// Bare wildcard leaves (`items[]`) are not offered as candidates
pub fn ends_with_wildcard(path: &str) -> bool {
    path.ends_with(WILDCARD)
}
