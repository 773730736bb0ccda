//! Parsing and emission of the `search_index.js` literal form.
//!
//! The generator publishes the index as a single JavaScript assignment:
//!
//! ```text
//! var documenterSearchIndex = {"docs":
//! [{"location":"","page":"Home",...}]
//! }
//! ```
//!
//! Parsing strips the assignment wrapper and hands the payload to serde;
//! emission reproduces the same shape under the canonical binding name.

use crate::error::ParseError;
use crate::record::IndexRecord;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

/// Binding name the generator assigns the index to. Parsing accepts any
/// identifier; emission always uses this one.
pub const CANONICAL_BINDING: &str = "documenterSearchIndex";

/// Matches the assignment prefix up to the payload. Tolerates a BOM and
/// leading whitespace; `var` is what the generator emits, but `let`/`const`
/// are accepted since the contract is the payload, not the keyword.
static BINDING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\u{feff}?\s*(?:var|let|const)\s+[A-Za-z_$][A-Za-z0-9_$]*\s*=\s*")
        .expect("binding regex is valid")
});

/// The single-key object the binding is assigned to.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Envelope {
    docs: Vec<IndexRecord>,
}

/// Parses an index literal into its ordered record sequence.
///
/// The payload is bounded at the closing brace of the assigned object; the
/// trailing semicolon is optional, and anything else after the object is
/// rejected.
pub fn parse_index(source: &str) -> Result<Vec<IndexRecord>, ParseError> {
    let m = BINDING_RE.find(source).ok_or(ParseError::MissingBinding)?;
    let payload = &source[m.end()..];

    let end = end_of_object(payload);
    let rest = &payload[end..];
    if !rest.trim_start_matches(';').trim().is_empty() {
        return Err(ParseError::MissingBinding);
    }

    let envelope: Envelope = serde_json::from_str(&payload[..end])?;
    Ok(envelope.docs)
}

/// Finds the byte index one past the closing brace of the leading JSON object.
fn end_of_object(payload: &str) -> usize {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (i, b) in payload.bytes().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            // A close brace at depth 0 means the payload is not an object;
            // cut there and let serde report it.
            b'}' => {
                if depth <= 1 {
                    return i + 1;
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    payload.len()
}

/// Renders records back to the literal textual form.
///
/// Matches the generator's layout: the `docs` key on the first line, the
/// record array on its own line, closing brace and trailing newline.
pub fn emit_index(records: &[IndexRecord]) -> String {
    let docs = serde_json::to_string(records).expect("index records serialize infallibly");
    format!("var {CANONICAL_BINDING} = {{\"docs\":\n{docs}\n}}\n")
}
