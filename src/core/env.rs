//! .env file codec.
//!
//! Reads and writes the flat `KEY="value"` format the stack's compose file
//! consumes. Parsing is permissive (comments, blank lines, optional quotes,
//! last-write-wins duplicates); writing is strict and deterministic (sorted
//! keys, always double-quoted).

use std::path::Path;

use tracing::debug;

use crate::core::types::Env;
use crate::error::{DockhandError, Result};

/// Parse .env text into a key/value mapping.
///
/// Skips blank lines and lines whose first non-space character is `#`.
/// Lines without `=` are ignored. Splits on the first `=`, trims both
/// sides, and removes one layer of matching surrounding quotes from the
/// value. Later duplicate keys overwrite earlier ones.
pub fn parse(text: &str) -> Env {
    let mut env = Env::new();

    for line in text.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            env.insert(key.to_string(), unquote(value.trim()).to_string());
        }
    }

    env
}

/// Remove exactly one layer of surrounding quotes, if the value starts and
/// ends with the same quote character.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Serialize a mapping as .env text: one `KEY="value"` line per key, keys
/// sorted.
///
/// Values containing a double quote or a newline cannot be represented in
/// this format and are rejected rather than escaped.
pub fn serialize(env: &Env) -> Result<String> {
    let mut out = String::new();

    for (key, value) in env {
        if value.contains('"') || value.contains('\n') {
            return Err(DockhandError::Unencodable(key.clone()));
        }
        out.push_str(&format!("{}=\"{}\"\n", key, value));
    }

    Ok(out)
}

/// Load and parse an env file, returning an empty mapping if it does not
/// exist.
pub fn load(path: &Path) -> Result<Env> {
    if !path.exists() {
        debug!(path = %path.display(), "no env file, starting empty");
        return Ok(Env::new());
    }

    let text = std::fs::read_to_string(path)?;
    let env = parse(&text);
    debug!(path = %path.display(), entries = env.len(), "loaded env file");
    Ok(env)
}
