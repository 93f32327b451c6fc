use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Year label to sorted filenames
///
/// Backed by a `BTreeMap`, so keys always serialize in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    years: BTreeMap<String, Vec<String>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the files for one year, sorting them first
    ///
    /// Empty lists are not stored; a year only appears when it has at least one file.
    pub fn insert(&mut self, year: impl Into<String>, mut files: Vec<String>) {
        if files.is_empty() {
            return;
        }
        files.sort();
        self.years.insert(year.into(), files);
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn years(&self) -> impl Iterator<Item = &str> {
        self.years.keys().map(String::as_str)
    }

    pub fn files(&self, year: &str) -> Option<&[String]> {
        self.years.get(year).map(Vec::as_slice)
    }

    /// Total number of files across all years
    pub fn file_count(&self) -> usize {
        self.years.values().map(Vec::len).sum()
    }

    /// Compact JSON object, keys in order
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize catalog")
    }

    /// JSON text that is safe to paste inside an inline `<script>` element
    ///
    /// Characters that could end the element or open markup are emitted as `\uXXXX`
    /// escapes, so the result parses as the same JSON value and the same JS literal.
    pub fn to_script_literal(&self) -> Result<String> {
        let json = self.to_json()?;
        Ok(escape_for_script(&json))
    }
}

/// A single string as a JSON literal that is safe inside an inline `<script>`
pub fn script_string_literal(text: &str) -> Result<String> {
    let json = serde_json::to_string(text).context("Failed to serialize string literal")?;
    Ok(escape_for_script(&json))
}

/// Rewrite `<`, `>`, `&`, U+2028 and U+2029 as `\uXXXX`
///
/// Only valid when the input is serialized JSON: those characters can only occur
/// inside string literals, where a unicode escape is equivalent.
fn escape_for_script(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for ch in json.chars() {
        match ch {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out
}
