//! Translation catalog: a nested JSON tree of language tables.
//!
//! Internal nodes map segment names to child nodes. A node whose direct
//! properties include at least one plain string is a leaf, and its string
//! properties map language codes to translated text:
//!
//! ```json
//! { "demo": { "signin": { "en": "Sign In", "ko": "로그인" } } }
//! ```
//!
//! Here `demo` is internal and `demo.signin` is a leaf. The root is always
//! treated as internal. Values that are neither objects nor strings are
//! skipped by enumeration and ignored by text lookup.

use std::{
    collections::{BTreeSet, HashSet},
    fs,
    path::Path,
};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

mod key_path;

pub use key_path::{KeyPath, SEPARATOR};

/// Sample catalog shipped with the crate.
const DEMO_CATALOG: &str = include_str!("../../assets/demo.json");

/// Write-once translation tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    root: Map<String, Value>,
}

/// A catalog node reached by a key path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    Internal(&'a Map<String, Value>),
    Leaf(Leaf<'a>),
}

impl<'a> Node<'a> {
    pub fn as_leaf(&self) -> Option<Leaf<'a>> {
        match self {
            Node::Leaf(leaf) => Some(*leaf),
            Node::Internal(_) => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }
}

/// A language -> text table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leaf<'a> {
    entries: &'a Map<String, Value>,
}

impl<'a> Leaf<'a> {
    /// Text for `language`, if the leaf has a string entry for it.
    pub fn text(&self, language: &str) -> Option<&'a str> {
        self.entries.get(language).and_then(Value::as_str)
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.text(language).is_some()
    }

    /// Language codes with a string entry, in source order.
    pub fn languages(self) -> impl Iterator<Item = &'a str> {
        self.entries
            .iter()
            .filter(|(_, value)| value.is_string())
            .map(|(language, _)| language.as_str())
    }
}

fn is_leaf(node: &Map<String, Value>) -> bool {
    node.values().any(Value::is_string)
}

fn classify(value: &Value) -> Option<Node<'_>> {
    match value {
        Value::Object(map) if is_leaf(map) => Some(Node::Leaf(Leaf { entries: map })),
        Value::Object(map) => Some(Node::Internal(map)),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Catalog {
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => bail!(
                "Catalog root must be a JSON object, found {}.",
                value_kind(&other)
            ),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(content).context("Failed to parse catalog JSON")?;
        Self::from_value(value)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {:?}", path))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Invalid catalog file: {:?}", path))
    }

    /// The embedded sample catalog (`demo.*` keys in English and Korean).
    pub fn demo() -> Result<Self> {
        Self::from_json_str(DEMO_CATALOG).context("Embedded demo catalog is invalid")
    }

    /// True if the catalog has no leaves at all.
    pub fn is_empty(&self) -> bool {
        self.key_paths().is_empty()
    }

    /// Follow a dotted key from the root.
    ///
    /// Returns `None` if a segment is absent or steps through a value that is
    /// not an object. The empty key returns the root.
    pub fn get(&self, key: &str) -> Option<Node<'_>> {
        self.get_path(&KeyPath::parse(key))
    }

    pub fn get_path(&self, path: &KeyPath) -> Option<Node<'_>> {
        let Some((last, parents)) = path.segments().split_last() else {
            return Some(Node::Internal(&self.root));
        };

        let mut current = &self.root;
        for segment in parents {
            match current.get(segment)? {
                Value::Object(map) => current = map,
                _ => return None,
            }
        }
        classify(current.get(last)?)
    }

    /// Enumerate every leaf key path, depth first, in source order.
    ///
    /// Paths are deduplicated by their rendered form; the first occurrence
    /// wins when a segment containing `.` collides with a nested path.
    pub fn key_paths(&self) -> Vec<KeyPath> {
        let mut seen = HashSet::new();
        let mut results = Vec::new();
        collect_key_paths(&self.root, &KeyPath::root(), &mut seen, &mut results);
        results
    }

    /// Every language code that appears in any leaf, sorted.
    pub fn languages(&self) -> Vec<String> {
        let languages: BTreeSet<&str> = self
            .key_paths()
            .iter()
            .filter_map(|path| self.get_path(path).and_then(|node| node.as_leaf()))
            .flat_map(|leaf| leaf.languages())
            .collect();
        languages.into_iter().map(str::to_string).collect()
    }
}

fn collect_key_paths(
    node: &Map<String, Value>,
    prefix: &KeyPath,
    seen: &mut HashSet<String>,
    results: &mut Vec<KeyPath>,
) {
    for (segment, value) in node {
        let Value::Object(child) = value else {
            continue;
        };
        let path = prefix.child(segment);
        if is_leaf(child) {
            if seen.insert(path.to_string()) {
                results.push(path);
            } else {
                tracing::warn!(key = %path, "duplicate key path in catalog, keeping the first");
            }
        } else {
            collect_key_paths(child, &path, seen, results);
        }
    }
}
