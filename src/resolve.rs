//! Resolution of catalog leaves against an active language.
//!
//! Every leaf resolves to the active language's text when present, otherwise
//! to the fallback language's text. A leaf without either is a malformed
//! catalog and fails the whole pass.

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use serde_json::{Map, Value};

use crate::catalog::{Catalog, KeyPath};

/// Language used when a leaf has no entry for the active language.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Where a resolved text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    Active,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub key: String,
    pub text: String,
    pub source: TextSource,
}

/// The flat key -> text mapping produced by one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub language: String,
    pub entries: Vec<ResolvedEntry>,
}

impl Resolution {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedEntry> {
        self.entries.iter()
    }

    /// Number of entries that used the fallback language.
    pub fn fallback_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.source == TextSource::Fallback)
            .count()
    }

    /// Key -> text as a JSON object, in resolution order.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|entry| (entry.key.clone(), Value::String(entry.text.clone())))
            .collect();
        Value::Object(map)
    }
}

/// Resolve every leaf of `catalog` for `language`.
///
/// Fails on the first leaf that has neither `language` nor `fallback`.
pub fn resolve(catalog: &Catalog, language: &str, fallback: &str) -> Result<Resolution> {
    let mut entries = Vec::new();

    for path in catalog.key_paths() {
        let Some(leaf) = catalog.get_path(&path).and_then(|node| node.as_leaf()) else {
            bail!("Key '{}' does not resolve to a translation table.", path);
        };

        let (text, source) = match leaf.text(language) {
            Some(text) => (text, TextSource::Active),
            None => match leaf.text(fallback) {
                Some(text) => {
                    tracing::debug!(
                        key = %path,
                        language,
                        fallback,
                        "translation missing, using fallback"
                    );
                    (text, TextSource::Fallback)
                }
                None => bail!(
                    "Key '{}' has no '{}' translation and no '{}' fallback.",
                    path,
                    language,
                    fallback
                ),
            },
        };

        entries.push(ResolvedEntry {
            key: path.to_string(),
            text: text.to_string(),
            source,
        });
    }

    let resolution = Resolution {
        language: language.to_string(),
        entries,
    };
    tracing::debug!(
        language,
        entries = resolution.len(),
        fallbacks = resolution.fallback_count(),
        "resolved catalog"
    );
    Ok(resolution)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslation {
    pub key: String,
    pub languages: Vec<String>,
}

/// Result of auditing a catalog for gaps.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TranslationAudit {
    /// Leaves without the fallback language. These make resolution fail.
    pub missing_fallback: Vec<String>,
    /// Leaves lacking some of the audited languages (fallback excluded).
    pub incomplete: Vec<MissingTranslation>,
}

impl TranslationAudit {
    pub fn is_clean(&self) -> bool {
        self.missing_fallback.is_empty() && self.incomplete.is_empty()
    }
}

/// Find leaves that lack the fallback or any of `languages`.
pub fn audit(catalog: &Catalog, languages: &[String], fallback: &str) -> TranslationAudit {
    let mut audit = TranslationAudit::default();
    // Keyed by rendered path so both lists come out sorted.
    let mut incomplete: BTreeMap<String, Vec<String>> = BTreeMap::new();

    let leaves = catalog.key_paths().into_iter().filter_map(|path: KeyPath| {
        let leaf = catalog.get_path(&path)?.as_leaf()?;
        Some((path.to_string(), leaf))
    });

    for (key, leaf) in leaves {
        if !leaf.has_language(fallback) {
            audit.missing_fallback.push(key.clone());
        }

        let missing: Vec<String> = languages
            .iter()
            .filter(|language| language.as_str() != fallback && !leaf.has_language(language))
            .cloned()
            .collect();
        if !missing.is_empty() {
            incomplete.insert(key, missing);
        }
    }

    audit.missing_fallback.sort();
    audit.incomplete = incomplete
        .into_iter()
        .map(|(key, languages)| MissingTranslation { key, languages })
        .collect();
    audit
}
