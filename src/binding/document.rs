use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{Binding, Slot};

/// Attribute names that tag an element for each slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerAttributes {
    pub text: String,
    pub placeholder: String,
    pub value: String,
}

impl Default for MarkerAttributes {
    fn default() -> Self {
        Self {
            text: Slot::Text.default_marker().to_string(),
            placeholder: Slot::Placeholder.default_marker().to_string(),
            value: Slot::Value.default_marker().to_string(),
        }
    }
}

impl MarkerAttributes {
    pub fn marker(&self, slot: Slot) -> &str {
        match slot {
            Slot::Text => &self.text,
            Slot::Placeholder => &self.placeholder,
            Slot::Value => &self.value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            text: None,
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// A flat in-memory element tree.
///
/// Loaded from JSON of the form:
///
/// ```json
/// { "elements": [ { "tag": "button", "attributes": { "data-i18n": "demo.pay" } } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub elements: Vec<Element>,
    #[serde(skip)]
    markers: MarkerAttributes,
}

impl Document {
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            elements,
            markers: MarkerAttributes::default(),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse document JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read document file: {:?}", path))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Invalid document file: {:?}", path))
    }

    pub fn with_markers(mut self, markers: MarkerAttributes) -> Self {
        self.markers = markers;
        self
    }

    pub fn markers(&self) -> &MarkerAttributes {
        &self.markers
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize document")
    }
}

impl Binding for Document {
    fn write(&mut self, slot: Slot, key: &str, text: &str) -> usize {
        let marker = self.markers.marker(slot);
        let mut written = 0;
        for element in &mut self.elements {
            if element.attributes.get(marker).map(String::as_str) != Some(key) {
                continue;
            }
            match slot.target_attribute() {
                None => element.text = Some(text.to_string()),
                Some(attribute) => {
                    element
                        .attributes
                        .insert(attribute.to_string(), text.to_string());
                }
            }
            written += 1;
        }
        written
    }
}
