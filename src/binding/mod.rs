//! The seam between resolved text and a document.
//!
//! Each resolved key addresses three selections: elements whose text
//! content is replaced, elements whose `placeholder` attribute is replaced,
//! and elements whose `value` attribute is replaced. A selection may match
//! any number of elements.

use std::fmt;

use crate::resolve::Resolution;

mod document;
mod recorder;

pub use document::{Document, Element, MarkerAttributes};
pub use recorder::{RecordedWrite, Recorder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Text,
    Placeholder,
    Value,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Text, Slot::Placeholder, Slot::Value];

    /// Default marker attribute that tags an element for this slot.
    pub fn default_marker(&self) -> &'static str {
        match self {
            Slot::Text => "data-i18n",
            Slot::Placeholder => "data-i18n-placeholder",
            Slot::Value => "data-i18n-value",
        }
    }

    /// Attribute written by this slot, or `None` for text content.
    pub fn target_attribute(&self) -> Option<&'static str> {
        match self {
            Slot::Text => None,
            Slot::Placeholder => Some("placeholder"),
            Slot::Value => Some("value"),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slot::Text => "text",
            Slot::Placeholder => "placeholder",
            Slot::Value => "value",
        };
        f.pad(name)
    }
}

/// A document that can receive resolved text.
pub trait Binding {
    /// Write `text` into every element selected by `slot` and `key`.
    ///
    /// Returns the number of elements written.
    fn write(&mut self, slot: Slot, key: &str, text: &str) -> usize;
}

impl<B: Binding + ?Sized> Binding for &mut B {
    fn write(&mut self, slot: Slot, key: &str, text: &str) -> usize {
        (**self).write(slot, key, text)
    }
}

/// Write every resolved entry into all three slots.
///
/// Returns the total number of element writes.
pub fn apply<B: Binding + ?Sized>(binding: &mut B, resolution: &Resolution) -> usize {
    let mut written = 0;
    for entry in resolution.iter() {
        for slot in Slot::ALL {
            written += binding.write(slot, &entry.key, &entry.text);
        }
    }
    tracing::debug!(
        language = %resolution.language,
        entries = resolution.len(),
        written,
        "applied resolution"
    );
    written
}
