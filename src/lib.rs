//! i18nbind - nested translation catalogs bound to tagged document elements
//!
//! A catalog is a nested JSON tree whose leaves map language codes to text.
//! Every leaf is addressed by its dotted key path (`demo.signin`). The
//! localizer resolves each leaf for the active language, falling back to
//! English, and writes the text into the elements tagged with that key.
//!
//! ## Module Structure
//!
//! - `binding`: The document seam (`Binding` trait, in-memory `Document`, `Recorder`)
//! - `catalog`: Catalog tree, key paths and leaf enumeration
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and validation
//! - `localizer`: The facade owning catalog, active language and binding
//! - `query`: Startup language selection from a URL query string
//! - `resolve`: Per-language resolution with fallback, and catalog audits

pub mod binding;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod localizer;
pub mod query;
pub mod resolve;
