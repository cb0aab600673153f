//! Report formatting and printing utilities.
//!
//! Separate from the commands so the output can be written to any writer.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::{
    binding::RecordedWrite,
    catalog::KeyPath,
    resolve::{Resolution, TranslationAudit},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_keys<W: Write>(keys: &[KeyPath], writer: &mut W) -> io::Result<()> {
    for key in keys {
        writeln!(writer, "{}", key)?;
    }
    Ok(())
}

/// Print `key  text` lines with keys padded to the widest display width.
pub fn print_resolution<W: Write>(resolution: &Resolution, writer: &mut W) -> io::Result<()> {
    let width = resolution
        .iter()
        .map(|entry| UnicodeWidthStr::width(entry.key.as_str()))
        .max()
        .unwrap_or(0);

    for entry in resolution.iter() {
        let padding = width - UnicodeWidthStr::width(entry.key.as_str());
        writeln!(
            writer,
            "{}{}  {}",
            entry.key,
            " ".repeat(padding),
            entry.text
        )?;
    }
    Ok(())
}

pub fn print_json<W: Write>(value: &serde_json::Value, writer: &mut W) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    writeln!(writer, "{}", json)
}

/// Print one line per binding write: `slot key text`.
pub fn print_trace<W: Write>(writes: &[RecordedWrite], writer: &mut W) -> io::Result<()> {
    let width = writes
        .iter()
        .map(|write| UnicodeWidthStr::width(write.key.as_str()))
        .max()
        .unwrap_or(0);

    for write in writes {
        let padding = width - UnicodeWidthStr::width(write.key.as_str());
        writeln!(
            writer,
            "{:<11} {}{}  {}",
            write.slot,
            write.key,
            " ".repeat(padding),
            write.text
        )?;
    }
    Ok(())
}

/// Print the audit in cargo-style lines followed by a summary.
pub fn print_audit<W: Write>(
    audit: &TranslationAudit,
    fallback: &str,
    keys_checked: usize,
    writer: &mut W,
) -> io::Result<()> {
    for key in &audit.missing_fallback {
        writeln!(
            writer,
            "{}: {} has no '{}' fallback translation",
            "error".red().bold(),
            key.bold(),
            fallback
        )?;
    }

    for missing in &audit.incomplete {
        writeln!(
            writer,
            "{}: {} is missing: {}",
            "warning".yellow().bold(),
            missing.key.bold(),
            missing.languages.join(", ")
        )?;
    }

    let errors = audit.missing_fallback.len();
    let warnings = audit.incomplete.len();
    if errors == 0 && warnings == 0 {
        writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("No issues found in {} keys", keys_checked).green()
        )?;
    } else {
        writeln!(writer)?;
        writeln!(
            writer,
            "{} {} {}, {} {} in {} keys",
            FAILURE_MARK.red(),
            errors,
            plural(errors, "error", "errors"),
            warnings,
            plural(warnings, "warning", "warnings"),
            keys_checked
        )?;
    }
    Ok(())
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
