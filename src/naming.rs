//! Centralized label derivation from folder and file names.
//!
//! Chapters and sections both take their headings straight from the
//! filesystem. This module is the single place where those rules live so
//! the collector and the CLI display agree on every name.
//!
//! ## Chapter labels
//!
//! A folder carrying the recognized prefix (default `diary_`) has the
//! prefix stripped and the remainder prettified: underscores become
//! spaces and each word is capitalized. Folders without the prefix are
//! used verbatim.
//! - `diary_alps/` → "Alps"
//! - `diary_long_example/` → "Long Example"
//! - `notes/` → "notes"
//!
//! ## Section labels
//!
//! The file base name with its final extension removed, untouched
//! otherwise. Entry stems are date-like (`2023_01_01`) and must keep
//! sorting chronologically as plain strings.

use std::path::Path;

/// Derive a chapter label from a folder's base name.
///
/// With `prefix` = `"diary_"`:
/// - `"diary_alps"` → "Alps"
/// - `"diary_long_example"` → "Long Example"
/// - `"notes"` → "notes" (no prefix, unchanged)
/// - `"diary_"` → "diary_" (nothing after the prefix, unchanged)
///
/// An empty `prefix` disables stripping entirely.
pub fn chapter_label(folder_name: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return folder_name.to_string();
    }
    match folder_name.strip_prefix(prefix) {
        Some(rest) if !rest.is_empty() => prettify(rest),
        _ => folder_name.to_string(),
    }
}

/// Derive a section label from a file's base name: the stem before the
/// final extension.
///
/// - `"2023_01_01.txt"` → "2023_01_01"
/// - `"notes"` → "notes"
/// - `"archive.tar.gz"` → "archive.tar" (only the final extension drops)
pub fn section_label(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string())
}

/// Underscores to spaces, first letter of each word uppercased.
fn prettify(name: &str) -> String {
    name.split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
