//! Shared types produced by the collect stage and consumed by the renderer.
//!
//! These types serialize to JSON for the `scan --json` manifest view and
//! must stay in sync with what [`crate::render`] expects.

use serde::{Deserialize, Serialize};

/// One diary entry: a single text file plus its derived heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Section heading: file base name with the extension removed
    /// (`2023_01_01.txt` → "2023_01_01").
    pub label: String,
    /// File base name as supplied (extension included).
    pub file_name: String,
    /// Path as supplied on the command line or found by discovery.
    pub source_path: String,
    /// Full file contents, unmodified. Escaping happens at render time.
    pub body: String,
}

/// A folder grouping: one chapter per parent directory.
///
/// A chapter only exists because at least one entry path pointed into its
/// folder, so `entries` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter heading derived from the folder name (see [`crate::naming`]).
    pub label: String,
    /// Folder base name as found on disk (prefix intact).
    pub folder: String,
    /// Entries ordered by their section label.
    pub entries: Vec<Entry>,
}

/// The full ordered book: chapters sorted by label, entries sorted within.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub chapters: Vec<Chapter>,
}

impl Book {
    /// Total number of sections across all chapters.
    pub fn section_count(&self) -> usize {
        self.chapters.iter().map(|c| c.entries.len()).sum()
    }
}
