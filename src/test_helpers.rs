//! Shared test utilities for the diary-book test suite.
//!
//! Provides fixture builders and lookup helpers for the collect-phase
//! data structures (`Book`, `Chapter`, `Entry`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let (tmp, paths) = diary_fixture();
//! let book = collect(&paths, &BookConfig::default()).unwrap();
//!
//! let alps = find_chapter(&book, "Alps");
//! assert_book_shape(&book, &[
//!     ("Alps", &["2023_01_01", "2023_01_02"]),
//!     ("City", &["2023_02_01"]),
//! ]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::types::{Book, Chapter, Entry};

// =========================================================================
// Fixture setup
// =========================================================================

/// Write one entry file `<root>/<folder>/<stem>.txt` and return its path.
pub fn write_entry(root: &Path, folder: &str, stem: &str, body: &str) -> PathBuf {
    let dir = root.join(folder);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("{stem}.txt"));
    fs::write(&path, body).unwrap();
    path
}

/// A small two-chapter diary in a temp directory.
///
/// Returns the directory guard and the entry paths, sorted. Tests get an
/// isolated tree they can mutate without affecting other tests.
pub fn diary_fixture() -> (TempDir, Vec<PathBuf>) {
    let tmp = TempDir::new().unwrap();
    let mut paths = vec![
        write_entry(
            tmp.path(),
            "diary_alps",
            "2023_01_01",
            "First day in the mountains.",
        ),
        write_entry(tmp.path(), "diary_alps", "2023_01_02", "Snow & sun, 50% done."),
        write_entry(tmp.path(), "diary_city", "2023_02_01", "Back home."),
    ];
    paths.sort();
    (tmp, paths)
}

// =========================================================================
// Book lookups — panics with a clear message on miss
// =========================================================================

/// Find a chapter by label. Panics if not found.
pub fn find_chapter<'a>(book: &'a Book, label: &str) -> &'a Chapter {
    book.chapters
        .iter()
        .find(|c| c.label == label)
        .unwrap_or_else(|| {
            let labels = chapter_labels(book);
            panic!("chapter '{label}' not found. Available: {labels:?}")
        })
}

/// Find an entry by label within a chapter. Panics if not found.
pub fn find_entry<'a>(chapter: &'a Chapter, label: &str) -> &'a Entry {
    chapter
        .entries
        .iter()
        .find(|e| e.label == label)
        .unwrap_or_else(|| {
            let labels = section_labels(chapter);
            panic!(
                "entry '{label}' not found in chapter '{}'. Available: {labels:?}",
                chapter.label
            )
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All chapter labels in book order.
pub fn chapter_labels(book: &Book) -> Vec<&str> {
    book.chapters.iter().map(|c| c.label.as_str()).collect()
}

/// All section labels in chapter order.
pub fn section_labels(chapter: &Chapter) -> Vec<&str> {
    chapter.entries.iter().map(|e| e.label.as_str()).collect()
}

/// Assert that the whole book matches an expected shape.
///
/// Each entry is `(chapter label, section labels in order)`.
pub fn assert_book_shape(book: &Book, expected: &[(&str, &[&str])]) {
    let actual = chapter_labels(book);
    let expected_labels: Vec<&str> = expected.iter().map(|(l, _)| *l).collect();
    assert_eq!(actual, expected_labels, "chapter labels mismatch");

    for (label, sections) in expected {
        let chapter = find_chapter(book, label);
        assert_eq!(
            section_labels(chapter),
            sections.to_vec(),
            "sections of chapter '{label}' mismatch"
        );
    }
}
