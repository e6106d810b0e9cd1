//! Entry discovery and book assembly.
//!
//! Stage 1 of the pipeline. Takes the list of entry paths (shell-expanded
//! globs and/or `--source` discovery), groups them by parent folder,
//! orders everything by derived label, and reads the bodies — producing
//! the [`Book`] that the renderer consumes.
//!
//! ## Directory Structure
//!
//! Diaries follow a two-level layout:
//!
//! ```text
//! diary/                           # Diary root
//! ├── config.toml                  # Book configuration (optional)
//! ├── diary_alps/                  # Chapter folder → chapter "Alps"
//! │   ├── 2023_01_01.txt           # Entry → section "2023_01_01"
//! │   └── 2023_01_02.txt
//! ├── diary_city/
//! │   └── 2023_02_01.txt
//! └── notes/                       # No prefix → chapter "notes"
//!     └── 2023_03_01.txt
//! ```
//!
//! ## Ordering
//!
//! Chapters sort by derived label, entries by derived section label, both
//! with case-sensitive ordinal string comparison. Output order is a pure
//! function of file-system names: the order paths arrive in — shell glob
//! order, directory iteration order — never shows through. Entry stems
//! are date-like (`2023_01_01`), so ordinal order is chronological order.
//!
//! ## Validation
//!
//! Every path must have a named parent folder and point at an existing
//! regular file. Validation covers the whole input list before any file
//! is read, so a bad path anywhere aborts the run with nothing written.
//! The same resolved path supplied twice yields the entry twice; inputs
//! are taken as given and never deduplicated.

use crate::config::BookConfig;
use crate::naming;
use crate::types::{Book, Chapter, Entry};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum CollectError {
    #[error("invalid input path (missing parent folder, nonexistent, or not a regular file): {0}")]
    InvalidPath(PathBuf),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to scan {path}: {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },
}

/// Group entry paths into an ordered [`Book`] and read every body.
///
/// Files are read in final emission order, each in full before the next,
/// so any failure happens before a single byte of output exists.
pub fn collect(paths: &[PathBuf], config: &BookConfig) -> Result<Book, CollectError> {
    // Validate the whole input list up front; grouping order is an
    // intermediate only and never leaks into the output.
    let mut groups: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();
    for path in paths {
        let parent = match path.parent() {
            Some(p) if p.file_name().is_some() => p.to_path_buf(),
            _ => return Err(CollectError::InvalidPath(path.clone())),
        };
        if !path.is_file() {
            return Err(CollectError::InvalidPath(path.clone()));
        }
        groups.entry(parent).or_default().push(path.clone());
    }

    // Re-sort explicitly by derived label. Distinct folders can derive
    // the same label; the folder path breaks the tie deterministically.
    let mut ordered: Vec<(String, String, PathBuf, Vec<PathBuf>)> = groups
        .into_iter()
        .map(|(folder, files)| {
            let folder_name = folder
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let label = naming::chapter_label(&folder_name, &config.chapter_prefix);
            (label, folder_name, folder, files)
        })
        .collect();
    ordered.sort_by(|a, b| (&a.0, &a.2).cmp(&(&b.0, &b.2)));

    let mut chapters = Vec::with_capacity(ordered.len());
    for (label, folder_name, _, mut files) in ordered {
        files.sort_by_key(|p| {
            let name = file_name_of(p);
            (naming::section_label(&name), name)
        });

        let mut entries = Vec::with_capacity(files.len());
        for file in files {
            let file_name = file_name_of(&file);
            let body = fs::read_to_string(&file).map_err(|source| CollectError::Read {
                path: file.clone(),
                source,
            })?;
            entries.push(Entry {
                label: naming::section_label(&file_name),
                file_name,
                source_path: file.to_string_lossy().into_owned(),
                body,
            });
        }
        chapters.push(Chapter {
            label,
            folder: folder_name,
            entries,
        });
    }

    Ok(Book { chapters })
}

/// Walk a diary root and return every entry file exactly one folder deep.
///
/// Only files whose extension matches `config.extension` qualify; hidden
/// folders and files are skipped, as are loose files directly in the root
/// (they have no chapter folder). Folders that end up matching zero files
/// simply contribute nothing.
pub fn discover(root: &Path, config: &BookConfig) -> Result<Vec<PathBuf>, CollectError> {
    if !root.is_dir() {
        return Err(CollectError::InvalidPath(root.to_path_buf()));
    }

    let mut found = Vec::new();
    let walker = WalkDir::new(root)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e));
    for entry in walker {
        let entry = entry.map_err(|source| CollectError::Walk {
            path: root.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .map(|e| e.eq_ignore_ascii_case(&config.extension))
            .unwrap_or(false);
        if matches {
            found.push(entry.into_path());
        }
    }
    Ok(found)
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
