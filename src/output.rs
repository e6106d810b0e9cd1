//! CLI output formatting for the pipeline stages.
//!
//! Output is information-centric, not file-centric: each entity leads
//! with its positional index and derived heading, with filesystem paths
//! shown as indented `Source:` context lines.
//!
//! ```text
//! Chapters
//! 001 Alps (2 entries)
//!     Source: diary_alps/
//!     001 2023_01_01
//!         Source: 2023_01_01.txt
//!         First day in the mountains...
//! ```
//!
//! Each stage has a `format_*` function (returns lines) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are
//! pure — no I/O, no side effects.

use crate::types::Book;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_preview(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

/// Format the collected book structure as a display tree.
pub fn format_scan_output(book: &Book) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Chapters".to_string());

    for (i, chapter) in book.chapters.iter().enumerate() {
        lines.push(format!(
            "{} {} ({} entries)",
            format_index(i + 1),
            chapter.label,
            chapter.entries.len()
        ));
        lines.push(format!("    Source: {}/", chapter.folder));

        for (j, entry) in chapter.entries.iter().enumerate() {
            lines.push(format!("    {} {}", format_index(j + 1), entry.label));
            lines.push(format!("        Source: {}", entry.file_name));

            let preview = truncate_preview(entry.body.lines().next().unwrap_or("").trim(), 60);
            if !preview.is_empty() {
                lines.push(format!("        {}", preview));
            }
        }
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(book: &Book) {
    for line in format_scan_output(book) {
        println!("{}", line);
    }
}

/// One-line build summary: counts plus the destination, if any.
pub fn format_build_summary(book: &Book, dest: Option<&Path>) -> String {
    let summary = format!(
        "Rendered {} chapters, {} sections",
        book.chapters.len(),
        book.section_count()
    );
    match dest {
        Some(path) => format!("{} → {}", summary, path.display()),
        None => summary,
    }
}
