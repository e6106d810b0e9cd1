//! LaTeX source generation.
//!
//! Stage 2 of the pipeline. Takes the collected [`Book`] and emits the
//! complete document source in a single forward pass: preamble, front
//! matter, one `\chapter` per folder, one `\section` per entry, closing
//! marker. No chapter is ever revisited or rewritten once emitted.
//!
//! ## Output Structure
//!
//! ```text
//! \documentclass[11pt]{book}       # built-in preamble (or --preamble file)
//! ...
//! \title{Diary}                    # from config.toml [document]
//! \begin{document}
//! \maketitle
//! \tableofcontents
//! \chapter{Alps}
//! \section{2023_01_01}
//! ...entry body...
//! \end{document}
//! ```
//!
//! ## Line-break policy
//!
//! Newlines inside a body pass through verbatim. LaTeX treats a single
//! newline as a same-paragraph break and a blank line as a paragraph
//! break, so blank input lines become paragraph breaks and single line
//! breaks collapse into the surrounding paragraph. Trailing whitespace
//! at the end of a body is trimmed; the renderer supplies the separator.

use crate::config::BookConfig;
use crate::escape;
use crate::types::Book;

/// Built-in preamble: a plain `book`-class document that compiles
/// standalone with any TeX distribution. Fixed boilerplate, never
/// derived from input.
pub const PREAMBLE: &str = "\\documentclass[11pt]{book}\n\
\\usepackage[utf8]{inputenc}\n\
\\usepackage[T1]{fontenc}\n";

/// Render the full LaTeX source for `book`.
///
/// `custom_preamble` replaces both [`PREAMBLE`] and the title block — a
/// user preamble owns the entire front matter above `\begin{document}`.
/// Pure string assembly; all I/O already happened in the collect stage.
pub fn render(book: &Book, config: &BookConfig, custom_preamble: Option<&str>) -> String {
    let mut out = String::new();

    match custom_preamble {
        Some(preamble) => {
            out.push_str(preamble);
            if !out.ends_with('\n') {
                out.push('\n');
            }
        }
        None => {
            out.push_str(PREAMBLE);
            out.push_str("\\title{");
            out.push_str(&escape::latex(&config.document.title));
            out.push_str("}\n");
            if !config.document.author.is_empty() {
                out.push_str("\\author{");
                out.push_str(&escape::latex(&config.document.author));
                out.push_str("}\n");
            }
        }
    }

    out.push_str("\n\\begin{document}\n\n\\maketitle\n\n\\tableofcontents\n\n");

    for chapter in &book.chapters {
        out.push_str("\\chapter{");
        out.push_str(&escape::latex(&chapter.label));
        out.push_str("}\n\n");

        for entry in &chapter.entries {
            out.push_str("\\section{");
            out.push_str(&escape::latex(&entry.label));
            out.push_str("}\n\n");
            out.push_str(&escape::latex(entry.body.trim_end()));
            out.push_str("\n\n");
        }
    }

    out.push_str("\\end{document}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Chapter, Entry};

    fn entry(label: &str, body: &str) -> Entry {
        Entry {
            label: label.to_string(),
            file_name: format!("{label}.txt"),
            source_path: format!("diary_test/{label}.txt"),
            body: body.to_string(),
        }
    }

    fn chapter(label: &str, folder: &str, entries: Vec<Entry>) -> Chapter {
        Chapter {
            label: label.to_string(),
            folder: folder.to_string(),
            entries,
        }
    }

    fn one_entry_book(body: &str) -> Book {
        Book {
            chapters: vec![chapter(
                "Alps",
                "diary_alps",
                vec![entry("2023_01_01", body)],
            )],
        }
    }

    /// Byte offset of `needle` in `haystack`, panicking with context on miss.
    fn offset_of(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("{needle:?} not found in output:\n{haystack}"))
    }

    #[test]
    fn document_is_framed_by_preamble_and_closing_marker() {
        let tex = render(&one_entry_book("Hello"), &BookConfig::default(), None);

        assert!(tex.starts_with("\\documentclass[11pt]{book}\n"));
        assert!(tex.contains("\\begin{document}"));
        assert!(tex.contains("\\maketitle"));
        assert!(tex.contains("\\tableofcontents"));
        assert!(tex.ends_with("\\end{document}\n"));
    }

    #[test]
    fn chapters_and_sections_emitted_in_book_order() {
        let book = Book {
            chapters: vec![
                chapter(
                    "A",
                    "diary_a",
                    vec![entry("2023_01_01", "World"), entry("2023_01_02", "Hello")],
                ),
                chapter("B", "diary_b", vec![entry("2023_02_01", "Again")]),
            ],
        };
        let tex = render(&book, &BookConfig::default(), None);

        let positions = [
            offset_of(&tex, "\\begin{document}"),
            offset_of(&tex, "\\chapter{A}"),
            offset_of(&tex, "\\section{2023\\_01\\_01}"),
            offset_of(&tex, "World"),
            offset_of(&tex, "\\section{2023\\_01\\_02}"),
            offset_of(&tex, "Hello"),
            offset_of(&tex, "\\chapter{B}"),
            offset_of(&tex, "\\section{2023\\_02\\_01}"),
            offset_of(&tex, "Again"),
            offset_of(&tex, "\\end{document}"),
        ];
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "structural markers out of order: {positions:?}\n{tex}"
        );
    }

    #[test]
    fn body_reserved_characters_are_escaped() {
        let tex = render(&one_entry_book("50% done & happy"), &BookConfig::default(), None);
        assert!(tex.contains("50\\% done \\& happy"));
    }

    #[test]
    fn heading_reserved_characters_are_escaped() {
        let book = Book {
            chapters: vec![chapter("A & B", "a_&_b", vec![entry("2023_01_01", "x")])],
        };
        let tex = render(&book, &BookConfig::default(), None);
        assert!(tex.contains("\\chapter{A \\& B}"));
    }

    #[test]
    fn blank_lines_become_paragraph_breaks() {
        let tex = render(
            &one_entry_book("First paragraph.\n\nSecond paragraph."),
            &BookConfig::default(),
            None,
        );
        assert!(tex.contains("First paragraph.\n\nSecond paragraph."));
    }

    #[test]
    fn single_newlines_pass_through_within_a_paragraph() {
        let tex = render(
            &one_entry_book("line one\nline two"),
            &BookConfig::default(),
            None,
        );
        assert!(tex.contains("line one\nline two"));
    }

    #[test]
    fn trailing_body_whitespace_is_trimmed() {
        let tex = render(&one_entry_book("Hello\n\n\n"), &BookConfig::default(), None);
        assert!(tex.contains("Hello\n\n\\end{document}"));
    }

    #[test]
    fn title_and_author_from_config() {
        let config = BookConfig {
            document: crate::config::DocumentConfig {
                title: "Travel Log 100%".to_string(),
                author: "J. Doe".to_string(),
            },
            ..BookConfig::default()
        };
        let tex = render(&one_entry_book("x"), &config, None);

        assert!(tex.contains("\\title{Travel Log 100\\%}"));
        assert!(tex.contains("\\author{J. Doe}"));
    }

    #[test]
    fn empty_author_line_is_omitted() {
        let tex = render(&one_entry_book("x"), &BookConfig::default(), None);
        assert!(!tex.contains("\\author"));
    }

    #[test]
    fn custom_preamble_replaces_builtin_and_title_block() {
        let custom = "\\documentclass{article}\n\\title{My Own}";
        let tex = render(&one_entry_book("x"), &BookConfig::default(), Some(custom));

        assert!(tex.starts_with("\\documentclass{article}\n\\title{My Own}\n"));
        assert!(!tex.contains("\\documentclass[11pt]{book}"));
        assert!(!tex.contains("\\title{Diary}"));
        assert!(tex.contains("\\begin{document}"));
    }

    #[test]
    fn empty_book_still_compiles_as_a_document() {
        let tex = render(&Book { chapters: vec![] }, &BookConfig::default(), None);
        assert!(tex.contains("\\begin{document}"));
        assert!(tex.ends_with("\\end{document}\n"));
        assert!(!tex.contains("\\chapter"));
    }

    #[test]
    fn output_is_deterministic() {
        let book = one_entry_book("Same input, same bytes.");
        let config = BookConfig::default();
        assert_eq!(
            render(&book, &config, None),
            render(&book, &config, None)
        );
    }
}
