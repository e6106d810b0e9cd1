//! # diary-book
//!
//! A minimal LaTeX book generator for plain-text diaries. Your filesystem
//! is the data source: each top-level folder becomes a chapter, each text
//! file inside it becomes a section, and the output is a single compilable
//! `book`-class LaTeX document.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! Content flows through two independent stages in one linear pass:
//!
//! ```text
//! 1. Collect   paths / diary root  →  Book          (filesystem → structured data)
//! 2. Render    Book                →  diary.tex     (LaTeX source)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Testability**: `render` is a pure function from `Book` to string,
//!   so most of the suite never touches the filesystem.
//! - **Debuggability**: the intermediate `Book` serializes to JSON
//!   (`scan --json`) and can be inspected before anything is written.
//! - **Fail-fast**: all path validation and reading happens in stage 1,
//!   so no output ever exists when an input is broken — a partially
//!   correct diary is worse than no diary.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`collect`] | Stage 1 — groups entry paths by folder, orders them, reads bodies |
//! | [`render`] | Stage 2 — emits the LaTeX book source in a single forward pass |
//! | [`escape`] | LaTeX reserved-character escaping, shared by headings and bodies |
//! | [`naming`] | chapter/section label derivation from folder and file names |
//! | [`types`] | shared types serialized between stages (`Book`, `Chapter`, `Entry`) |
//! | [`config`] | `config.toml` loading, defaults, and validation |
//! | [`output`] | CLI output formatting — tree-based display of pipeline results |
//!
//! # Design Decisions
//!
//! ## Names Are the Order
//!
//! Chapters sort by their derived label and entries by their file stem,
//! with plain ordinal string comparison. Entry files are named after
//! dates (`2023_01_01.txt`), so lexicographic order *is* chronological
//! order — no front matter, no index file, no mtime dependence. The same
//! input set renders byte-identical output no matter how the shell
//! expanded the globs.
//!
//! ## Escaping Over Trust
//!
//! Diary text is free-form and full of characters LaTeX treats as syntax
//! (`%` starts a comment, `&` is a tabular separator, ...). Every heading
//! and body goes through [`escape::latex`], which maps each of the ten
//! reserved characters to its literal-producing form and leaves all other
//! Unicode untouched. One character in, one replacement out — no context,
//! no lookahead.
//!
//! ## Fixed Preamble
//!
//! The emitted preamble is a constant: a plain `book`-class document any
//! TeX installation compiles. Users who want their own packages or fonts
//! pass `--preamble`, which swaps the whole front matter rather than
//! patching pieces of it.

pub mod collect;
pub mod config;
pub mod escape;
pub mod naming;
pub mod output;
pub mod render;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
