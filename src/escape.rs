//! LaTeX reserved-character escaping.
//!
//! Diary bodies are arbitrary free-form text and go into the document
//! verbatim, so every character with syntactic meaning to LaTeX must be
//! replaced by its literal-producing form. The same function covers
//! chapter labels, section labels, titles, and bodies.
//!
//! Each character's replacement depends only on the character itself —
//! no replacement ever produces a character that a later step would
//! escape again, so a single left-to-right pass is correct.

/// Escape the ten LaTeX reserved characters; everything else (including
/// all other Unicode) passes through unchanged.
///
/// | input | output                |
/// |-------|-----------------------|
/// | `&`   | `\&`                  |
/// | `%`   | `\%`                  |
/// | `$`   | `\$`                  |
/// | `#`   | `\#`                  |
/// | `_`   | `\_`                  |
/// | `{`   | `\{`                  |
/// | `}`   | `\}`                  |
/// | `~`   | `\textasciitilde{}`   |
/// | `^`   | `\textasciicircum{}`  |
/// | `\`   | `\textbackslash{}`    |
pub fn latex(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("\\&"),
            '%' => out.push_str("\\%"),
            '$' => out.push_str("\\$"),
            '#' => out.push_str("\\#"),
            '_' => out.push_str("\\_"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '\\' => out.push_str("\\textbackslash{}"),
            _ => out.push(c),
        }
    }
    out
}
