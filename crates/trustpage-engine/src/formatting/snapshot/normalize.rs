use std::fmt::Write;

use crate::formatting::{Document, paragraphs::normalize_line_breaks};

/// Renders `doc` as a plain listing, one block per fragment:
///
/// ```text
/// Heading 0..13 "Introduction:"
/// <h2>Introduction:</h2>
/// ```
///
/// Source previews are cut to 60 characters with `...` and have line breaks
/// shown as `\n`.
pub fn normalize(raw: &str, doc: &Document) -> String {
    let text = normalize_line_breaks(raw);
    let mut out = String::new();
    for fragment in &doc.fragments {
        let source = fragment.span.slice(&text, 0);
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{:?} {}..{} \"{}\"\n{}",
            fragment.kind,
            fragment.span.start,
            fragment.span.end,
            preview(source, 60),
            fragment.html
        );
    }
    out
}

fn preview(s: &str, max_chars: usize) -> String {
    let mut p: String = s.chars().take(max_chars).collect();
    if s.chars().nth(max_chars).is_some() {
        p.push_str("...");
    }
    p.replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::default_formatter;
    use pretty_assertions::assert_eq;

    #[test]
    fn lists_each_fragment() {
        let raw = "Impact\n\n- a\n- b";
        let doc = default_formatter().document(raw);
        assert_eq!(
            normalize(raw, &doc),
            "Heading 0..6 \"Impact\"\n<h2>Impact</h2>\nUnorderedList 8..15 \"- a\\n- b\"\n<ul><li>a</li><li>b</li></ul>\n"
        );
    }

    #[test]
    fn long_sources_are_cut() {
        assert_eq!(preview(&"x".repeat(70), 60), format!("{}...", "x".repeat(60)));
        assert_eq!(preview("short", 60), "short");
    }
}
