use crate::formatting::{
    Document,
    paragraphs::{normalize_line_breaks, paragraph_spans},
};

/// Validates formatter output invariants.
///
/// Asserts that:
/// - There is exactly one fragment per non-empty paragraph, in order
/// - Every fragment span is in bounds and non-empty
/// - Fragment spans are strictly increasing and never overlap
/// - Every fragment renders to a wrapped element of its kind
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(raw: &str, doc: &Document) {
    let text = normalize_line_breaks(raw);
    let n = text.len();
    let paragraphs = paragraph_spans(&text);

    assert_eq!(
        doc.fragments.len(),
        paragraphs.len(),
        "fragment count {} does not match paragraph count {}",
        doc.fragments.len(),
        paragraphs.len()
    );

    let mut prev_end = 0;
    for (f, p) in doc.fragments.iter().zip(&paragraphs) {
        assert_eq!(f.span, *p, "fragment out of source order");
        assert!(
            !f.span.is_empty() && f.span.end <= n,
            "fragment span out of bounds: {:?} (text len: {})",
            f.span,
            n
        );
        assert!(
            f.span.start >= prev_end,
            "fragment spans overlap: {:?} starts before {}",
            f.span,
            prev_end
        );
        prev_end = f.span.end;

        let tag = f.kind.tag();
        assert!(
            f.html.starts_with(&format!("<{tag}>")) && f.html.ends_with(&format!("</{tag}>")),
            "fragment html not wrapped in <{tag}>: {}",
            f.html
        );
    }
}
