use std::borrow::Cow;

use super::span::Span;

/// Rewrites `\r\n` and lone `\r` line breaks to `\n`.
///
/// Borrows when the input has no carriage returns, which is the common case
/// for text coming out of the admin editor.
pub fn normalize_line_breaks(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\r') {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(raw.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Splits normalized text into trimmed paragraph spans.
///
/// A paragraph ends at a blank line (empty or whitespace only), so two or
/// more consecutive line breaks separate paragraphs while a single break is
/// kept inside the paragraph as a soft break. Every returned span is
/// non-empty after trimming, and spans come back in source order.
pub fn paragraph_spans(text: &str) -> Vec<Span> {
    let mut out = Vec::new();
    let mut open: Option<Span> = None;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let start = offset;
        offset += line.len();

        let content = line.trim_end_matches('\n');
        if content.trim().is_empty() {
            if let Some(sp) = open.take() {
                out.push(sp);
            }
            continue;
        }

        let end = start + content.len();
        match open.as_mut() {
            Some(sp) => sp.end = end,
            None => open = Some(Span::new(start, end)),
        }
    }
    out.extend(open);

    out.into_iter().map(|sp| trim_span(text, sp)).collect()
}

/// Iterates the soft-broken lines of a paragraph, trimmed, skipping empties.
pub fn soft_lines(paragraph: &str) -> impl Iterator<Item = &str> {
    paragraph
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

fn trim_span(text: &str, sp: Span) -> Span {
    let s = sp.slice(text, 0);
    let lead = s.len() - s.trim_start().len();
    let trail = s.len() - s.trim_end().len();
    Span::new(sp.start + lead, sp.end - trail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(text: &str) -> Vec<&str> {
        paragraph_spans(text)
            .into_iter()
            .map(|sp| sp.slice(text, 0))
            .collect()
    }

    #[test]
    fn crlf_and_cr_become_lf() {
        assert_eq!(normalize_line_breaks("a\r\nb\rc"), "a\nb\nc");
        assert!(matches!(normalize_line_breaks("a\nb"), Cow::Borrowed(_)));
    }

    #[test]
    fn blank_line_separates_paragraphs() {
        assert_eq!(texts("one\n\ntwo\n\n\n\nthree"), vec!["one", "two", "three"]);
    }

    #[test]
    fn single_break_stays_inside_paragraph() {
        assert_eq!(texts("line one\nline two"), vec!["line one\nline two"]);
    }

    #[test]
    fn whitespace_only_line_is_blank() {
        assert_eq!(texts("one\n  \t\ntwo"), vec!["one", "two"]);
    }

    #[test]
    fn paragraphs_are_trimmed() {
        assert_eq!(texts("\n\n   padded   \n\n"), vec!["padded"]);
    }

    #[test]
    fn empty_and_blank_inputs_have_no_paragraphs() {
        assert!(paragraph_spans("").is_empty());
        assert!(paragraph_spans("   ").is_empty());
        assert!(paragraph_spans("\n\n\n").is_empty());
    }

    #[test]
    fn spans_are_offsets_into_source() {
        let text = "ab\n\n  cd";
        let spans = paragraph_spans(text);
        assert_eq!(spans, vec![Span::new(0, 2), Span::new(6, 8)]);
    }

    #[test]
    fn soft_lines_are_trimmed() {
        let lines: Vec<_> = soft_lines("  first \n second").collect();
        assert_eq!(lines, vec!["first", "second"]);
    }
}
