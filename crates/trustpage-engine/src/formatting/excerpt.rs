use super::Formatter;
use super::blocks::kinds::{BlockQuote, ListItem};
use super::blocks::{BlockKind, ParagraphFacts};
use super::default_formatter;
use super::inline::plain_text;
use super::paragraphs::{normalize_line_breaks, paragraph_spans, soft_lines};

const ELLIPSIS: &str = "...";

impl Formatter {
    /// Plain-text teaser of `raw`, at most `max_chars` characters before the
    /// `...` suffix.
    ///
    /// Each paragraph is classified with this formatter's settings. Markers
    /// are removed from list paragraphs and wrapping quotes from blockquotes;
    /// other paragraphs keep their text. Inline emphasis delimiters are
    /// removed and all whitespace collapses to single spaces. Truncation
    /// happens on a character boundary. The result is not escaped; callers
    /// embedding it in HTML must escape it.
    pub fn excerpt(&self, raw: &str, max_chars: usize) -> String {
        let text = normalize_line_breaks(raw);
        let mut words: Vec<String> = Vec::new();

        for span in paragraph_spans(&text) {
            let facts = ParagraphFacts::new(span, span.slice(&text, 0));
            let kind = self.classifier.classify(&facts);
            let para = match kind {
                BlockKind::BlockQuote => BlockQuote::strip(facts.text),
                _ => facts.text,
            };

            for line in soft_lines(para) {
                let line = if kind.is_list() { ListItem::strip(line) } else { line };
                words.extend(plain_text(line).split_whitespace().map(str::to_string));
            }
        }

        truncate_chars(&words.join(" "), max_chars)
    }
}

/// [`Formatter::excerpt`] with the default settings.
pub fn excerpt(raw: &str, max_chars: usize) -> String {
    default_formatter().excerpt(raw, max_chars)
}

fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((cut, _)) => {
            let mut out = s[..cut].trim_end().to_string();
            out.push_str(ELLIPSIS);
            out
        }
    }
}
