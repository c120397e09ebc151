/// Quoted paragraph type with owned delimiter constant.
///
/// A blockquote is a paragraph wrapped in literal double quotes. The length
/// threshold is a setting and is checked by the classifier.
pub struct BlockQuote;

impl BlockQuote {
    /// The quote character that must open and close the paragraph.
    pub const QUOTE: char = '"';

    /// True when `s` both opens and closes with [`Self::QUOTE`] as two
    /// distinct characters.
    pub fn is_wrapped(s: &str) -> bool {
        s.len() >= 2 && s.starts_with(Self::QUOTE) && s.ends_with(Self::QUOTE)
    }

    /// Strips one wrapping quote from each end, then surrounding whitespace.
    ///
    /// Returns `s` unchanged if it is not wrapped.
    pub fn strip(s: &str) -> &str {
        if !Self::is_wrapped(s) {
            return s;
        }
        let q = Self::QUOTE.len_utf8();
        s[q..s.len() - q].trim()
    }
}
