/// Which marker opened a list line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSig {
    /// `-` or `•`
    Bullet,
    /// Digits followed by `.`, e.g. `12.`
    Numbered,
}

/// List item type with owned marker knowledge.
///
/// List paragraphs are detected and stripped here; the classifier never
/// hardcodes `-` or `1.`.
pub struct ListItem;

impl ListItem {
    /// Characters that open an unordered item.
    pub const BULLETS: [char; 2] = ['-', '•'];
    /// Character closing the digit run of an ordered item.
    pub const NUMBER_END: char = '.';

    /// Detects a list marker at the very start of `line`.
    ///
    /// Returns the marker kind and its byte length. No space is required
    /// after the marker.
    pub fn sig(line: &str) -> Option<(MarkerSig, usize)> {
        if let Some(c) = line.chars().next()
            && Self::BULLETS.contains(&c)
        {
            return Some((MarkerSig::Bullet, c.len_utf8()));
        }

        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 && line[digits..].starts_with(Self::NUMBER_END) {
            return Some((MarkerSig::Numbered, digits + 1));
        }
        None
    }

    /// True when any line after the first opens with a list marker.
    pub fn has_continuation(paragraph: &str) -> bool {
        paragraph
            .split('\n')
            .skip(1)
            .any(|line| Self::sig(line.trim_start()).is_some())
    }

    /// Decides whether a paragraph is a list and which kind.
    ///
    /// A paragraph is a list when a line after the first carries a marker, or
    /// when the paragraph itself opens with a numbered marker. The kind comes
    /// from the first marker found, so `"Steps:\n1. First"` is ordered.
    ///
    /// Lines that are nothing but markers (`2024.`, `-\n-`) do not make a
    /// list on their own; at least one line must carry text.
    pub fn detect(paragraph: &str) -> Option<MarkerSig> {
        let mut lines = paragraph.split('\n').map(str::trim_start);
        let first = lines.next().and_then(Self::sig).map(|(sig, _)| sig);
        let continuation = lines.find_map(|line| Self::sig(line).map(|(sig, _)| sig));

        let opens = first == Some(MarkerSig::Numbered) || continuation.is_some();
        if !opens || !Self::has_text(paragraph) {
            return None;
        }
        first.or(continuation)
    }

    /// True when some line still has text once its marker is stripped.
    fn has_text(paragraph: &str) -> bool {
        paragraph
            .split('\n')
            .any(|line| !Self::strip(line.trim()).is_empty())
    }

    /// Removes a leading marker and the whitespace after it.
    pub fn strip(line: &str) -> &str {
        match Self::sig(line) {
            Some((_, len)) => line[len..].trim_start(),
            None => line,
        }
    }
}
