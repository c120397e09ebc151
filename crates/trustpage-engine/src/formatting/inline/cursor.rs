use super::kinds::Markup;

/// A byte cursor for inline parsing with position tracking.
///
/// Operates over a string slice while reporting absolute byte positions in
/// the enclosing line (via `base`), so nested parses of an emphasis body
/// produce spans that resolve against the full line.
///
/// All delimiters are ASCII, so stepping one byte at a time never stops
/// inside a multi-byte character at a position that is later sliced.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Absolute offset of `s` within the line.
    pub base: usize,
    /// Current local index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Current absolute byte position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// True at the opening `<` of an HTML tag.
    ///
    /// Inline constructs never extend across a tag, which keeps a second
    /// inline pass over rendered output from pairing leftover delimiters
    /// that sit in different elements.
    pub fn at_tag(&self) -> bool {
        self.peek() == Some(Markup::TAG_OPEN)
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes. Callers check the bytes exist first.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances to just past the next `pat`, or to the end if there is none.
    pub fn skip_past(&mut self, pat: &[u8]) {
        let rest = &self.s.as_bytes()[self.i.min(self.s.len())..];
        self.i = match rest.windows(pat.len()).position(|w| w == pat) {
            Some(at) => self.i + at + pat.len(),
            None => self.s.len(),
        };
    }
}
