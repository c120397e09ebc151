use super::list::{ListItem, MarkerSig};

/// Heading and subheading shape checks.
///
/// Lead-word and length checks live in the classifier because they depend
/// on settings; the checks here are purely about the characters.
pub struct Heading;

impl Heading {
    /// Trailing label character, e.g. `Introduction:`.
    pub const COLON: char = ':';
    /// Sentence terminators that disqualify a bare title.
    pub const TERMINATORS: [char; 3] = ['.', '!', '?'];

    pub fn is_colon_terminated(s: &str) -> bool {
        s.ends_with(Self::COLON)
    }

    /// A numbered opening such as `3. Results` with no list lines after it.
    pub fn is_numbered_title(s: &str) -> bool {
        matches!(ListItem::sig(s), Some((MarkerSig::Numbered, _))) && !ListItem::has_continuation(s)
    }

    /// A single line opening with an uppercase letter and containing no
    /// sentence terminator anywhere.
    pub fn is_bare_title(s: &str) -> bool {
        starts_uppercase(s) && !s.contains('\n') && !s.contains(Self::TERMINATORS)
    }

    /// An uppercase-led label ending in a colon with no sentence terminator,
    /// possibly spanning soft breaks.
    pub fn is_label(s: &str) -> bool {
        starts_uppercase(s) && Self::is_colon_terminated(s) && !s.contains(Self::TERMINATORS)
    }
}

fn starts_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}
