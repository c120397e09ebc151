/// Paragraph block type.
///
/// Paragraphs have no delimiters; they are the default when no rule
/// matches. Soft breaks inside any non-list block render as [`Self::LINE_BREAK`].
pub struct Paragraph;

impl Paragraph {
    pub const LINE_BREAK: &'static str = "<br>";
}
