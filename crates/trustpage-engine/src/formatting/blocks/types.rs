use crate::formatting::span::Span;

/// The block-level kind a paragraph was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Top-level heading inside the content (`<h2>`).
    Heading,
    /// Secondary heading (`<h3>`).
    Subheading,
    /// `-` or `•` items (`<ul>`).
    UnorderedList,
    /// Numbered items (`<ol>`).
    OrderedList,
    /// A quoted paragraph with its quotes removed (`<blockquote>`).
    BlockQuote,
    /// Default when no rule matches (`<p>`).
    Paragraph,
}

impl BlockKind {
    /// The HTML element wrapping a fragment of this kind.
    pub fn tag(self) -> &'static str {
        match self {
            BlockKind::Heading => "h2",
            BlockKind::Subheading => "h3",
            BlockKind::UnorderedList => "ul",
            BlockKind::OrderedList => "ol",
            BlockKind::BlockQuote => "blockquote",
            BlockKind::Paragraph => "p",
        }
    }

    pub fn is_list(self) -> bool {
        matches!(self, BlockKind::UnorderedList | BlockKind::OrderedList)
    }
}

/// One classified and rendered paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: BlockKind,
    /// Trimmed paragraph span in the line-break-normalized source.
    pub span: Span,
    /// Rendered HTML with inline emphasis applied.
    pub html: String,
}
