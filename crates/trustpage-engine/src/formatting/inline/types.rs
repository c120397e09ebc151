use crate::formatting::span::Span;

/// A parsed inline node with byte spans into the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Text outside any construct, including unmatched delimiters.
    Text(Span),
    /// A backtick-delimited code span. Raw zone: no parsing inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Content between the backticks.
        inner: Span,
    },
    /// `**...**`
    Strong {
        full: Span,
        inner: Span,
        children: Vec<InlineNode>,
    },
    /// `*...*`
    Emphasis {
        full: Span,
        inner: Span,
        children: Vec<InlineNode>,
    },
}

impl InlineNode {
    /// The full span of any variant, delimiters included.
    pub fn full(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::CodeSpan { full, .. }
            | InlineNode::Strong { full, .. }
            | InlineNode::Emphasis { full, .. } => *full,
        }
    }
}
