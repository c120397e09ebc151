use super::{
    kinds::{CodeSpan, Emphasis, Strong},
    parser::parse_inline,
    types::InlineNode,
};

/// Applies bold, italic and inline code markup to one line.
///
/// `line` must already be escaped (or trusted): text passes through
/// unchanged, only delimiters are replaced by elements. Running this again
/// over its own output changes nothing.
pub fn render_inline(line: &str) -> String {
    let nodes = parse_inline(0, line);
    let mut out = String::with_capacity(line.len() + 16);
    push_html(&mut out, &nodes, line);
    out
}

/// The text content of one line with all inline delimiters removed.
pub fn plain_text(line: &str) -> String {
    let nodes = parse_inline(0, line);
    let mut out = String::with_capacity(line.len());
    push_plain(&mut out, &nodes, line);
    out
}

fn push_html(out: &mut String, nodes: &[InlineNode], line: &str) {
    for node in nodes {
        match node {
            InlineNode::Text(sp) => out.push_str(sp.slice(line, 0)),
            InlineNode::CodeSpan { inner, .. } => {
                open(out, CodeSpan::TAG);
                out.push_str(inner.slice(line, 0));
                close(out, CodeSpan::TAG);
            }
            InlineNode::Strong { children, .. } => {
                open(out, Strong::TAG);
                push_html(out, children, line);
                close(out, Strong::TAG);
            }
            InlineNode::Emphasis { children, .. } => {
                open(out, Emphasis::TAG);
                push_html(out, children, line);
                close(out, Emphasis::TAG);
            }
        }
    }
}

fn push_plain(out: &mut String, nodes: &[InlineNode], line: &str) {
    for node in nodes {
        match node {
            InlineNode::Text(sp) | InlineNode::CodeSpan { inner: sp, .. } => {
                out.push_str(sp.slice(line, 0))
            }
            InlineNode::Strong { children, .. } | InlineNode::Emphasis { children, .. } => {
                push_plain(out, children, line)
            }
        }
    }
}

fn open(out: &mut String, tag: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
}

fn close(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
