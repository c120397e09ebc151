use crate::formatting::span::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Strong},
    types::InlineNode,
};

/// Parses one line of text into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Absolute offset where `s` begins in the line (for nested bodies)
/// - `s`: The text to parse, already escaped if escaping is on
///
/// # Precedence
/// At each position a code span is tried first, then strong, then emphasis.
/// Bodies are matched non-greedily and hold at least one character. Nothing
/// crosses a `<`, and an already-rendered `<code>` element is passed over
/// whole. A delimiter that finds no closer stays in a `Text` node.
///
/// # Returns
/// Nodes covering the entire input, in order.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if cur.starts_with(CodeSpan::ELEMENT_OPEN) {
            cur.skip_past(CodeSpan::ELEMENT_CLOSE);
            continue;
        }
        if let Some(node) = try_parse_construct(&mut cur) {
            let full = node.full();
            flush_text(&mut out, text_start, full.start);
            text_start = full.end;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

fn try_parse_construct(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if let Some(node) = try_parse_code_span(cur) {
        return Some(node);
    }
    if let Some(node) = try_parse_strong(cur) {
        return Some(node);
    }
    try_parse_emphasis(cur)
}

/// Attempts a code span at the current position.
///
/// Returns `None` if not at a backtick, if the span is empty, or if it
/// isn't closed before a tag or the end. On failure the cursor is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // `
    let inner_start = cur.pos();

    while !cur.eof() && !cur.at_tag() && cur.peek() != Some(CodeSpan::TICK) {
        cur.bump();
    }
    let inner_end = cur.pos();

    if cur.peek() != Some(CodeSpan::TICK) || inner_end == inner_start {
        *cur = saved;
        return None;
    }
    cur.bump(); // closing `

    Some(InlineNode::CodeSpan {
        full: Span::new(start, cur.pos()),
        inner: Span::new(inner_start, inner_end),
    })
}

/// Attempts `**body**` at the current position.
fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(Strong::DELIM) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(Strong::DELIM.len());

    let Some(inner) = scan_body(cur, |c| c.starts_with(Strong::DELIM), false) else {
        *cur = saved;
        return None;
    };
    cur.bump_n(Strong::DELIM.len());

    Some(InlineNode::Strong {
        full: Span::new(start, cur.pos()),
        inner,
        children: parse_inline(inner.start, inner.slice(cur.s, cur.base)),
    })
}

/// Attempts `*body*` at the current position.
///
/// Complete strong spans inside the body are stepped over, so
/// `*a **b** c*` is one emphasis holding a strong.
fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Emphasis::DELIM) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump();

    let Some(inner) = scan_body(cur, |c| c.peek() == Some(Emphasis::DELIM), true) else {
        *cur = saved;
        return None;
    };
    cur.bump();

    Some(InlineNode::Emphasis {
        full: Span::new(start, cur.pos()),
        inner,
        children: parse_inline(inner.start, inner.slice(cur.s, cur.base)),
    })
}

/// Scans a body from just after its opener, leaving the cursor on the closer.
///
/// The first unit of the body is always consumed, so a closer directly after
/// the opener does not count. Code spans (and strong spans when
/// `skip_strong`) are stepped over whole; a closer inside them is ignored.
fn scan_body(
    cur: &mut Cursor<'_>,
    closes: impl Fn(&Cursor<'_>) -> bool,
    skip_strong: bool,
) -> Option<Span> {
    let inner_start = cur.pos();
    let mut first = true;

    loop {
        if cur.eof() || cur.at_tag() {
            return None;
        }
        if try_parse_code_span(cur).is_some() {
            first = false;
            continue;
        }
        if skip_strong && try_parse_strong(cur).is_some() {
            first = false;
            continue;
        }
        if !first && closes(cur) {
            break;
        }
        cur.bump();
        first = false;
    }

    Some(Span::new(inner_start, cur.pos()))
}
