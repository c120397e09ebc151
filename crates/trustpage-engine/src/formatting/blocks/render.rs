use crate::formatting::paragraphs::soft_lines;

use super::kinds::{BlockQuote, ListItem, Paragraph};
use super::types::BlockKind;

/// Renders one classified paragraph to HTML.
///
/// `inline` turns a single line of author text into escaped, emphasised
/// HTML. It is applied per line, so emphasis never spans a soft break.
pub fn render_fragment(kind: BlockKind, text: &str, inline: impl Fn(&str) -> String) -> String {
    let tag = kind.tag();
    let body = match kind {
        BlockKind::UnorderedList | BlockKind::OrderedList => list_items(text, &inline),
        BlockKind::BlockQuote => joined_lines(BlockQuote::strip(text), &inline),
        BlockKind::Heading | BlockKind::Subheading | BlockKind::Paragraph => {
            joined_lines(text, &inline)
        }
    };
    format!("<{tag}>{body}</{tag}>")
}

fn joined_lines(text: &str, inline: &impl Fn(&str) -> String) -> String {
    soft_lines(text)
        .map(inline)
        .collect::<Vec<_>>()
        .join(Paragraph::LINE_BREAK)
}

/// One `<li>` per line, marker stripped. A line that is only a marker gives
/// an empty item.
fn list_items(text: &str, inline: &impl Fn(&str) -> String) -> String {
    soft_lines(text)
        .map(ListItem::strip)
        .map(|item| format!("<li>{}</li>", inline(item)))
        .collect()
}
