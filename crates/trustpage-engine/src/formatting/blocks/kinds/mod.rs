//! # Block Kinds
//!
//! Block-specific types that own their syntax knowledge: markers, quote
//! delimiters, and character-shape checks. The classifier calls these; it
//! never hardcodes `-`, `1.`, `"` or `:` itself.

pub mod block_quote;
pub mod heading;
pub mod list;
pub mod paragraph;

pub use block_quote::BlockQuote;
pub use heading::Heading;
pub use list::{ListItem, MarkerSig};
pub use paragraph::Paragraph;
