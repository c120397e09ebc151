//! # Inline Emphasis
//!
//! Cursor-based tokenizer for bold, italic and inline code, run on one line
//! of block text after classification.
//!
//! ## Architecture
//!
//! Instead of chained find-and-replace passes, the parser walks the line
//! once and builds an `InlineNode` tree; rendering is a separate walk. This
//! keeps `**` from being eaten as two `*` and makes `` `code` `` a raw zone.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, CodeSpan, Strong, Emphasis)
//! - **`kinds`**: delimiter and element constants
//! - **`cursor`**: `Cursor` for byte-wise scanning with position tracking
//! - **`parser`**: `parse_inline()` with `try_parse_*` helpers
//! - **`render`**: `render_inline()` and `plain_text()`
//!
//! ## Precedence
//!
//! Code span, then strong, then emphasis, at each position. No construct
//! crosses a `<`, so rendered output re-parses to itself.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod render;
pub mod types;

pub use parser::parse_inline;
pub use render::{plain_text, render_inline};
pub use types::InlineNode;
