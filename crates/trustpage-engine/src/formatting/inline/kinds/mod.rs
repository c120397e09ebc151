//! # Inline Kinds
//!
//! Inline types that own their delimiters and output elements.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` ` `` raw zone, `<code>`
//! - **`Strong`**: `**`, `<strong>`
//! - **`Emphasis`**: `*`, `<em>`
//! - **`Markup`**: `<`, the boundary no inline construct crosses
//!
//! The parser reads these constants; it never hardcodes `*` or `` ` ``.

pub mod code_span;
pub mod emphasis;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};

/// Already-rendered markup in the text being parsed.
pub struct Markup;

impl Markup {
    pub const TAG_OPEN: u8 = b'<';
}
