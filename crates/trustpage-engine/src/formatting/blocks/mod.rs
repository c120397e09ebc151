//! # Block Classification
//!
//! Each trimmed paragraph is classified on its own text and rendered to one
//! HTML fragment.
//!
//! ## Phases
//!
//! 1. **Facts** (`classify::ParagraphFacts`): the trimmed text and its length
//!    in characters
//! 2. **Classification** (`classify::Classifier`): an ordered table of named
//!    rules (`RULES`); the first rule returning a kind wins, the fallback is
//!    `Paragraph`
//! 3. **Rendering** (`render`): the kind picks the element, markers and quote
//!    delimiters are stripped, each line goes through the inline pass
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind` and `Fragment`
//! - **`kinds`**: per-kind syntax knowledge (`ListItem`, `Heading`, `BlockQuote`, `Paragraph`)
//! - **`classify`**: `Classifier`, `Rule`, `LeadWords`
//! - **`render`**: `render_fragment`
//!
//! ## Key Invariants
//!
//! - Exactly one fragment per non-empty paragraph, in source order
//! - Inline emphasis never changes a fragment's kind

pub mod classify;
pub mod kinds;
pub mod render;
pub mod types;

pub use classify::{Classifier, LeadWords, ParagraphFacts, RULES, Rule};
pub use render::render_fragment;
pub use types::{BlockKind, Fragment};
