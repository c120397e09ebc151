//! # Snapshot Testing Support
//!
//! Utilities for testing the formatter via snapshot assertions and invariant
//! checks.
//!
//! ## Modules
//!
//! - **`normalize`**: renders a `Document` to a stable text listing (one line
//!   per fragment: kind, source preview, HTML) for `insta` snapshots
//! - **`invariants`**: runtime checks that fragments map 1:1 onto source
//!   paragraphs, in order, with in-bounds spans
//!
//! Formatter behaviour is pinned by fixture snapshots rather than a separate
//! grammar.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
