pub mod formatting;
pub mod io;
pub mod settings;

// Re-export key types for easier usage
pub use formatting::{
    Document, Formatter,
    blocks::{BlockKind, Fragment},
    default_formatter,
    excerpt::excerpt,
    format, format_fragments,
    inline::render_inline,
};
pub use settings::{FormatterSettings, SettingsError};
