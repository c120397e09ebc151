use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Blank entry at position {index} in {list} lead words")]
    BlankLeadWord { list: &'static str, index: usize },

    #[error("Failed to build {list} lead-word matcher: {source}")]
    LeadWordPattern {
        list: &'static str,
        source: regex::Error,
    },
}

/// Tunables for paragraph classification and rendering.
///
/// Lead words are data rather than logic so editors can adjust them per site
/// through the `[formatter]` table of the config file. Missing fields fall
/// back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterSettings {
    /// Words that mark a short paragraph as a heading when they open it.
    pub heading_lead_words: Vec<String>,
    /// Words that mark a short paragraph as a subheading when they open it.
    pub subheading_lead_words: Vec<String>,
    /// Headings must be shorter than this many characters.
    pub heading_max_chars: usize,
    /// Colon-terminated subheadings must be shorter than this.
    pub subheading_max_chars: usize,
    /// Lead-word subheadings must be shorter than this.
    pub lead_subheading_max_chars: usize,
    /// Quoted paragraphs must be longer than this to become blockquotes.
    pub block_quote_min_chars: usize,
    /// Text shown in place of empty content.
    pub placeholder: String,
    /// Escape `&`, `<` and `>` in author text before applying markup.
    pub escape_html: bool,
}

pub const DEFAULT_HEADING_LEAD_WORDS: &[&str] = &[
    "Introduction",
    "Overview",
    "Background",
    "Conclusion",
    "Summary",
    "Key Points",
    "Benefits",
    "Challenges",
    "Results",
    "Impact",
    "Next Steps",
    "Call to Action",
];

pub const DEFAULT_SUBHEADING_LEAD_WORDS: &[&str] = &[
    "What", "How", "Why", "When", "Where", "Who", "The", "Our", "This", "These", "That", "Those",
];

impl Default for FormatterSettings {
    fn default() -> Self {
        Self {
            heading_lead_words: to_owned(DEFAULT_HEADING_LEAD_WORDS),
            subheading_lead_words: to_owned(DEFAULT_SUBHEADING_LEAD_WORDS),
            heading_max_chars: 100,
            subheading_max_chars: 150,
            lead_subheading_max_chars: 100,
            block_quote_min_chars: 50,
            placeholder: "No content available.".to_string(),
            escape_html: true,
        }
    }
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}
