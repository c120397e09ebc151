pub mod blocks;
pub mod excerpt;
pub mod inline;
pub mod paragraphs;
pub mod snapshot;
pub mod span;

use std::sync::OnceLock;

use crate::settings::{FormatterSettings, SettingsError};

use blocks::{BlockKind, Classifier, Fragment, ParagraphFacts, render_fragment};
use inline::render_inline;
use paragraphs::{normalize_line_breaks, paragraph_spans};

/// The formatted fragments of one piece of content, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub fragments: Vec<Fragment>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn kinds(&self) -> Vec<BlockKind> {
        self.fragments.iter().map(|f| f.kind).collect()
    }

    /// Fragment HTML joined with newlines.
    pub fn to_html(&self) -> String {
        self.fragments
            .iter()
            .map(|f| f.html.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Turns author text into HTML fragments.
///
/// Holds only compiled settings, so one value can be shared between threads
/// and called concurrently.
#[derive(Debug, Clone)]
pub struct Formatter {
    classifier: Classifier,
    placeholder: String,
    escape_html: bool,
}

impl Formatter {
    pub fn new(settings: &FormatterSettings) -> Result<Self, SettingsError> {
        Ok(Self {
            classifier: Classifier::new(settings)?,
            placeholder: settings.placeholder.clone(),
            escape_html: settings.escape_html,
        })
    }

    /// Classifies and renders every non-empty paragraph of `raw`.
    ///
    /// Empty input yields an empty document; see [`Formatter::format`] for
    /// the placeholder.
    pub fn document(&self, raw: &str) -> Document {
        let text = normalize_line_breaks(raw);
        let fragments: Vec<Fragment> = paragraph_spans(&text)
            .into_iter()
            .map(|span| {
                let facts = ParagraphFacts::new(span, span.slice(&text, 0));
                let kind = self.classifier.classify(&facts);
                let html = render_fragment(kind, facts.text, |line| self.render_line(line));
                Fragment { kind, span, html }
            })
            .collect();

        log::debug!(
            "formatted {} bytes into {} fragments",
            raw.len(),
            fragments.len()
        );
        Document { fragments }
    }

    /// Formats `raw` to an HTML string.
    ///
    /// Never fails. Empty or whitespace-only input returns
    /// [`Formatter::placeholder_html`].
    pub fn format(&self, raw: &str) -> String {
        let doc = self.document(raw);
        if doc.is_empty() {
            return self.placeholder_html();
        }
        doc.to_html()
    }

    /// The output for empty content: an italic note in a paragraph.
    pub fn placeholder_html(&self) -> String {
        format!(
            "<p><em>{}</em></p>",
            html_escape::encode_text(&self.placeholder)
        )
    }

    fn render_line(&self, line: &str) -> String {
        if self.escape_html {
            render_inline(&html_escape::encode_text(line))
        } else {
            render_inline(line)
        }
    }
}

/// The formatter built from [`FormatterSettings::default`], created on first
/// use and shared.
pub fn default_formatter() -> &'static Formatter {
    static DEFAULT: OnceLock<Formatter> = OnceLock::new();
    DEFAULT.get_or_init(|| {
        Formatter::new(&FormatterSettings::default())
            .expect("default formatter settings are valid")
    })
}

/// Formats `raw` with the default settings.
pub fn format(raw: &str) -> String {
    default_formatter().format(raw)
}

/// Fragments of `raw` with the default settings.
pub fn format_fragments(raw: &str) -> Vec<Fragment> {
    default_formatter().document(raw).fragments
}
