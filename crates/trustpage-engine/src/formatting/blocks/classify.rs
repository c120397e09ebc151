use regex::Regex;

use crate::formatting::span::Span;
use crate::settings::{FormatterSettings, SettingsError};

use super::kinds::{BlockQuote, Heading, ListItem, MarkerSig};
use super::types::BlockKind;

/// Local facts about one trimmed paragraph.
///
/// Classification only ever looks at these; there is no lookback or
/// lookahead across paragraphs.
#[derive(Debug, Clone, Copy)]
pub struct ParagraphFacts<'a> {
    /// Span of the trimmed paragraph in the normalized source.
    pub span: Span,
    /// The trimmed paragraph text.
    pub text: &'a str,
    /// Length in characters, not bytes.
    pub chars: usize,
}

impl<'a> ParagraphFacts<'a> {
    pub fn new(span: Span, text: &'a str) -> Self {
        Self {
            span,
            text,
            chars: text.chars().count(),
        }
    }
}

/// One entry of the classification table.
pub struct Rule {
    /// Stable name, used in logs and tests.
    pub name: &'static str,
    apply: for<'p> fn(&Classifier, &ParagraphFacts<'p>) -> Option<BlockKind>,
}

impl Rule {
    pub fn apply(&self, classifier: &Classifier, facts: &ParagraphFacts<'_>) -> Option<BlockKind> {
        (self.apply)(classifier, facts)
    }
}

/// Rules in precedence order. The first rule returning a kind wins and
/// anything left over is a paragraph. Lists come first: a list paragraph
/// can look like a heading (`"Steps:\n1. ..."`) and must not become one.
pub const RULES: &[Rule] = &[
    Rule {
        name: "list",
        apply: Classifier::list,
    },
    Rule {
        name: "heading",
        apply: Classifier::heading,
    },
    Rule {
        name: "subheading",
        apply: Classifier::subheading,
    },
    Rule {
        name: "block_quote",
        apply: Classifier::block_quote,
    },
];

/// Case-insensitive matcher for words opening a paragraph.
#[derive(Debug, Clone)]
pub struct LeadWords {
    re: Option<Regex>,
}

impl LeadWords {
    /// Compiles `words` into one anchored alternation.
    ///
    /// An empty list never matches. Blank entries are rejected since they
    /// would match every paragraph.
    pub fn new(list: &'static str, words: &[String]) -> Result<Self, SettingsError> {
        if let Some(index) = words.iter().position(|w| w.trim().is_empty()) {
            return Err(SettingsError::BlankLeadWord { list, index });
        }
        if words.is_empty() {
            return Ok(Self { re: None });
        }

        let alternation = words
            .iter()
            .map(|w| regex::escape(w.trim()))
            .collect::<Vec<_>>()
            .join("|");
        let re = Regex::new(&format!(r"(?i)^(?:{alternation})(?:$|\W)"))
            .map_err(|source| SettingsError::LeadWordPattern { list, source })?;
        Ok(Self { re: Some(re) })
    }

    /// True when `s` opens with one of the words as a whole word.
    ///
    /// `Introductions` does not match `Introduction`.
    pub fn opens(&self, s: &str) -> bool {
        self.re.as_ref().is_some_and(|re| re.is_match(s))
    }
}

/// Classifies paragraphs by running [`RULES`] top to bottom.
#[derive(Debug, Clone)]
pub struct Classifier {
    heading_words: LeadWords,
    subheading_words: LeadWords,
    heading_max_chars: usize,
    subheading_max_chars: usize,
    lead_subheading_max_chars: usize,
    block_quote_min_chars: usize,
}

impl Classifier {
    pub fn new(settings: &FormatterSettings) -> Result<Self, SettingsError> {
        Ok(Self {
            heading_words: LeadWords::new("heading", &settings.heading_lead_words)?,
            subheading_words: LeadWords::new("subheading", &settings.subheading_lead_words)?,
            heading_max_chars: settings.heading_max_chars,
            subheading_max_chars: settings.subheading_max_chars,
            lead_subheading_max_chars: settings.lead_subheading_max_chars,
            block_quote_min_chars: settings.block_quote_min_chars,
        })
    }

    /// The precedence table this classifier evaluates.
    pub fn rules(&self) -> &'static [Rule] {
        RULES
    }

    /// Classifies a paragraph. Total: unmatched input is a paragraph.
    pub fn classify(&self, facts: &ParagraphFacts<'_>) -> BlockKind {
        for rule in self.rules() {
            if let Some(kind) = rule.apply(self, facts) {
                log::trace!("{:?} -> {kind:?} (rule `{}`)", facts.span, rule.name);
                return kind;
            }
        }
        log::trace!("{:?} -> Paragraph (no rule)", facts.span);
        BlockKind::Paragraph
    }

    fn list(&self, p: &ParagraphFacts<'_>) -> Option<BlockKind> {
        ListItem::detect(p.text).map(|sig| match sig {
            MarkerSig::Numbered => BlockKind::OrderedList,
            MarkerSig::Bullet => BlockKind::UnorderedList,
        })
    }

    fn heading(&self, p: &ParagraphFacts<'_>) -> Option<BlockKind> {
        if p.chars >= self.heading_max_chars {
            return None;
        }
        // Numbered titles with text are taken by the list rule first, so
        // this only fires for a bare number such as `2024.`.
        let signal = Heading::is_colon_terminated(p.text)
            || Heading::is_numbered_title(p.text)
            || Heading::is_bare_title(p.text)
            || self.heading_words.opens(p.text);
        signal.then_some(BlockKind::Heading)
    }

    fn subheading(&self, p: &ParagraphFacts<'_>) -> Option<BlockKind> {
        if p.chars >= self.subheading_max_chars {
            return None;
        }
        let signal = Heading::is_label(p.text)
            || (p.chars < self.lead_subheading_max_chars && self.subheading_words.opens(p.text));
        signal.then_some(BlockKind::Subheading)
    }

    fn block_quote(&self, p: &ParagraphFacts<'_>) -> Option<BlockKind> {
        (p.chars > self.block_quote_min_chars && BlockQuote::is_wrapped(p.text))
            .then_some(BlockKind::BlockQuote)
    }
}
