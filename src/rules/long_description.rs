use super::classify_spans;
use super::span::Span;
use crate::traits::ErrorRule;
use crate::types::{Document, ErrorType, RuleReport};
use async_trait::async_trait;

pub const DEFAULT_MIN_TOKENS: usize = 4;

/// Words that open a relative or copular clause inside a marking
pub const CLAUSE_MARKERS: &[&str] = &[
    "that", "which", "who", "whom", "whose", "where", "is", "was", "are", "were",
];

/// Markings that cover an entity mention plus a description of it, e.g.
/// "Sydney that is in Australia" instead of "Sydney"
#[derive(Debug, Clone, Copy)]
pub struct LongDescriptionRule {
    min_tokens: usize,
}

impl LongDescriptionRule {
    pub const NAME: &'static str = "long-description";

    pub fn new() -> Self {
        Self {
            min_tokens: DEFAULT_MIN_TOKENS,
        }
    }

    /// Minimum number of tokens a marking needs before it is considered
    #[must_use]
    pub fn with_min_tokens(mut self, min_tokens: usize) -> Self {
        self.min_tokens = min_tokens;
        self
    }

    pub fn min_tokens(&self) -> usize {
        self.min_tokens
    }

    fn is_long_description(&self, span: &Span<'_>) -> bool {
        if !span.is_word_aligned() {
            return false;
        }
        let tokens: Vec<&str> = span.tokens().collect();
        tokens.len() >= self.min_tokens
            && tokens
                .iter()
                .skip(1)
                .any(|token| CLAUSE_MARKERS.iter().any(|marker| token.eq_ignore_ascii_case(marker)))
    }
}

impl Default for LongDescriptionRule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ErrorRule for LongDescriptionRule {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn check(&self, documents: &mut [Document]) -> RuleReport {
        classify_spans(Self::NAME, documents, ErrorType::LongDescription, |span| {
            self.is_long_description(span)
        })
    }
}
