use super::classify_pairs;
use super::span::TextIndex;
use crate::traits::ErrorRule;
use crate::types::{Document, ErrorType, Marking, RuleReport};
use async_trait::async_trait;

/// Neighbouring markings separated only by whitespace, which should have been
/// a single marking
#[derive(Debug, Clone, Copy, Default)]
pub struct CombinedTaggingRule;

impl CombinedTaggingRule {
    pub const NAME: &'static str = "combined-tagging";

    pub fn new() -> Self {
        Self
    }
}

/// Whether the text between two disjoint markings is empty or whitespace
fn only_whitespace_between(index: &TextIndex<'_>, a: &Marking, b: &Marking) -> bool {
    let (first, second) = if a.start <= b.start { (a, b) } else { (b, a) };
    if first.end() > second.start {
        return false;
    }
    index
        .slice(first.end(), second.start)
        .is_some_and(|gap| gap.chars().all(char::is_whitespace))
}

#[async_trait]
impl ErrorRule for CombinedTaggingRule {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn check(&self, documents: &mut [Document]) -> RuleReport {
        classify_pairs(
            Self::NAME,
            documents,
            ErrorType::CombinedTagging,
            only_whitespace_between,
        )
    }
}
