use super::classify_spans;
use crate::traits::ErrorRule;
use crate::types::{Document, ErrorType, RuleReport};
use async_trait::async_trait;

/// Markings that cut a word in two or carry leading/trailing whitespace
#[derive(Debug, Clone, Copy, Default)]
pub struct ErraticMarkingRule;

impl ErraticMarkingRule {
    pub const NAME: &'static str = "erratic-marking";

    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ErrorRule for ErraticMarkingRule {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn check(&self, documents: &mut [Document]) -> RuleReport {
        classify_spans(Self::NAME, documents, ErrorType::ErraticMarking, |span| {
            !span.is_word_aligned()
        })
    }
}
