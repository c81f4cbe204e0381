use super::classify_pairs;
use crate::traits::ErrorRule;
use crate::types::{Document, ErrorType, RuleReport};
use async_trait::async_trait;

/// Markings whose spans partially overlap. Identical spans are not overlaps.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlappingRule;

impl OverlappingRule {
    pub const NAME: &'static str = "overlapping";

    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ErrorRule for OverlappingRule {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn check(&self, documents: &mut [Document]) -> RuleReport {
        classify_pairs(Self::NAME, documents, ErrorType::Overlapping, |_, a, b| {
            a.intersects(b) && !a.same_span(b)
        })
    }
}
