use super::record;
use crate::traits::{ErrorRule, UriChecker};
use crate::types::{Correction, Document, RuleReport};
use async_trait::async_trait;
use tracing::debug;

/// Records `InvalidUri` / `DisambiguationUri` from a [`UriChecker`] verdict.
///
/// URIs are checked one after another, in document and marking order.
pub struct UriValidityRule<C> {
    checker: C,
}

impl<C: UriChecker> UriValidityRule<C> {
    pub const NAME: &'static str = "uri-validity";

    pub fn new(checker: C) -> Self {
        Self { checker }
    }

    pub fn checker(&self) -> &C {
        &self.checker
    }
}

#[async_trait]
impl<C: UriChecker> ErrorRule for UriValidityRule<C> {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn check(&self, documents: &mut [Document]) -> RuleReport {
        let mut report = RuleReport::new(Self::NAME);

        for document in documents.iter_mut() {
            debug!(document = %document.uri, markings = document.markings.len(), "Checking marking URIs");

            for (position, marking) in document.markings.iter_mut().enumerate() {
                if marking.correction == Correction::Delete {
                    report.skipped += 1;
                    continue;
                }

                let verdict = self.checker.check_uri(&marking.uri).await;
                if verdict.is_error() {
                    record(&mut report, &document.uri, position, marking, verdict, None);
                }
            }
        }

        report
    }
}
