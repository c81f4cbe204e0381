//! Error classification rules and the ordered rule set that runs them.
//!
//! Precedence is first-error-wins: once a rule records an error on a marking,
//! later rules cannot replace it (see [`Marking::classify`]). The order of a
//! [`RuleSet`] is therefore its priority order.

pub mod combined_tagging;
pub mod erratic_marking;
pub mod long_description;
pub mod overlapping;
pub mod span;
pub mod uri_validity;

pub use combined_tagging::CombinedTaggingRule;
pub use erratic_marking::ErraticMarkingRule;
pub use long_description::LongDescriptionRule;
pub use overlapping::OverlappingRule;
pub use uri_validity::UriValidityRule;

use crate::traits::ErrorRule;
use crate::types::{Correction, Document, ErrorType, Marking, RuleReport};
use span::{Span, TextIndex};
use tracing::{debug, trace};

/// Rules applied one after another over the same document batch
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn ErrorRule>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule; it runs after (and has lower priority than) every rule already added
    #[must_use]
    pub fn with_rule<R: ErrorRule + 'static>(mut self, rule: R) -> Self {
        self.push(rule);
        self
    }

    pub fn push<R: ErrorRule + 'static>(&mut self, rule: R) {
        self.rules.push(Box::new(rule));
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Run every rule over the full batch, in order. Returns one report per rule.
    pub async fn check(&self, documents: &mut [Document]) -> Vec<RuleReport> {
        let mut reports = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            let report = rule.check(documents).await;
            debug!(
                rule = %report.rule,
                classified = report.classified,
                refused = report.refused,
                skipped = report.skipped,
                "Rule finished"
            );
            reports.push(report);
        }
        reports
    }
}

/// Record `error` on a marking and count the outcome
pub(crate) fn record(
    report: &mut RuleReport,
    document: &str,
    index: usize,
    marking: &mut Marking,
    error: ErrorType,
    partner: Option<usize>,
) {
    let accepted = marking.classify(&report.rule, error, partner);
    if accepted {
        debug!(rule = %report.rule, document, marking = index, %error, ?partner, "Marking classified");
    } else {
        trace!(
            rule = %report.rule,
            document,
            marking = index,
            kept = %marking.error(),
            "Earlier classification kept"
        );
    }
    report.record(accepted);
}

/// Apply a per-marking predicate over the span of every inspectable marking
pub(crate) fn classify_spans<P>(
    rule: &str,
    documents: &mut [Document],
    error: ErrorType,
    fires: P,
) -> RuleReport
where
    P: Fn(&Span<'_>) -> bool,
{
    let mut report = RuleReport::new(rule);

    for document in documents.iter_mut() {
        let index = TextIndex::new(&document.text);
        let hits: Vec<Option<bool>> = document
            .markings
            .iter()
            .map(|marking| inspectable_span(&index, marking).map(|span| fires(&span)))
            .collect();

        for (position, hit) in hits.into_iter().enumerate() {
            match hit {
                None => report.skipped += 1,
                Some(false) => {}
                Some(true) => record(
                    &mut report,
                    &document.uri,
                    position,
                    &mut document.markings[position],
                    error,
                    None,
                ),
            }
        }
    }

    report
}

/// Classify both sides of every related pair; each marking points at its first
/// related partner in document order
pub(crate) fn classify_pairs<R>(
    rule: &str,
    documents: &mut [Document],
    error: ErrorType,
    related: R,
) -> RuleReport
where
    R: Fn(&TextIndex<'_>, &Marking, &Marking) -> bool,
{
    let mut report = RuleReport::new(rule);

    for document in documents.iter_mut() {
        let index = TextIndex::new(&document.text);
        let usable: Vec<bool> = document
            .markings
            .iter()
            .map(|marking| inspectable_span(&index, marking).is_some())
            .collect();

        let partners: Vec<Option<usize>> = (0..document.markings.len())
            .map(|i| {
                if !usable[i] {
                    return None;
                }
                (0..document.markings.len()).find(|&j| {
                    j != i
                        && usable[j]
                        && related(&index, &document.markings[i], &document.markings[j])
                })
            })
            .collect();

        for (position, partner) in partners.into_iter().enumerate() {
            if !usable[position] {
                report.skipped += 1;
                continue;
            }
            if let Some(partner) = partner {
                record(
                    &mut report,
                    &document.uri,
                    position,
                    &mut document.markings[position],
                    error,
                    Some(partner),
                );
            }
        }
    }

    report
}

/// Span of a marking the span rules may look at; markings scheduled for
/// deletion and spans outside the text are skipped
pub(crate) fn inspectable_span<'a>(index: &TextIndex<'a>, marking: &Marking) -> Option<Span<'a>> {
    if marking.correction == Correction::Delete {
        return None;
    }
    index.span(marking)
}
