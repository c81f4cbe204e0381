//! Document normalization run by the caller before the error rules.

use crate::rules::span::TextIndex;
use crate::traits::Preprocessor;
use crate::types::{Document, Marking};
use tracing::debug;

/// Trims whitespace off marking spans and orders markings by `(start, length)`.
///
/// Partner indices are rewritten to follow their markings. Spans that do not
/// fit the text, or consist only of whitespace, keep their offsets.
#[derive(Debug, Clone, Copy)]
pub struct SpanNormalizer {
    trim: bool,
    sort: bool,
}

impl SpanNormalizer {
    pub fn new() -> Self {
        Self {
            trim: true,
            sort: true,
        }
    }

    #[must_use]
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    #[must_use]
    pub fn sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    fn trim_marking(index: &TextIndex<'_>, marking: &mut Marking) -> bool {
        let Some(span) = index.span(marking) else {
            return false;
        };
        let leading = span.surface.chars().take_while(|c| c.is_whitespace()).count();
        if leading == marking.length {
            return false;
        }
        let trailing = span
            .surface
            .chars()
            .rev()
            .take_while(|c| c.is_whitespace())
            .count();
        if leading == 0 && trailing == 0 {
            return false;
        }
        marking.start += leading;
        marking.length -= leading + trailing;
        true
    }

    fn sort_markings(markings: &mut Vec<Marking>) -> bool {
        let mut order: Vec<usize> = (0..markings.len()).collect();
        order.sort_by_key(|&i| (markings[i].start, markings[i].length));
        if order.iter().enumerate().all(|(new, &old)| new == old) {
            return false;
        }

        // old index -> new index
        let mut mapping = vec![0; order.len()];
        for (new, &old) in order.iter().enumerate() {
            mapping[old] = new;
        }

        let mut slots: Vec<Option<Marking>> = markings.drain(..).map(Some).collect();
        for old in order {
            if let Some(mut marking) = slots[old].take() {
                marking.remap_partner(&mapping);
                markings.push(marking);
            }
        }
        true
    }
}

impl Default for SpanNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Preprocessor for SpanNormalizer {
    fn process(&self, documents: &mut [Document]) {
        for document in documents.iter_mut() {
            let mut trimmed = 0;
            if self.trim {
                let index = TextIndex::new(&document.text);
                for marking in document.markings.iter_mut() {
                    if Self::trim_marking(&index, marking) {
                        trimmed += 1;
                    }
                }
            }

            let reordered = self.sort && Self::sort_markings(&mut document.markings);

            if trimmed > 0 || reordered {
                debug!(document = %document.uri, trimmed, reordered, "Normalized markings");
            }
        }
    }
}
