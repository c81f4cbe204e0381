use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification attached to a marking after the error rules have run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ErrorType {
    #[default]
    NoError,
    InvalidUri,
    DisambiguationUri,
    /// Part of the benchmark's tag set; no built-in rule produces it
    OutdatedUri,
    Overlapping,
    CombinedTagging,
    ErraticMarking,
    LongDescription,
}

impl ErrorType {
    /// Benchmark tag used in reports
    pub fn tag(&self) -> &'static str {
        match self {
            Self::NoError => "NOERROR",
            Self::InvalidUri => "INVALIDURIERR",
            Self::DisambiguationUri => "DISAMBIGURIERR",
            Self::OutdatedUri => "OUTDATEDURIERR",
            Self::Overlapping => "OVERLAPPINGERR",
            Self::CombinedTagging => "COMBINEDTAGGINGERR",
            Self::ErraticMarking => "ERRATICMARKINGERR",
            Self::LongDescription => "LONGDESCERR",
        }
    }

    pub fn is_error(&self) -> bool {
        *self != Self::NoError
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Gold-standard correction decided for a marking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Correction {
    #[default]
    NoCorrection,
    Delete,
    Check,
    Add,
}

/// A character span in a document together with the URI it links to.
///
/// `start` and `length` count Unicode scalar values, not bytes. The
/// classification and partner can only be written through [`Marking::classify`],
/// which enforces first-error-wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marking {
    pub start: usize,
    pub length: usize,
    pub uri: String,
    #[serde(default)]
    pub correction: Correction,
    #[serde(default)]
    error: ErrorType,
    #[serde(default)]
    classified_by: Option<String>,
    #[serde(default)]
    partner: Option<usize>,
}

impl Marking {
    /// Create an unclassified marking
    pub fn new<S: Into<String>>(start: usize, length: usize, uri: S) -> Self {
        Self {
            start,
            length,
            uri: uri.into(),
            correction: Correction::NoCorrection,
            error: ErrorType::NoError,
            classified_by: None,
            partner: None,
        }
    }

    #[must_use]
    pub fn with_correction(mut self, correction: Correction) -> Self {
        self.correction = correction;
        self
    }

    /// Exclusive end offset of the span
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.length)
    }

    pub fn error(&self) -> ErrorType {
        self.error
    }

    /// Index of the conflicting marking in the same document, if any
    pub fn partner(&self) -> Option<usize> {
        self.partner
    }

    /// Name of the rule that recorded the current classification
    pub fn classified_by(&self) -> Option<&str> {
        self.classified_by.as_deref()
    }

    /// Whether the two spans share at least one character
    pub fn intersects(&self, other: &Marking) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    pub fn same_span(&self, other: &Marking) -> bool {
        self.start == other.start && self.length == other.length
    }

    /// Record `error` on behalf of `rule`.
    ///
    /// Returns `false` and leaves the marking untouched when it already carries
    /// an error, or when `error` is `NoError`.
    pub fn classify(&mut self, rule: &str, error: ErrorType, partner: Option<usize>) -> bool {
        if !error.is_error() || self.error.is_error() {
            return false;
        }
        self.error = error;
        self.classified_by = Some(rule.to_string());
        self.partner = partner;
        true
    }

    pub(crate) fn remap_partner(&mut self, mapping: &[usize]) {
        self.partner = self.partner.and_then(|old| mapping.get(old).copied());
    }
}

/// A benchmark document: raw text plus its ordered markings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub uri: String,
    pub text: String,
    pub markings: Vec<Marking>,
}

impl Document {
    pub fn new<S: Into<String>>(uri: S, text: S, markings: Vec<Marking>) -> Self {
        Self {
            uri: uri.into(),
            text: text.into(),
            markings,
        }
    }

    /// Classifications of all markings in document order
    pub fn errors(&self) -> Vec<ErrorType> {
        self.markings.iter().map(Marking::error).collect()
    }

    /// Partners of all markings in document order
    pub fn partners(&self) -> Vec<Option<usize>> {
        self.markings.iter().map(Marking::partner).collect()
    }
}

/// Summary of one rule's pass over a document batch
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuleReport {
    pub rule: String,
    /// Markings this rule classified
    pub classified: usize,
    /// Markings where the rule fired but an earlier classification was kept
    pub refused: usize,
    /// Markings the rule could not inspect (span outside the text, empty span, marked for deletion)
    pub skipped: usize,
}

impl RuleReport {
    pub fn new<S: Into<String>>(rule: S) -> Self {
        Self {
            rule: rule.into(),
            ..Self::default()
        }
    }

    /// Count the outcome of a [`Marking::classify`] call
    pub fn record(&mut self, accepted: bool) {
        if accepted {
            self.classified += 1;
        } else {
            self.refused += 1;
        }
    }
}
