//! nel-audit - URI validity checking and error classification for entity-linking benchmarks
//!
//! This crate dereferences the URIs of annotated entity mentions, decides
//! whether they are valid, disambiguation pages or unresolvable, and runs a
//! set of rules that classify annotation errors in benchmark documents.

// Core modules
pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Resolution
pub mod checker;
pub mod http;
pub mod rdf;

// Classification
pub mod preprocess;
pub mod rules;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types for convenience
pub use checker::{HttpUriChecker, UriVerdict};
pub use config::{CheckerConfig, CheckerConfigBuilder, ConfigLoader, DefaultConfigLoader};
pub use error::{AuditError, FetchFailure, Result};
pub use http::HttpResourceFetcher;
pub use preprocess::SpanNormalizer;
pub use rdf::{RdfSyntax, ResolvedModel};
pub use rules::{
    CombinedTaggingRule, ErraticMarkingRule, LongDescriptionRule, OverlappingRule, RuleSet,
    UriValidityRule,
};
pub use traits::{ErrorRule, Preprocessor, ResourceFetcher, UriChecker};
pub use types::{Correction, Document, ErrorType, Marking, RuleReport};
