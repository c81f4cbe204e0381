use crate::error::{FetchFailure, Result};
use crate::rdf::ResolvedModel;
use crate::types::{Document, ErrorType, RuleReport};
use async_trait::async_trait;
use std::future::Future;

/// Retrieves and parses the RDF representation of a candidate URI
pub trait ResourceFetcher: Send + Sync {
    /// Fetch `uri` and parse the response. Every failure path yields a
    /// [`FetchFailure`]; nothing is retried.
    fn fetch(
        &self,
        uri: &str,
    ) -> impl Future<Output = std::result::Result<ResolvedModel, FetchFailure>> + Send;
}

/// Classifies a candidate URI as `NoError`, `InvalidUri` or `DisambiguationUri`
pub trait UriChecker: Send + Sync {
    fn check_uri(&self, uri: &str) -> impl Future<Output = ErrorType> + Send;
}

/// A rule that scans a document batch and classifies markings in place.
///
/// Documents are independent; a rule keeps no state between them. Rules never
/// fail: markings they cannot inspect are skipped and counted in the report.
#[async_trait]
pub trait ErrorRule: Send + Sync {
    /// Name recorded on the markings this rule classifies
    fn name(&self) -> &str;

    async fn check(&self, documents: &mut [Document]) -> RuleReport;
}

/// Normalizes documents before the rules run
pub trait Preprocessor: Send + Sync {
    fn process(&self, documents: &mut [Document]);
}

/// Trait for configuration validation
pub trait ConfigValidator: Send + Sync {
    type Config;

    fn validate(&self, config: &Self::Config) -> Result<()>;
}
