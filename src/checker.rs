//! URI validity checking on top of a [`ResourceFetcher`].

use crate::config::CheckerConfig;
use crate::error::{FetchFailure, Result};
use crate::http::HttpResourceFetcher;
use crate::traits::{ResourceFetcher, UriChecker};
use crate::types::ErrorType;
use tracing::{debug, info};

/// Outcome of checking a URI, with the reason when it is invalid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriVerdict {
    Valid,
    Disambiguation,
    Empty,
    Unresolved(FetchFailure),
}

impl UriVerdict {
    pub fn error_type(&self) -> ErrorType {
        match self {
            Self::Valid => ErrorType::NoError,
            Self::Disambiguation => ErrorType::DisambiguationUri,
            Self::Empty | Self::Unresolved(_) => ErrorType::InvalidUri,
        }
    }
}

/// Checks URIs by dereferencing them and inspecting the returned RDF
#[derive(Clone)]
pub struct HttpUriChecker<F = HttpResourceFetcher> {
    fetcher: F,
    disambiguation_predicate: String,
}

impl HttpUriChecker<HttpResourceFetcher> {
    /// Build a checker with its own HTTP client
    pub fn from_config(config: &CheckerConfig) -> Result<Self> {
        config.validate()?;
        let fetcher = HttpResourceFetcher::new(config)?;
        Ok(Self::new(fetcher, config.disambiguation_predicate.clone()))
    }
}

impl<F: ResourceFetcher> HttpUriChecker<F> {
    pub fn new<S: Into<String>>(fetcher: F, disambiguation_predicate: S) -> Self {
        Self {
            fetcher,
            disambiguation_predicate: disambiguation_predicate.into(),
        }
    }

    pub fn disambiguation_predicate(&self) -> &str {
        &self.disambiguation_predicate
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Classify `uri`, keeping the failure reason
    pub async fn classify_uri(&self, uri: &str) -> UriVerdict {
        let uri = uri.trim();
        if uri.is_empty() {
            info!(uri, "INVALID_URI (empty)");
            return UriVerdict::Empty;
        }

        let model = match self.fetcher.fetch(uri).await {
            Ok(model) => model,
            Err(failure) => {
                info!(uri, reason = %failure, "INVALID_URI because the model could not be resolved");
                return UriVerdict::Unresolved(failure);
            }
        };

        if model.has_property(uri, &self.disambiguation_predicate) {
            info!(uri, "DISAMBIG_URI");
            UriVerdict::Disambiguation
        } else {
            debug!(uri, triples = model.triple_count(), "URI resolved");
            UriVerdict::Valid
        }
    }
}

impl<F: ResourceFetcher> UriChecker for HttpUriChecker<F> {
    async fn check_uri(&self, uri: &str) -> ErrorType {
        self.classify_uri(uri).await.error_type()
    }
}
