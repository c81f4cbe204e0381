use crate::error::FetchFailure;
use crate::rdf::{RdfSyntax, ResolvedModel};
use crate::traits::{ResourceFetcher, UriChecker};
use crate::types::ErrorType;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone)]
enum MockResponse {
    Turtle(String),
    Failure(FetchFailure),
}

/// Mock fetcher serving canned Turtle bodies or failures per URI.
///
/// Clones share the call counter, so a test can keep one handle and hand
/// the other to the checker.
#[derive(Clone)]
pub struct MockResourceFetcher {
    responses: HashMap<String, MockResponse>,
    calls: Arc<AtomicUsize>,
}

impl MockResourceFetcher {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_turtle<S: Into<String>>(mut self, uri: &str, body: S) -> Self {
        self.responses
            .insert(uri.to_string(), MockResponse::Turtle(body.into()));
        self
    }

    pub fn with_failure(mut self, uri: &str, failure: FetchFailure) -> Self {
        self.responses
            .insert(uri.to_string(), MockResponse::Failure(failure));
        self
    }

    /// Number of fetches performed so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockResourceFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceFetcher for MockResourceFetcher {
    async fn fetch(&self, uri: &str) -> Result<ResolvedModel, FetchFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.responses.get(uri) {
            Some(MockResponse::Turtle(body)) => {
                let model = ResolvedModel::parse(body, RdfSyntax::Turtle, None)?;
                if model.is_empty() {
                    Err(FetchFailure::EmptyModel)
                } else {
                    Ok(model)
                }
            }
            Some(MockResponse::Failure(failure)) => Err(failure.clone()),
            None => Err(FetchFailure::BadStatus(404)),
        }
    }
}

/// Mock checker answering from a fixed table; unknown URIs are `NoError`
#[derive(Clone)]
pub struct MockUriChecker {
    verdicts: HashMap<String, ErrorType>,
    checked: Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockUriChecker {
    pub fn new() -> Self {
        Self {
            verdicts: HashMap::new(),
            checked: Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    pub fn with_verdict(mut self, uri: &str, error: ErrorType) -> Self {
        self.verdicts.insert(uri.to_string(), error);
        self
    }

    /// URIs checked so far, in call order
    pub fn checked(&self) -> Vec<String> {
        self.checked.lock().map(|uris| uris.clone()).unwrap_or_default()
    }
}

impl Default for MockUriChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl UriChecker for MockUriChecker {
    async fn check_uri(&self, uri: &str) -> ErrorType {
        if let Ok(mut checked) = self.checked.lock() {
            checked.push(uri.to_string());
        }
        self.verdicts.get(uri).copied().unwrap_or_default()
    }
}
