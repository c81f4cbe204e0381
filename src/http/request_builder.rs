use crate::error::FetchFailure;
use reqwest::header::{ACCEPT, ACCEPT_CHARSET};
use reqwest::{Client, Request};
use sophia_iri::Iri;
use url::Url;

/// Builds the content-negotiating GET request for a candidate URI
#[derive(Clone)]
pub struct RequestBuilderImpl {
    client: Client,
    accept: String,
}

impl RequestBuilderImpl {
    pub fn new<S: Into<String>>(client: Client, accept: S) -> Self {
        Self {
            client,
            accept: accept.into(),
        }
    }

    pub fn accept(&self) -> &str {
        &self.accept
    }

    /// Build `GET <uri>` with `Accept` and `Accept-Charset: UTF-8`
    pub fn build_request(&self, uri: &str) -> Result<Request, FetchFailure> {
        let url = parse_target(uri)?;

        self.client
            .get(url)
            .header(ACCEPT, self.accept.as_str())
            .header(ACCEPT_CHARSET, "UTF-8")
            .build()
            .map_err(|e| FetchFailure::MalformedUri(e.to_string()))
    }
}

/// Accept only absolute http(s) IRIs with a host
pub(crate) fn parse_target(uri: &str) -> Result<Url, FetchFailure> {
    let uri = uri.trim();
    Iri::new(uri).map_err(|_| FetchFailure::MalformedUri(format!("{}: not a valid IRI", uri)))?;

    let url = Url::parse(uri).map_err(|e| FetchFailure::MalformedUri(format!("{}: {}", uri, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(FetchFailure::MalformedUri(format!(
            "{}: unsupported scheme '{}'",
            uri,
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(FetchFailure::MalformedUri(format!("{}: missing host", uri)));
    }

    Ok(url)
}
