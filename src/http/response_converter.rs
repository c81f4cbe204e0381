use crate::error::FetchFailure;
use crate::rdf::{RdfSyntax, ResolvedModel};
use reqwest::header::CONTENT_TYPE;
use reqwest::Response;
use tracing::{error, warn};

/// Turns a knowledge-base response into a parsed RDF model
#[derive(Clone)]
pub struct ResponseConverterImpl;

impl ResponseConverterImpl {
    pub fn new() -> Self {
        Self
    }

    /// Check status and content type, then read and parse the body.
    ///
    /// The response is consumed on every path, which returns its connection
    /// to the client's pool.
    pub async fn convert_response(&self, response: Response) -> Result<ResolvedModel, FetchFailure> {
        let status = response.status();
        let final_url = response.url().to_string();

        if !status.is_success() {
            warn!(url = %final_url, status = status.as_u16(), "Response has the wrong status");
            return Err(FetchFailure::BadStatus(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());

        let syntax = match content_type.as_deref().and_then(RdfSyntax::from_content_type) {
            Some(syntax) => syntax,
            None => {
                error!(
                    url = %final_url,
                    content_type = content_type.as_deref().unwrap_or("<missing>"),
                    "Couldn't find an RDF syntax for the response content type"
                );
                return Err(FetchFailure::UnsupportedContentType(content_type));
            }
        };

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchFailure::from_transport(&e))?;

        let body = std::str::from_utf8(&bytes)
            .map_err(|e| FetchFailure::ParseError(format!("body is not valid UTF-8: {}", e)))?;

        let model = ResolvedModel::parse(body, syntax, Some(&final_url)).map_err(|failure| {
            error!(url = %final_url, %syntax, error = %failure, "Couldn't parse the response");
            failure
        })?;

        if model.is_empty() {
            return Err(FetchFailure::EmptyModel);
        }

        Ok(model)
    }
}

impl Default for ResponseConverterImpl {
    fn default() -> Self {
        Self::new()
    }
}
