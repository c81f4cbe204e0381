use crate::config::CheckerConfig;
use crate::error::{FetchFailure, Result};
use crate::http::{RequestBuilderImpl, ResponseConverterImpl};
use crate::rdf::ResolvedModel;
use crate::traits::ResourceFetcher;
use reqwest::Client;
use tracing::{debug, info};

/// Resource fetcher backed by a shared `reqwest::Client`
#[derive(Clone)]
pub struct HttpResourceFetcher {
    client: Client,
    request_builder: RequestBuilderImpl,
    response_converter: ResponseConverterImpl,
}

impl HttpResourceFetcher {
    /// Build a client from the timeout, redirect and user-agent settings
    pub fn new(config: &CheckerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::default()
            } else {
                reqwest::redirect::Policy::none()
            })
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self::with_client(client, config.accept.as_str()))
    }

    /// Reuse an existing client; its timeout and pool settings apply as-is
    pub fn with_client<S: Into<String>>(client: Client, accept: S) -> Self {
        Self {
            request_builder: RequestBuilderImpl::new(client.clone(), accept),
            response_converter: ResponseConverterImpl::new(),
            client,
        }
    }

    pub fn accept(&self) -> &str {
        self.request_builder.accept()
    }
}

impl ResourceFetcher for HttpResourceFetcher {
    async fn fetch(&self, uri: &str) -> std::result::Result<ResolvedModel, FetchFailure> {
        let request = self.request_builder.build_request(uri)?;

        let response = self.client.execute(request).await.map_err(|e| {
            let failure = FetchFailure::from_transport(&e);
            match &failure {
                FetchFailure::Timeout => {
                    debug!(uri, "Requesting the model took too long and was interrupted")
                }
                _ if e.is_connect() => info!(uri, error = %e, "Couldn't connect to the host"),
                _ => info!(uri, error = %e, "Exception while sending request"),
            }
            failure
        })?;

        self.response_converter.convert_response(response).await
    }
}
