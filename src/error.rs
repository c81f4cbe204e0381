use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for nel-audit operations
pub type Result<T> = std::result::Result<T, AuditError>;

/// Errors raised while setting up a checker (configuration, HTTP client construction)
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Invalid IRI '{iri}'")]
    InvalidIri { iri: String },
}

impl AuditError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new invalid IRI error
    pub fn invalid_iri<S: Into<String>>(iri: S) -> Self {
        Self::InvalidIri { iri: iri.into() }
    }
}

/// Why a candidate URI could not be resolved to an RDF model.
///
/// Every variant is terminal for the URI in question: the fetcher never
/// retries, and the checker maps all of them to `INVALIDURIERR`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    #[error("malformed URI: {0}")]
    MalformedUri(String),

    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("request timed out")]
    Timeout,

    #[error("unexpected HTTP status {0}")]
    BadStatus(u16),

    #[error("unsupported content type: {}", .0.as_deref().unwrap_or("<missing>"))]
    UnsupportedContentType(Option<String>),

    #[error("could not parse response body: {0}")]
    ParseError(String),

    #[error("resolved model contains no triples")]
    EmptyModel,
}

impl FetchFailure {
    /// Map a reqwest transport error onto the failure taxonomy
    pub(crate) fn from_transport(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_builder() {
            Self::MalformedUri(error.to_string())
        } else if error.is_decode() {
            Self::ParseError(error.to_string())
        } else {
            Self::NetworkUnreachable(error.to_string())
        }
    }

    /// Whether the failure means "nothing resolved" rather than a transport problem
    pub fn is_unparseable(&self) -> bool {
        matches!(self, Self::ParseError(_) | Self::EmptyModel)
    }
}
