use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Media type requested from knowledge bases unless configured otherwise
pub const DEFAULT_ACCEPT: &str = "application/rdf+xml";

/// DBpedia property linking a disambiguation page to the entities it lists
pub const DEFAULT_DISAMBIGUATION_PREDICATE: &str =
    "http://dbpedia.org/ontology/wikiPageDisambiguates";

/// Settings for resolving candidate URIs
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Request timeout in seconds, covering connect and body transfer
    pub timeout_seconds: u64,
    /// Whether to follow redirects (DBpedia answers resource URIs with 303)
    pub follow_redirects: bool,
    /// Value of the `Accept` header
    pub accept: String,
    /// Value of the `User-Agent` header
    pub user_agent: String,
    /// Predicate whose presence on the requested subject marks a disambiguation page
    pub disambiguation_predicate: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            follow_redirects: true,
            accept: DEFAULT_ACCEPT.to_string(),
            user_agent: concat!("nel-audit/", env!("CARGO_PKG_VERSION")).to_string(),
            disambiguation_predicate: DEFAULT_DISAMBIGUATION_PREDICATE.to_string(),
        }
    }
}

impl CheckerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
